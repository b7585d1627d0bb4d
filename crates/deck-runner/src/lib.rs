//! Invocation of the external simulation executable.
//!
//! Locates the simulator (explicit config path or PATH search), runs it
//! blocking over a written input deck, captures its output, and reports
//! success or failure with a log tail. There is no solver in this
//! workspace; everything numerical happens inside the external process.

pub mod config;
pub mod discovery;
pub mod error;
pub mod runner;

pub use config::RunnerConfig;
pub use discovery::{find_on_path, resolve_executable, EXECUTABLE_NAME};
pub use error::{Error, Result};
pub use runner::{run, RunReport};
