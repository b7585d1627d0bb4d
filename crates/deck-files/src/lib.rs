//! Deck file kinds and project aggregation.
//!
//! Builds on `deck-blocks`: each file type of the simulator's input deck is
//! described by a [`FileKind`] (marker dialect plus optional keyword
//! whitelist), wrapped in an [`InputFile`] that knows its on-disk location,
//! and grouped into a [`Project`] that writes the complete input set and
//! loads existing model directories.

pub mod error;
pub mod file;
pub mod kind;
pub mod project;

pub use error::{Error, Result};
pub use file::InputFile;
pub use kind::{FileKind, KeywordTable, MainKeyword};
pub use project::Project;
