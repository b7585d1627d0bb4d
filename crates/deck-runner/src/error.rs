//! Error types for deck-runner

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Simulator executable '{name}' not found on PATH and no explicit path configured")]
    ExecutableNotFound { name: String },

    #[error("Simulation failed with exit code {code}: {log_tail}")]
    Failed { code: i32, log_tail: String },

    #[error("Simulation terminated by signal")]
    Terminated,

    #[error("Expected output file missing: {path}")]
    MissingOutput { path: PathBuf },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error(transparent)]
    Files(#[from] deck_files::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
