//! Error types for deck-files

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Unknown main keyword '{keyword}' for {kind} file")]
    UnknownMainKeyword { kind: String, keyword: String },

    #[error("Unknown sub-keyword '{keyword}' under #{main} in {kind} file")]
    UnknownSubKeyword {
        kind: String,
        main: String,
        keyword: String,
    },

    #[error("Not a readable file: {path}")]
    MissingFile { path: PathBuf },

    #[error(transparent)]
    Blocks(#[from] deck_blocks::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
