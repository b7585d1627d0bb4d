//! Error types for deck-results

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed result file at line {line}: {message}")]
    Malformed { line: usize, message: String },

    #[error("Result table has no variable declaration")]
    MissingVariables,

    #[error("Unknown element type '{name}' at line {line}")]
    UnknownElementType { name: String, line: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            message: message.into(),
        }
    }
}
