//! Error types for all wordstat operations.

use thiserror::Error;

/// Errors surfaced by the tokenizer, the hash map and the statistics engine.
#[derive(Debug, Error)]
pub enum WordStatError {
    /// The input file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A key or word is not present.
    #[error("not found: {0}")]
    NotFound(String),

    /// A caller-supplied argument is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The configuration file is not valid TOML or has the wrong shape.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl WordStatError {
    /// Whether this error reports a missing key.
    pub fn is_not_found(&self) -> bool {
        matches!(self, WordStatError::NotFound(_))
    }
}

/// Convenience result type.
pub type WsResult<T> = Result<T, WordStatError>;
