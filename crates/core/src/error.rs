//! Error types for Emo-SL
//!
//! The analysis stages themselves never fail: missing lexicons degrade to empty
//! tables and malformed rows are skipped. Errors only surface at the edges
//! (configuration files, report output, user input at the CLI).
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for Emo-SL operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Emo-SL
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (report output, config file access)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid user-supplied input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Build a configuration error from any displayable message
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Build an invalid-input error from any displayable message
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
