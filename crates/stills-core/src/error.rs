//! Error types for stills-core

use thiserror::Error;

use crate::models::TagKind;

/// Result type alias using stills-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in stills-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// A tag was built with an option list that does not match its kind
    #[error("Invalid {kind} tag: {reason}")]
    InvalidTag { kind: TagKind, reason: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
