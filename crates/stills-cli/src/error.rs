use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] stills_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid event '{event}': {reason}")]
    InvalidEvent { event: String, reason: String },
    #[error("Invalid size '{0}': expected WIDTH or WIDTHxHEIGHT")]
    InvalidSize(String),
    #[error("Invalid timestamp '{0}': expected YYYY-MM-DDTHH:MM")]
    InvalidTimestamp(String),
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Config already exists at {}; pass --force to overwrite", .0.display())]
    ConfigExists(PathBuf),
}
