//! Domain error types

use thiserror::Error;

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

/// Error when parsing an image size such as `100x50`
#[derive(Debug, Clone, Error)]
#[error("Invalid size: \"{input}\". Expected <width>x<height> (e.g., 100x100)")]
pub struct ImageSizeParseError {
    pub input: String,
}
