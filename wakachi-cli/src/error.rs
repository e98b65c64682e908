//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// `--attr` value not of the form `key=value`
    InvalidAttribute(String),
    /// Configuration error
    ConfigError(String),
    /// Segmentation error from core
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidAttribute(attr) => {
                write!(f, "Invalid attribute (expected key=value): {attr}")
            }
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<wakachi_core::ApiError> for CliError {
    fn from(error: wakachi_core::ApiError) -> Self {
        match error {
            wakachi_core::ApiError::Configuration(msg) => CliError::ConfigError(msg),
            other => CliError::ProcessingError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
