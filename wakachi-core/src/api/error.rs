//! Error types for the API

use thiserror::Error;

use crate::domain::CoreError;
use crate::external::BoxError;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Annotations or input text that fail boundary validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The syntax annotator failed
    #[error("Annotation failed: {0}")]
    Annotation(#[source] BoxError),

    /// The entity extractor failed
    #[error("Entity extraction failed: {0}")]
    Entity(#[source] BoxError),

    /// Engine invariant violated
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Infrastructure error (I/O, etc.)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
