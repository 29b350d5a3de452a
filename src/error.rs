//! Error types for Lexiscan

use thiserror::Error;

/// Errors that can occur while building screening reports
#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("Failed to parse metrics payload: {0}")]
    ParseError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid quiz definition: {0}")]
    InvalidQuizDefinition(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),
}
