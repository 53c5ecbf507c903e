//! Error types for nn-history crate.

use thiserror::Error;

/// Errors that can occur when handling training histories.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The input is neither a history object nor a raw metric mapping.
    #[error("invalid history shape: {0}")]
    InvalidShape(String),

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl HistoryError {
    /// Creates an invalid shape error.
    #[must_use]
    pub fn invalid_shape(reason: impl Into<String>) -> Self {
        Self::InvalidShape(reason.into())
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type for history operations.
pub type Result<T> = std::result::Result<T, HistoryError>;
