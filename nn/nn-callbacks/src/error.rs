//! Error types for nn-callbacks crate.

use thiserror::Error;

/// Errors that can occur inside a training-loop observer.
#[derive(Debug, Error)]
pub enum CallbackError {
    /// A metric the callback presumes present was missing from the epoch.
    #[error("missing metric: {0}")]
    MissingMetric(String),

    /// The callback failed for a reason of its own.
    #[error("callback error: {0}")]
    Callback(String),
}

impl CallbackError {
    /// Creates a missing metric error.
    #[must_use]
    pub fn missing_metric(name: impl Into<String>) -> Self {
        Self::MissingMetric(name.into())
    }
}

/// Result type for callback operations.
pub type Result<T> = std::result::Result<T, CallbackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_missing_metric() {
        let err = CallbackError::missing_metric("loss");
        assert!(err.to_string().contains("missing metric"));
        assert!(err.to_string().contains("loss"));
    }

    #[test]
    fn error_callback() {
        let err = CallbackError::Callback("stream closed".to_string());
        assert!(err.to_string().contains("callback error"));
        assert!(err.to_string().contains("stream closed"));
    }
}
