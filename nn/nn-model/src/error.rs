//! Error types for nn-model crate.

use thiserror::Error;

/// Errors that can occur when building or running layered models.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The model has no layers to work with.
    #[error("model has no layers")]
    EmptyModel,

    /// A layer index went past the end of the model.
    #[error("layer index out of range: requested {requested}, model has {available} layers")]
    LayerOutOfRange {
        /// Number of layers the caller asked for.
        requested: usize,
        /// Number of layers the model actually has.
        available: usize,
    },

    /// The model's layer stack is inconsistent.
    #[error("invalid model configuration: {0}")]
    InvalidConfig(String),
}

impl ModelError {
    /// Creates an empty model error.
    #[must_use]
    pub const fn empty_model() -> Self {
        Self::EmptyModel
    }

    /// Creates a layer out of range error.
    #[must_use]
    pub const fn layer_out_of_range(requested: usize, available: usize) -> Self {
        Self::LayerOutOfRange {
            requested,
            available,
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_model() {
        let err = ModelError::empty_model();
        assert!(err.to_string().contains("no layers"));
    }

    #[test]
    fn error_layer_out_of_range() {
        let err = ModelError::layer_out_of_range(5, 3);
        assert!(err.to_string().contains("requested 5"));
        assert!(err.to_string().contains("has 3 layers"));
    }

    #[test]
    fn error_invalid_config() {
        let err = ModelError::invalid_config("dangling input");
        assert!(err.to_string().contains("invalid model configuration"));
    }
}
