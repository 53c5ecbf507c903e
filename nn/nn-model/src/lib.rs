//! Layered Burn models with per-call sampling-mode control.
//!
//! This crate provides a small model abstraction for inference-side
//! utilities: models are ordered stacks of named layers, each callable with
//! an explicit [`ForwardMode`], so stochastic layers can be driven
//! independently of a global training/inference switch.
//!
//! # Models and Layers
//!
//! - [`SequentialModel`] - ordered named layers with a declared input dim
//! - [`Layer`] / [`NamedLayer`] - the layer kinds the utilities understand
//! - [`SamplingDropout`] - dropout with a forced-sampling override
//!
//! # Utilities
//!
//! - [`McDropoutBuilder`] - derives a model whose dropout layers sample at
//!   inference time, for Monte Carlo uncertainty estimation
//! - [`SequentialModel::forward_partial`] - runs only the first N layers
//!   and returns the intermediate activation
//!
//! # Backend Support
//!
//! Models are generic over Burn backends. Common choices:
//! - `burn-ndarray` - CPU inference (used by this crate's tests)
//! - `burn-wgpu` - GPU inference
//!
//! # Example
//!
//! ```ignore
//! use nn_model::{Layer, McDropoutBuilder, SequentialModel};
//!
//! let device = Default::default();
//! let mut model = SequentialModel::<MyBackend>::new(4);
//! model.push(Layer::linear(4, 16, &device));
//! model.push(Layer::relu());
//! model.push(Layer::dropout(0.5));
//! model.push(Layer::linear(16, 1, &device));
//!
//! // Monte Carlo predictions: dropout stays live at inference.
//! let mc_model = McDropoutBuilder::new(&model).build()?;
//! let sample = mc_model.forward(input);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod layer;
mod mc_dropout;
mod sequential;

// Re-export layers
pub use layer::{ForwardMode, Layer, NamedLayer, SamplingDropout};

// Re-export models
pub use sequential::SequentialModel;

// Re-export MC dropout derivation
pub use mc_dropout::McDropoutBuilder;

// Re-export error types
pub use error::{ModelError, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        ForwardMode, Layer, McDropoutBuilder, ModelError, NamedLayer, SamplingDropout,
        SequentialModel,
    };
}
