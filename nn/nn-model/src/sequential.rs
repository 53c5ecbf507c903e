//! Ordered stacks of named layers.

use burn::prelude::Backend;
use burn::tensor::Tensor;

use crate::error::{ModelError, Result};
use crate::layer::{ForwardMode, Layer, NamedLayer};

/// A model as an ordered sequence of named layers.
///
/// The declared input dimension describes one sample's feature count; the
/// batch dimension is excluded, as in the `[batch, features]` tensors the
/// layers consume. Layers are applied in push order.
///
/// # Example
///
/// ```ignore
/// use nn_model::{Layer, SequentialModel};
///
/// let device = Default::default();
/// let mut model = SequentialModel::<MyBackend>::new(4);
/// model.push(Layer::linear(4, 16, &device));
/// model.push(Layer::relu());
/// model.push(Layer::dropout(0.5));
/// model.push(Layer::linear(16, 1, &device));
///
/// let output = model.forward(Tensor::ones([2, 4], &device));
/// assert_eq!(output.dims(), [2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct SequentialModel<B: Backend> {
    input_dim: usize,
    layers: Vec<NamedLayer<B>>,
}

impl<B: Backend> SequentialModel<B> {
    /// Creates an empty model with the given declared input dimension.
    #[must_use]
    pub const fn new(input_dim: usize) -> Self {
        Self {
            input_dim,
            layers: Vec::new(),
        }
    }

    /// Appends a layer, naming it `{kind}_{index}`.
    pub fn push(&mut self, layer: Layer<B>) {
        let name = format!("{}_{}", layer.kind_name(), self.layers.len());
        self.layers.push(NamedLayer::new(name, layer));
    }

    /// Appends a layer under an explicit name.
    pub fn push_named(&mut self, name: impl Into<String>, layer: Layer<B>) {
        self.layers.push(NamedLayer::new(name, layer));
    }

    /// Returns the declared input dimension (batch dimension excluded).
    #[must_use]
    pub const fn input_dim(&self) -> usize {
        self.input_dim
    }

    /// Returns the layers in application order.
    #[must_use]
    pub fn layers(&self) -> &[NamedLayer<B>] {
        &self.layers
    }

    /// Returns the layer at the given index.
    #[must_use]
    pub fn layer(&self, index: usize) -> Option<&NamedLayer<B>> {
        self.layers.get(index)
    }

    /// Returns the number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns true if the model has no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Returns all layer names in application order.
    #[must_use]
    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(NamedLayer::name).collect()
    }

    /// Returns the names of layers that sample when in sampling mode.
    #[must_use]
    pub fn stochastic_layer_names(&self) -> Vec<&str> {
        self.layers
            .iter()
            .filter(|layer| layer.is_stochastic())
            .map(NamedLayer::name)
            .collect()
    }

    /// Checks that consecutive linear layers agree on dimensions.
    ///
    /// Walks the stack tracking the current feature dimension: the first
    /// linear layer must accept the declared input dimension, and each
    /// later one the previous linear layer's output. Activation and
    /// dropout layers preserve the dimension.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidConfig`] naming the first mismatched
    /// layer.
    pub fn validate(&self) -> Result<()> {
        let mut dim = self.input_dim;
        for named in &self.layers {
            if let Layer::Linear(linear) = named.layer() {
                let [d_input, d_output] = linear.weight.val().dims();
                if d_input != dim {
                    return Err(ModelError::invalid_config(format!(
                        "layer '{}' expects input dim {d_input}, got {dim}",
                        named.name()
                    )));
                }
                dim = d_output;
            }
        }
        Ok(())
    }

    /// Runs a full forward pass in deterministic inference mode.
    pub fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        self.forward_mode(input, ForwardMode::Inference)
    }

    /// Runs a full forward pass with the given sampling mode.
    pub fn forward_mode(&self, input: Tensor<B, 2>, mode: ForwardMode) -> Tensor<B, 2> {
        let mut output = input;
        for layer in &self.layers {
            output = layer.forward(output, mode);
        }
        output
    }

    /// Runs the input through the first `n_layers` layers only.
    ///
    /// Applies layers `[0, n_layers)` in order, threading each output into
    /// the next layer, and returns the intermediate activation. With
    /// `n_layers == 0` the input is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::LayerOutOfRange`] if `n_layers` exceeds the
    /// layer count.
    pub fn forward_partial(&self, input: Tensor<B, 2>, n_layers: usize) -> Result<Tensor<B, 2>> {
        if n_layers > self.layers.len() {
            return Err(ModelError::layer_out_of_range(n_layers, self.layers.len()));
        }

        let mut output = input;
        for layer in &self.layers[..n_layers] {
            output = layer.forward(output, ForwardMode::Inference);
        }
        Ok(output)
    }
}
