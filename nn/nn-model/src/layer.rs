//! Named layers with per-call sampling-mode control.

use burn::nn;
use burn::prelude::Backend;
use burn::tensor::{Distribution, Tensor};
use serde::{Deserialize, Serialize};

/// Per-call flag controlling whether stochastic layers sample.
///
/// Deterministic layers ignore it. [`ForwardMode::Sampling`] is the
/// training-time behavior; [`ForwardMode::Inference`] the deterministic
/// evaluation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ForwardMode {
    /// Deterministic evaluation; stochastic layers pass input through.
    #[default]
    Inference,
    /// Stochastic layers sample (e.g. dropout masks are drawn).
    Sampling,
}

/// Dropout with an override that forces sampling in every mode.
///
/// Standard inverted dropout: in sampling mode each element is zeroed with
/// probability `prob` and the survivors are rescaled by `1 / (1 - prob)`,
/// so the expected activation is unchanged. With `always_sample` set the
/// layer samples regardless of the caller's [`ForwardMode`] — the wiring
/// Monte Carlo dropout inference relies on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingDropout {
    prob: f64,
    always_sample: bool,
}

impl SamplingDropout {
    /// Creates a dropout layer with the given drop probability.
    ///
    /// The probability is clamped to `[0, 1]`. A probability of 0 makes the
    /// layer the identity in every mode; a probability of 1 zeroes
    /// everything when sampling.
    #[must_use]
    pub fn new(prob: f64) -> Self {
        Self {
            prob: prob.clamp(0.0, 1.0),
            always_sample: false,
        }
    }

    /// Returns a copy that samples in every forward mode.
    #[must_use]
    pub const fn always_sampling(mut self) -> Self {
        self.always_sample = true;
        self
    }

    /// Returns the drop probability.
    #[must_use]
    pub const fn prob(&self) -> f64 {
        self.prob
    }

    /// Returns true if the layer samples regardless of forward mode.
    #[must_use]
    pub const fn is_always_sampling(&self) -> bool {
        self.always_sample
    }

    /// Applies dropout according to the effective mode.
    pub fn forward<B: Backend>(&self, input: Tensor<B, 2>, mode: ForwardMode) -> Tensor<B, 2> {
        let sample = self.always_sample || mode == ForwardMode::Sampling;
        if !sample || self.prob <= 0.0 {
            return input;
        }
        if self.prob >= 1.0 {
            return input.zeros_like();
        }

        let keep = 1.0 - self.prob;
        let mask = input.random_like(Distribution::Bernoulli(keep));
        input.mul(mask).div_scalar(keep)
    }
}

/// A layer kind the model utilities understand.
///
/// The tagged variant replaces name-convention dispatch: whether a layer
/// needs forced sampling is answered by [`Layer::is_stochastic`], not by
/// inspecting its name.
#[derive(Debug, Clone)]
pub enum Layer<B: Backend> {
    /// Fully connected layer with trained weights.
    Linear(nn::Linear<B>),
    /// ReLU activation.
    Relu(nn::Relu),
    /// GELU activation.
    Gelu(nn::Gelu),
    /// Tanh activation.
    Tanh(nn::Tanh),
    /// Dropout with sampling-mode control.
    Dropout(SamplingDropout),
}

impl<B: Backend> Layer<B> {
    /// Creates a linear layer with freshly initialized parameters.
    #[must_use]
    pub fn linear(d_input: usize, d_output: usize, device: &B::Device) -> Self {
        Self::Linear(nn::LinearConfig::new(d_input, d_output).init(device))
    }

    /// Creates a ReLU activation layer.
    #[must_use]
    pub fn relu() -> Self {
        Self::Relu(nn::Relu::new())
    }

    /// Creates a GELU activation layer.
    #[must_use]
    pub fn gelu() -> Self {
        Self::Gelu(nn::Gelu::new())
    }

    /// Creates a tanh activation layer.
    #[must_use]
    pub fn tanh() -> Self {
        Self::Tanh(nn::Tanh::new())
    }

    /// Creates a dropout layer with the given drop probability.
    #[must_use]
    pub fn dropout(prob: f64) -> Self {
        Self::Dropout(SamplingDropout::new(prob))
    }

    /// Returns true if the layer behaves stochastically when sampling.
    #[must_use]
    pub const fn is_stochastic(&self) -> bool {
        matches!(self, Self::Dropout(_))
    }

    /// Returns the layer kind as a short name, used for auto-naming.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Linear(_) => "linear",
            Self::Relu(_) => "relu",
            Self::Gelu(_) => "gelu",
            Self::Tanh(_) => "tanh",
            Self::Dropout(_) => "dropout",
        }
    }

    /// Returns a copy whose stochastic behavior is forced on.
    ///
    /// Deterministic layers are returned unchanged.
    #[must_use]
    pub fn into_always_sampling(self) -> Self {
        match self {
            Self::Dropout(dropout) => Self::Dropout(dropout.always_sampling()),
            other => other,
        }
    }

    /// Runs the layer on a `[batch, features]` tensor.
    pub fn forward(&self, input: Tensor<B, 2>, mode: ForwardMode) -> Tensor<B, 2> {
        match self {
            Self::Linear(linear) => linear.forward(input),
            Self::Relu(relu) => relu.forward(input),
            Self::Gelu(gelu) => gelu.forward(input),
            Self::Tanh(tanh) => tanh.forward(input),
            Self::Dropout(dropout) => dropout.forward(input, mode),
        }
    }
}

/// A layer together with its name within a model.
#[derive(Debug, Clone)]
pub struct NamedLayer<B: Backend> {
    name: String,
    layer: Layer<B>,
}

impl<B: Backend> NamedLayer<B> {
    /// Pairs a layer with a name.
    #[must_use]
    pub fn new(name: impl Into<String>, layer: Layer<B>) -> Self {
        Self {
            name: name.into(),
            layer,
        }
    }

    /// Returns the layer's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the layer itself.
    #[must_use]
    pub const fn layer(&self) -> &Layer<B> {
        &self.layer
    }

    /// Returns true if the layer behaves stochastically when sampling.
    #[must_use]
    pub const fn is_stochastic(&self) -> bool {
        self.layer.is_stochastic()
    }

    /// Runs the layer on a `[batch, features]` tensor.
    pub fn forward(&self, input: Tensor<B, 2>, mode: ForwardMode) -> Tensor<B, 2> {
        self.layer.forward(input, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::tensor::ElementConversion;
    use burn_ndarray::NdArray;

    type TestBackend = NdArray<f32>;

    fn ones(n: usize) -> Tensor<TestBackend, 2> {
        let device = <TestBackend as Backend>::Device::default();
        Tensor::ones([1, n], &device)
    }

    fn to_values(tensor: Tensor<TestBackend, 2>) -> Vec<f32> {
        tensor.into_data().to_vec::<f32>().unwrap()
    }

    #[test]
    fn dropout_identity_in_inference_mode() {
        let dropout = SamplingDropout::new(0.5);
        let input = ones(16);
        let output = dropout.forward(input.clone(), ForwardMode::Inference);

        let diff: f32 = input.sub(output).abs().sum().into_scalar().elem();
        assert!(diff.abs() < 1e-7);
    }

    #[test]
    fn dropout_sampling_drops_and_rescales() {
        let dropout = SamplingDropout::new(0.5);
        let output = dropout.forward(ones(256), ForwardMode::Sampling);

        // Inverted dropout on a tensor of ones: every element is 0 or 2.
        for value in to_values(output) {
            assert!(
                (value - 0.0).abs() < 1e-6 || (value - 2.0).abs() < 1e-6,
                "unexpected element {value}"
            );
        }
    }

    #[test]
    fn dropout_zero_prob_is_identity_even_when_sampling() {
        let dropout = SamplingDropout::new(0.0);
        let input = ones(8);
        let output = dropout.forward(input.clone(), ForwardMode::Sampling);

        let diff: f32 = input.sub(output).abs().sum().into_scalar().elem();
        assert!(diff.abs() < 1e-7);
    }

    #[test]
    fn dropout_full_prob_zeroes_everything() {
        let dropout = SamplingDropout::new(1.0);
        let output = dropout.forward(ones(8), ForwardMode::Sampling);

        let total: f32 = output.abs().sum().into_scalar().elem();
        assert!(total.abs() < 1e-7);
    }

    #[test]
    fn dropout_always_sampling_ignores_mode() {
        let dropout = SamplingDropout::new(0.5).always_sampling();
        assert!(dropout.is_always_sampling());

        let output = dropout.forward(ones(256), ForwardMode::Inference);
        for value in to_values(output) {
            assert!((value - 0.0).abs() < 1e-6 || (value - 2.0).abs() < 1e-6);
        }
    }

    #[test]
    fn dropout_prob_is_clamped() {
        assert!((SamplingDropout::new(-0.5).prob() - 0.0).abs() < f64::EPSILON);
        assert!((SamplingDropout::new(1.5).prob() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn layer_stochastic_capability() {
        let device = <TestBackend as Backend>::Device::default();
        assert!(Layer::<TestBackend>::dropout(0.2).is_stochastic());
        assert!(!Layer::<TestBackend>::relu().is_stochastic());
        assert!(!Layer::<TestBackend>::linear(4, 2, &device).is_stochastic());
    }

    #[test]
    fn layer_kind_names() {
        let device = <TestBackend as Backend>::Device::default();
        assert_eq!(Layer::<TestBackend>::linear(4, 2, &device).kind_name(), "linear");
        assert_eq!(Layer::<TestBackend>::relu().kind_name(), "relu");
        assert_eq!(Layer::<TestBackend>::gelu().kind_name(), "gelu");
        assert_eq!(Layer::<TestBackend>::tanh().kind_name(), "tanh");
        assert_eq!(Layer::<TestBackend>::dropout(0.2).kind_name(), "dropout");
    }

    #[test]
    fn into_always_sampling_only_touches_dropout() {
        let forced = Layer::<TestBackend>::dropout(0.5).into_always_sampling();
        match forced {
            Layer::Dropout(dropout) => assert!(dropout.is_always_sampling()),
            _ => panic!("dropout layer changed kind"),
        }

        let relu = Layer::<TestBackend>::relu().into_always_sampling();
        assert!(matches!(relu, Layer::Relu(_)));
    }

    #[test]
    fn relu_layer_forward() {
        let device = <TestBackend as Backend>::Device::default();
        let input = Tensor::<TestBackend, 2>::from_data([[-1.0, 2.0]], &device);
        let output = Layer::<TestBackend>::relu().forward(input, ForwardMode::Inference);
        assert_eq!(to_values(output), vec![0.0, 2.0]);
    }

    #[test]
    fn named_layer_accessors() {
        let layer = NamedLayer::<TestBackend>::new("dropout_1", Layer::dropout(0.3));
        assert_eq!(layer.name(), "dropout_1");
        assert!(layer.is_stochastic());
        assert_eq!(layer.layer().kind_name(), "dropout");
    }
}
