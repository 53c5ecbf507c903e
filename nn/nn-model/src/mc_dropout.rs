//! Monte Carlo dropout model derivation.

use burn::prelude::Backend;

use crate::error::{ModelError, Result};
use crate::sequential::SequentialModel;

/// Derives a model whose dropout layers sample at inference time.
///
/// Given a trained [`SequentialModel`], [`build`](McDropoutBuilder::build)
/// reconstructs an equivalent stack in which every stochastic layer is
/// forced into sampling mode regardless of the caller's
/// [`ForwardMode`](crate::ForwardMode). Repeated forward passes through the
/// derived model then yield a Monte Carlo sample of predictions, usable for
/// uncertainty estimation.
///
/// Parameters are shared with the original: layer clones carry tensor
/// handles, not copies, so no retraining or weight transfer happens.
///
/// # Example
///
/// ```ignore
/// use nn_model::McDropoutBuilder;
///
/// let mc_model = McDropoutBuilder::new(&model).build()?;
/// let sample_a = mc_model.forward(input.clone());
/// let sample_b = mc_model.forward(input); // differs: dropout resamples
/// ```
#[derive(Debug)]
pub struct McDropoutBuilder<'a, B: Backend> {
    original: &'a SequentialModel<B>,
}

impl<'a, B: Backend> McDropoutBuilder<'a, B> {
    /// Borrows the original trained model.
    #[must_use]
    pub const fn new(original: &'a SequentialModel<B>) -> Self {
        Self { original }
    }

    /// Builds the derived model.
    ///
    /// The first layer is carried over unchanged (it adapts the input and
    /// has no sampling behavior of its own); every later stochastic layer
    /// is rebuilt with sampling forced on, and a diagnostic line naming it
    /// is printed. Deterministic layers are carried over as they are.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyModel`] if the original has no layers.
    pub fn build(&self) -> Result<SequentialModel<B>> {
        let first = self
            .original
            .layers()
            .first()
            .ok_or_else(ModelError::empty_model)?;

        let mut derived = SequentialModel::new(self.original.input_dim());
        derived.push_named(first.name(), first.layer().clone());

        for named in &self.original.layers()[1..] {
            if named.is_stochastic() {
                println!("{}", diagnostic_line(named.name()));
                derived.push_named(named.name(), named.layer().clone().into_always_sampling());
            } else {
                derived.push_named(named.name(), named.layer().clone());
            }
        }

        Ok(derived)
    }
}

/// Formats the diagnostic emitted for each forced dropout layer.
fn diagnostic_line(name: &str) -> String {
    format!("Dropout layer found: {name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::tensor::{ElementConversion, Tensor};
    use burn_ndarray::NdArray;

    use crate::layer::{ForwardMode, Layer};

    type TestBackend = NdArray<f32>;

    fn device() -> <TestBackend as Backend>::Device {
        <TestBackend as Backend>::Device::default()
    }

    fn abs_diff(a: Tensor<TestBackend, 2>, b: Tensor<TestBackend, 2>) -> f32 {
        a.sub(b).abs().sum().into_scalar().elem()
    }

    #[test]
    fn diagnostic_line_names_the_layer() {
        assert_eq!(
            diagnostic_line("dropout_2"),
            "Dropout layer found: dropout_2"
        );
    }

    #[test]
    fn build_fails_on_empty_model() {
        let model = SequentialModel::<TestBackend>::new(4);
        let result = McDropoutBuilder::new(&model).build();
        assert!(matches!(result, Err(ModelError::EmptyModel)));
    }

    #[test]
    fn build_preserves_structure_and_input_dim() {
        let device = device();
        let mut model = SequentialModel::<TestBackend>::new(4);
        model.push(Layer::linear(4, 8, &device));
        model.push(Layer::relu());
        model.push(Layer::dropout(0.5));
        model.push(Layer::linear(8, 2, &device));

        let derived = McDropoutBuilder::new(&model).build();
        assert!(derived.is_ok());
        if let Ok(derived) = derived {
            assert_eq!(derived.input_dim(), 4);
            assert_eq!(derived.layer_names(), model.layer_names());
        }
    }

    #[test]
    fn build_without_dropout_is_equivalent() {
        let device = device();
        let mut model = SequentialModel::<TestBackend>::new(4);
        model.push(Layer::linear(4, 8, &device));
        model.push(Layer::relu());
        model.push(Layer::linear(8, 2, &device));

        let derived = McDropoutBuilder::new(&model).build();
        assert!(derived.is_ok());
        if let Ok(derived) = derived {
            let input = Tensor::<TestBackend, 2>::ones([3, 4], &device);
            let original_out = model.forward(input.clone());
            let derived_out = derived.forward(input);
            assert!(abs_diff(original_out, derived_out) < 1e-6);
        }
    }

    #[test]
    fn build_single_layer_model_runs_the_first_layer_only() {
        let device = device();
        let mut model = SequentialModel::<TestBackend>::new(4);
        model.push(Layer::linear(4, 2, &device));

        let derived = McDropoutBuilder::new(&model).build();
        assert!(derived.is_ok());
        if let Ok(derived) = derived {
            assert_eq!(derived.len(), 1);
            let input = Tensor::<TestBackend, 2>::ones([1, 4], &device);
            let diff = abs_diff(model.forward(input.clone()), derived.forward(input));
            assert!(diff < 1e-7);
        }
    }

    #[test]
    fn derived_model_samples_at_inference() {
        let device = device();
        let mut model = SequentialModel::<TestBackend>::new(64);
        model.push(Layer::relu());
        model.push(Layer::dropout(0.5));

        let derived = McDropoutBuilder::new(&model).build();
        assert!(derived.is_ok());
        if let Ok(derived) = derived {
            let input = Tensor::<TestBackend, 2>::ones([1, 64], &device);

            // The original stays deterministic in inference mode.
            let original_out = model.forward(input.clone());
            assert!(abs_diff(input.clone(), original_out) < 1e-7);

            // The derived model drops and rescales even in inference mode:
            // on a tensor of ones every element becomes 0 or 2.
            let derived_out = derived.forward(input);
            let values = derived_out.into_data().to_vec::<f32>().unwrap();
            for value in values {
                assert!(
                    value.abs() < 1e-6 || (value - 2.0).abs() < 1e-6,
                    "unexpected element {value}"
                );
            }
        }
    }

    #[test]
    fn derived_dropout_layers_are_forced_sampling() {
        let device = device();
        let mut model = SequentialModel::<TestBackend>::new(4);
        model.push(Layer::linear(4, 8, &device));
        model.push(Layer::dropout(0.3));
        model.push(Layer::dropout(0.6));

        let derived = McDropoutBuilder::new(&model).build();
        assert!(derived.is_ok());
        if let Ok(derived) = derived {
            let forced: Vec<bool> = derived
                .layers()
                .iter()
                .map(|named| match named.layer() {
                    Layer::Dropout(dropout) => dropout.is_always_sampling(),
                    _ => false,
                })
                .collect();
            assert_eq!(forced, vec![false, true, true]);
        }
    }

    #[test]
    fn first_layer_dropout_is_not_forced() {
        // The first layer is carried over unconditionally, matching the
        // input-adapter assumption; only later layers get forced sampling.
        let device = device();
        let mut model = SequentialModel::<TestBackend>::new(8);
        model.push(Layer::dropout(0.5));
        model.push(Layer::linear(8, 2, &device));

        let derived = McDropoutBuilder::new(&model).build();
        assert!(derived.is_ok());
        if let Ok(derived) = derived {
            if let Some(first) = derived.layer(0) {
                match first.layer() {
                    Layer::Dropout(dropout) => assert!(!dropout.is_always_sampling()),
                    _ => panic!("first layer changed kind"),
                }
            }
        }
    }

    #[test]
    fn derived_model_forward_mode_still_controls_unforced_layers() {
        let device = device();
        let mut model = SequentialModel::<TestBackend>::new(16);
        model.push(Layer::relu());
        model.push(Layer::dropout(0.5));

        let derived = McDropoutBuilder::new(&model).build();
        assert!(derived.is_ok());
        if let Ok(derived) = derived {
            // Sampling mode on the derived model behaves like the original's
            // training-time pass: still stochastic.
            let input = Tensor::<TestBackend, 2>::ones([1, 16], &device);
            let out = derived.forward_mode(input, ForwardMode::Sampling);
            let values = out.into_data().to_vec::<f32>().unwrap();
            assert!(values
                .iter()
                .all(|v| v.abs() < 1e-6 || (v - 2.0).abs() < 1e-6));
        }
    }
}
