use crate::autograd::Value;
use crate::error::ScalarGradError;
use crate::model::layer_dims;
use crate::nn::{Activation, Linear, Module};
use log::debug;
use rand::Rng;

/// Multi-layer perceptron. Hidden layers use `tanh`; the last layer is linear so
/// its outputs can feed any loss.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Linear>,
}

impl Mlp {
    /// Builds `in_features -> layer_sizes[0] -> ... -> layer_sizes[last]`.
    ///
    /// # Errors
    /// `ConfigurationError` if `layer_sizes` is empty or contains a zero.
    pub fn new<R: Rng + ?Sized>(
        in_features: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let dims = layer_dims(in_features, layer_sizes)?;
        let last = dims.len() - 1;
        let layers: Vec<Linear> = dims
            .into_iter()
            .enumerate()
            .map(|(i, (nin, nout))| {
                let activation = if i == last {
                    Activation::Linear
                } else {
                    Activation::Tanh
                };
                Linear::new(nin, nout, activation, rng)
            })
            .collect();

        let mlp = Mlp { layers };
        debug!(
            "Mlp: {} -> {:?}, {} parameters",
            in_features,
            layer_sizes,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    pub fn layers(&self) -> &[Linear] {
        &self.layers
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}
