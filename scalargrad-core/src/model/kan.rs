use crate::autograd::Value;
use crate::error::ScalarGradError;
use crate::model::layer_dims;
use crate::nn::{KanLayer, Module};
use log::debug;
use rand::Rng;

/// A stack of [`KanLayer`]s.
#[derive(Debug, Clone)]
pub struct Kan {
    layers: Vec<KanLayer>,
}

impl Kan {
    /// Builds `in_features -> layer_sizes[0] -> ... -> layer_sizes[last]`.
    ///
    /// # Errors
    /// `ConfigurationError` if `layer_sizes` is empty or contains a zero.
    pub fn new<R: Rng + ?Sized>(
        in_features: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let layers: Vec<KanLayer> = layer_dims(in_features, layer_sizes)?
            .into_iter()
            .map(|(nin, nout)| KanLayer::new(nin, nout, rng))
            .collect();

        let kan = Kan { layers };
        debug!(
            "Kan: {} -> {:?}, {} parameters",
            in_features,
            layer_sizes,
            kan.num_parameters()
        );
        Ok(kan)
    }

    pub fn layers(&self) -> &[KanLayer] {
        &self.layers
    }
}

impl Module for Kan {
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
