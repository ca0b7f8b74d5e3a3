// src/model/mod.rs
// Whole networks assembled from `nn` layers.

pub mod kan;
pub mod mlp;

pub use kan::Kan;
pub use mlp::Mlp;

use crate::error::ScalarGradError;

/// Pairs each layer's fan-in with its width: `[(in, s0), (s0, s1), ...]`.
pub(crate) fn layer_dims(
    in_features: usize,
    layer_sizes: &[usize],
) -> Result<Vec<(usize, usize)>, ScalarGradError> {
    if layer_sizes.is_empty() {
        return Err(ScalarGradError::ConfigurationError(
            "a network needs at least one layer".to_string(),
        ));
    }
    if let Some(i) = layer_sizes.iter().position(|&s| s == 0) {
        return Err(ScalarGradError::ConfigurationError(format!(
            "layer {} has zero outputs",
            i
        )));
    }
    let fan_ins = std::iter::once(in_features).chain(layer_sizes.iter().copied());
    Ok(fan_ins.zip(layer_sizes.iter().copied()).collect())
}
