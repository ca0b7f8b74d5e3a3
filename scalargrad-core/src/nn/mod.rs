// src/nn/mod.rs
// Building blocks for networks: the Module trait, activations, initialisers, layers and losses.

pub mod activation;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module;

// Re-export common items
pub use activation::Activation;
pub use layers::kan::{KanLayer, KanNeuron};
pub use layers::linear::{Linear, Neuron};
pub use losses::{binary_cross_entropy, classification_loss, mse_loss, LabeledSample};
pub use module::Module;

use crate::error::ScalarGradError;

/// Returns `ShapeMismatch` unless `actual == expected`.
pub(crate) fn check_len(
    expected: usize,
    actual: usize,
    operation: &str,
) -> Result<(), ScalarGradError> {
    if expected != actual {
        return Err(ScalarGradError::ShapeMismatch {
            expected,
            actual,
            operation: operation.to_string(),
        });
    }
    Ok(())
}
