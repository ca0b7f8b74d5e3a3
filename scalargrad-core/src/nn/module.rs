use crate::autograd::Value;
use crate::error::ScalarGradError;
use std::fmt::Debug;

/// The base trait for all network modules (layers and whole models).
///
/// A module owns its parameters as leaf [`Value`]s. Every `forward` call builds a
/// fresh graph on top of those same leaves, so gradients from a backward pass land
/// directly on the parameters returned by [`Module::parameters`].
pub trait Module: Debug {
    /// Performs a forward pass.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if `inputs` does not have the expected length.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// All learnable parameters, in a stable order.
    ///
    /// The returned handles share nodes with the module: mutating their values
    /// mutates the module.
    fn parameters(&self) -> Vec<Value>;

    /// Forward pass on raw features, each wrapped in a fresh leaf.
    fn forward_features(&self, features: &[f64]) -> Result<Vec<Value>, ScalarGradError> {
        let inputs: Vec<Value> = features.iter().map(|&x| Value::new(x)).collect();
        self.forward(&inputs)
    }

    /// Number of learnable parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of every parameter.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}
