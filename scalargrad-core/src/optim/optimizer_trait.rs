use crate::autograd::Value;
use crate::error::ScalarGradError;

/// Trait defining the common interface for all optimizers.
///
/// An optimizer holds handles to the parameters it updates. Those handles share
/// nodes with the model, so a step changes the model in place.
pub trait Optimizer {
    /// Performs a single optimization step from the gradients currently stored
    /// on the parameters.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `ScalarGradError` otherwise.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Call it between backward passes: gradients accumulate otherwise.
    fn zero_grad(&mut self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// The managed parameters, in the order they were given.
    fn parameters(&self) -> &[Value];
}
