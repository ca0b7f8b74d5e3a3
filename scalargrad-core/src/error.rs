use thiserror::Error;

/// Custom error type for the scalargrad framework.
///
/// Graph operations on [`Value`](crate::Value) are infallible; these errors come
/// from the layers built on top of the engine (modules, losses, optimizers and
/// the training loop).
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Operation {operation} received an empty input")]
    EmptyInput { operation: String },

    #[error("Label {label} is out of range for a model with {num_classes} outputs")]
    InvalidLabel { label: usize, num_classes: usize },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Loss became non-finite at step {step}")]
    NonFiniteLoss { step: usize },
}
