pub mod bce;
pub mod classification;
pub mod mse;

pub use bce::{binary_cross_entropy, PROBABILITY_EPSILON};
pub use classification::{classification_loss, LabeledSample};
pub use mse::mse_loss;
