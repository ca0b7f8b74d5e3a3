// scalargrad-core/src/optim/mod.rs

//! Optimizers that update [`Value`](crate::Value) parameters from their
//! accumulated gradients.

pub mod adam;
pub mod optimizer_trait;

pub use adam::AdamOptimizer;
pub use optimizer_trait::Optimizer;
