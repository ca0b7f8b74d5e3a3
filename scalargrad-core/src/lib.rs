//! # scalargrad-core - Reverse-mode autodiff over scalars
//!
//! A dynamically built computation graph of scalar [`Value`]s, a reverse sweep that
//! fills in gradients, and the small pieces needed to train with it: network
//! modules, losses, an Adam(W) optimizer and a training loop.
//!
//! ```
//! use scalargrad_core::leaf;
//!
//! let a = leaf(2.0);
//! let b = leaf(3.0);
//! let c = &a * &b + a.tanh();
//!
//! c.backward();
//!
//! // dc/da = b + (1 - tanh(a)^2), dc/db = a
//! assert!((a.grad() - (3.0 + 1.0 - 2.0_f64.tanh().powi(2))).abs() < 1e-12);
//! assert_eq!(b.grad(), 2.0);
//! ```

pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod optim;
pub mod train;

pub use autograd::Value;
pub use error::ScalarGradError;

/// Creates a leaf node: an input, a parameter or a constant.
pub fn leaf(value: f64) -> Value {
    Value::new(value)
}

/// Shorthand for a `Result` carrying a [`ScalarGradError`].
pub type Result<T> = std::result::Result<T, ScalarGradError>;
