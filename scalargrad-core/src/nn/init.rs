//! Parameter initialisers. Every initialiser draws from a caller-supplied
//! generator, so a fixed seed reproduces the same model.

use crate::autograd::Value;
use rand::Rng;

/// A leaf drawn uniformly from `[low, high)`.
///
/// # Panics
/// Panics if `low >= high`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> Value {
    Value::new(rng.gen_range(low..high))
}

/// A leaf drawn uniformly from `[-1, 1)` and scaled by `1 / sqrt(fan_in)`.
pub fn scaled_uniform<R: Rng + ?Sized>(rng: &mut R, fan_in: usize) -> Value {
    let scale = 1.0 / (fan_in.max(1) as f64).sqrt();
    Value::new(rng.gen_range(-1.0..1.0) * scale)
}

/// `n` leaves holding zero.
pub fn zeros(n: usize) -> Vec<Value> {
    (0..n).map(|_| Value::new(0.0)).collect()
}
