use crate::autograd::Value;
use crate::error::ScalarGradError;
use crate::optim::Optimizer;
use log::{debug, warn};

/// Moment estimates for one parameter.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct AdamParamState {
    /// First moment (exponential moving average of gradients).
    pub m: f64,
    /// Second moment (exponential moving average of squared gradients).
    pub v: f64,
}

/// Adam with decoupled weight decay (AdamW).
///
/// For each parameter `p` with gradient `g`, at step `t` (starting at 1):
///
/// ```text
/// m = beta1 * m + (1 - beta1) * g
/// v = beta2 * v + (1 - beta2) * g^2
/// m_hat = m / (1 - beta1^t)
/// v_hat = v / (1 - beta2^t)
/// p = p - lr * (m_hat / (sqrt(v_hat) + eps) + weight_decay * p)
/// ```
///
/// With `weight_decay == 0` this is plain Adam.
#[derive(Debug)]
pub struct AdamOptimizer {
    params: Vec<Value>,
    state: Vec<AdamParamState>,
    lr: f64,
    beta1: f64,
    beta2: f64,
    eps: f64,
    weight_decay: f64,
    iterations: u64,
}

impl AdamOptimizer {
    /// # Errors
    /// `ConfigurationError` unless `lr > 0`, `beta1` and `beta2` lie in `[0, 1)`,
    /// `eps > 0` and `weight_decay >= 0`.
    pub fn new(
        params: Vec<Value>,
        lr: f64,
        beta1: f64,
        beta2: f64,
        eps: f64,
        weight_decay: f64,
    ) -> Result<Self, ScalarGradError> {
        if lr.is_nan() || lr <= 0.0 {
            return Err(ScalarGradError::ConfigurationError(
                "Learning rate must be positive".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&beta1) {
            return Err(ScalarGradError::ConfigurationError(
                "Beta1 must be in [0, 1)".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&beta2) {
            return Err(ScalarGradError::ConfigurationError(
                "Beta2 must be in [0, 1)".to_string(),
            ));
        }
        if eps.is_nan() || eps <= 0.0 {
            return Err(ScalarGradError::ConfigurationError(
                "Epsilon must be positive".to_string(),
            ));
        }
        if weight_decay.is_nan() || weight_decay < 0.0 {
            return Err(ScalarGradError::ConfigurationError(
                "Weight decay must be non-negative".to_string(),
            ));
        }

        let state = vec![AdamParamState::default(); params.len()];
        Ok(AdamOptimizer {
            params,
            state,
            lr,
            beta1,
            beta2,
            eps,
            weight_decay,
            iterations: 0,
        })
    }

    /// AdamW with `beta1 = 0.9`, `beta2 = 0.999`, `eps = 1e-8`.
    pub fn adamw(params: Vec<Value>, lr: f64, weight_decay: f64) -> Result<Self, ScalarGradError> {
        Self::new(params, lr, 0.9, 0.999, 1e-8, weight_decay)
    }

    pub fn learning_rate(&self) -> f64 {
        self.lr
    }

    pub fn set_learning_rate(&mut self, lr: f64) -> Result<(), ScalarGradError> {
        if lr.is_nan() || lr <= 0.0 {
            return Err(ScalarGradError::ConfigurationError(
                "Learning rate must be positive".to_string(),
            ));
        }
        self.lr = lr;
        Ok(())
    }

    pub fn weight_decay(&self) -> f64 {
        self.weight_decay
    }

    /// Number of steps taken so far.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Moment estimates, parallel to [`Optimizer::parameters`].
    pub fn state(&self) -> &[AdamParamState] {
        &self.state
    }
}

impl Optimizer for AdamOptimizer {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        if self.params.is_empty() {
            return Ok(());
        }
        self.iterations += 1;

        let t = i32::try_from(self.iterations).unwrap_or(i32::MAX);
        let bias_correction1 = 1.0 - self.beta1.powi(t);
        let bias_correction2 = 1.0 - self.beta2.powi(t);

        let mut non_finite = 0usize;
        for (param, state) in self.params.iter().zip(self.state.iter_mut()) {
            let grad = param.grad();
            if !grad.is_finite() {
                non_finite += 1;
            }

            state.m = self.beta1 * state.m + (1.0 - self.beta1) * grad;
            state.v = self.beta2 * state.v + (1.0 - self.beta2) * grad * grad;

            let m_hat = state.m / bias_correction1;
            let v_hat = state.v / bias_correction2;

            let update = m_hat / (v_hat.sqrt() + self.eps) + self.weight_decay * param.value();
            param.add_to_value(-self.lr * update);
        }

        if non_finite > 0 {
            warn!(
                "AdamOptimizer step {}: {} of {} parameters had a non-finite gradient",
                self.iterations,
                non_finite,
                self.params.len()
            );
        }
        debug!(
            "AdamOptimizer step {} applied to {} parameters (lr = {})",
            self.iterations,
            self.params.len(),
            self.lr
        );
        Ok(())
    }

    fn parameters(&self) -> &[Value] {
        &self.params
    }
}
