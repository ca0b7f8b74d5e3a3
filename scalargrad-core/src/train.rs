//! A minimal full-batch training loop.

use std::time::{Duration, Instant};

use log::info;

use crate::error::ScalarGradError;
use crate::nn::{classification_loss, LabeledSample, Module};
use crate::optim::{AdamOptimizer, Optimizer};

/// Hyperparameters for [`Trainer::fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    /// Number of optimizer steps, each over the full training set.
    pub steps: usize,
    pub learning_rate: f64,
    pub weight_decay: f64,
    /// Validation loss is recorded every `eval_every` steps, starting at step 0.
    pub eval_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            steps: 100,
            learning_rate: 0.1,
            weight_decay: 1e-3,
            eval_every: 10,
        }
    }
}

impl TrainConfig {
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if self.steps == 0 {
            return Err(ScalarGradError::ConfigurationError(
                "steps must be at least 1".to_string(),
            ));
        }
        if self.eval_every == 0 {
            return Err(ScalarGradError::ConfigurationError(
                "eval_every must be at least 1".to_string(),
            ));
        }
        if self.learning_rate.is_nan() || self.learning_rate <= 0.0 {
            return Err(ScalarGradError::ConfigurationError(
                "Learning rate must be positive".to_string(),
            ));
        }
        if self.weight_decay.is_nan() || self.weight_decay < 0.0 {
            return Err(ScalarGradError::ConfigurationError(
                "Weight decay must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Loss history of one [`Trainer::fit`] run.
#[derive(Debug, Clone, Default)]
pub struct TrainReport {
    /// Training loss before each step's update, one entry per step.
    pub train_losses: Vec<f64>,
    /// `(step, loss)` pairs, measured after that step's update.
    pub val_losses: Vec<(usize, f64)>,
    pub elapsed: Duration,
}

impl TrainReport {
    pub fn final_train_loss(&self) -> Option<f64> {
        self.train_losses.last().copied()
    }

    pub fn final_val_loss(&self) -> Option<f64> {
        self.val_losses.last().map(|&(_, loss)| loss)
    }
}

/// Drives a model and the optimizer that owns its parameters.
#[derive(Debug)]
pub struct Trainer<M, O> {
    model: M,
    optimizer: O,
    steps_taken: usize,
}

impl<M: Module, O: Optimizer> Trainer<M, O> {
    /// # Errors
    /// `ConfigurationError` if the optimizer does not track exactly the model's
    /// parameters.
    pub fn new(model: M, optimizer: O) -> Result<Self, ScalarGradError> {
        let model_params = model.parameters();
        let tracked = optimizer.parameters();
        let same = model_params.len() == tracked.len()
            && model_params
                .iter()
                .zip(tracked)
                .all(|(a, b)| a.id() == b.id());
        if !same {
            return Err(ScalarGradError::ConfigurationError(format!(
                "optimizer tracks {} parameters that do not match the model's {}",
                tracked.len(),
                model_params.len()
            )));
        }
        Ok(Trainer {
            model,
            optimizer,
            steps_taken: 0,
        })
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn optimizer(&self) -> &O {
        &self.optimizer
    }

    pub fn into_parts(self) -> (M, O) {
        (self.model, self.optimizer)
    }

    /// Number of successful updates applied so far.
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// One full-batch update. Returns the loss measured before the update.
    ///
    /// # Errors
    /// `NonFiniteLoss` if the loss is NaN or infinite. The update is skipped, so
    /// parameters and gradients are left as they were.
    pub fn train_step(&mut self, samples: &[LabeledSample]) -> Result<f64, ScalarGradError> {
        let step = self.steps_taken;
        self.checked_step(samples, step)
    }

    fn checked_step(
        &mut self,
        samples: &[LabeledSample],
        step: usize,
    ) -> Result<f64, ScalarGradError> {
        let loss = classification_loss(&self.model, samples)?;
        let value = loss.value();
        if !value.is_finite() {
            return Err(ScalarGradError::NonFiniteLoss { step });
        }
        loss.backward();
        self.optimizer.step()?;
        self.optimizer.zero_grad();
        self.steps_taken += 1;
        Ok(value)
    }

    /// Loss on `samples` without touching parameters or gradients.
    pub fn evaluate(&self, samples: &[LabeledSample]) -> Result<f64, ScalarGradError> {
        Ok(classification_loss(&self.model, samples)?.value())
    }

    /// Runs `config.steps` full-batch steps on `train`.
    ///
    /// Validation is skipped when `val` is empty.
    ///
    /// # Errors
    /// * `ConfigurationError` from [`TrainConfig::validate`].
    /// * `NonFiniteLoss` as soon as a training loss is NaN or infinite, before
    ///   that step touches any parameter.
    /// * Any error from the loss or optimizer.
    pub fn fit(
        &mut self,
        train: &[LabeledSample],
        val: &[LabeledSample],
        config: &TrainConfig,
    ) -> Result<TrainReport, ScalarGradError> {
        config.validate()?;
        let start = Instant::now();
        let mut report = TrainReport::default();

        for step in 0..config.steps {
            let train_loss = self.checked_step(train, step)?;
            report.train_losses.push(train_loss);

            if step % config.eval_every == 0 && !val.is_empty() {
                let val_loss = self.evaluate(val)?;
                report.val_losses.push((step, val_loss));
                info!(
                    "step {}/{}: train loss {:.6}, val loss {:.6}",
                    step + 1,
                    config.steps,
                    train_loss,
                    val_loss
                );
            }
        }

        report.elapsed = start.elapsed();
        info!(
            "training finished: {} steps in {:?}, final train loss {:.6}",
            config.steps,
            report.elapsed,
            report.final_train_loss().unwrap_or(f64::NAN)
        );
        Ok(report)
    }
}

impl<M: Module> Trainer<M, AdamOptimizer> {
    /// Pairs `model` with an AdamW optimizer configured from `config`.
    pub fn with_adamw(model: M, config: &TrainConfig) -> Result<Self, ScalarGradError> {
        config.validate()?;
        let optimizer =
            AdamOptimizer::adamw(model.parameters(), config.learning_rate, config.weight_decay)?;
        Trainer::new(model, optimizer)
    }
}
