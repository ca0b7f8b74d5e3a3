use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::model::{Kan, Mlp};
use scalargrad_core::nn::{classification_loss, Module};
use scalargrad_core::optim::{AdamOptimizer, Optimizer};
use scalargrad_core::train::{TrainConfig, Trainer};
use scalargrad_core::ScalarGradError;

mod common;
use common::{init_logger, separable_samples};

#[test]
fn test_mlp_loss_decreases() -> Result<(), ScalarGradError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(42);
    let model = Mlp::new(2, &[4, 2], &mut rng)?;
    let samples = separable_samples(20);
    let config = TrainConfig {
        steps: 40,
        learning_rate: 0.05,
        weight_decay: 0.0,
        eval_every: 10,
    };
    let mut trainer = Trainer::with_adamw(model, &config)?;

    let before = trainer.evaluate(&samples)?;
    let report = trainer.fit(&samples, &samples, &config)?;
    let after = trainer.evaluate(&samples)?;

    assert!(after < before, "loss went from {} to {}", before, after);
    assert_eq!(report.train_losses.len(), 40);
    assert_eq!(report.val_losses.len(), 4);
    Ok(())
}

#[test]
fn test_kan_loss_decreases() -> Result<(), ScalarGradError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(7);
    let model = Kan::new(2, &[4, 2], &mut rng)?;
    let samples = separable_samples(20);
    let config = TrainConfig {
        steps: 40,
        learning_rate: 0.05,
        weight_decay: 0.0,
        eval_every: 40,
    };
    let mut trainer = Trainer::with_adamw(model, &config)?;

    let report = trainer.fit(&samples, &[], &config)?;

    let first = report.train_losses[0];
    let last = report.final_train_loss().unwrap_or(f64::NAN);
    assert!(last < first, "loss went from {} to {}", first, last);
    Ok(())
}

#[test]
fn test_manual_loop_matches_trainer() -> Result<(), ScalarGradError> {
    // The same seed and data give the same parameters whether the loop is
    // written out or driven by the trainer.
    init_logger();
    let samples = separable_samples(10);
    let config = TrainConfig {
        steps: 5,
        learning_rate: 0.1,
        weight_decay: 1e-3,
        eval_every: 5,
    };

    let manual = Mlp::new(2, &[3, 2], &mut StdRng::seed_from_u64(1))?;
    let mut optimizer = AdamOptimizer::adamw(
        manual.parameters(),
        config.learning_rate,
        config.weight_decay,
    )?;
    for _ in 0..config.steps {
        let loss = classification_loss(&manual, &samples)?;
        loss.backward();
        optimizer.step()?;
        optimizer.zero_grad();
    }

    let mut trainer =
        Trainer::with_adamw(Mlp::new(2, &[3, 2], &mut StdRng::seed_from_u64(1))?, &config)?;
    trainer.fit(&samples, &[], &config)?;

    let a: Vec<f64> = manual.parameters().iter().map(|p| p.value()).collect();
    let b: Vec<f64> = trainer.model().parameters().iter().map(|p| p.value()).collect();
    assert_eq!(a, b);
    Ok(())
}
