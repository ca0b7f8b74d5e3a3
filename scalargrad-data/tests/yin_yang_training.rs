use rand::SeedableRng;
use scalargrad_core::model::{Kan, Mlp};
use scalargrad_core::train::{TrainConfig, Trainer};
use scalargrad_core::ScalarGradError;
use scalargrad_data::datasets::yin_yang::to_labeled_samples;
use scalargrad_data::{generate_yin_yang, XorShiftRng};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_mlp_learns_yin_yang() -> Result<(), ScalarGradError> {
    init_logger();
    let mut rng = XorShiftRng::seed_from_u64(42);
    let splits = generate_yin_yang(&mut rng, 60)?;
    let train = to_labeled_samples(&splits.train);
    let val = to_labeled_samples(&splits.val);
    let config = TrainConfig {
        steps: 30,
        learning_rate: 0.05,
        ..TrainConfig::default()
    };

    let model = Mlp::new(2, &[8, 3], &mut rng)?;
    let mut trainer = Trainer::with_adamw(model, &config)?;
    let report = trainer.fit(&train, &val, &config)?;

    let first = report.train_losses[0];
    let last = trainer.evaluate(&train)?;
    assert!(last < first, "train loss went from {} to {}", first, last);
    assert_eq!(report.val_losses.len(), 3);
    Ok(())
}

#[test]
fn test_kan_learns_yin_yang() -> Result<(), ScalarGradError> {
    init_logger();
    let mut rng = XorShiftRng::seed_from_u64(42);
    let splits = generate_yin_yang(&mut rng, 60)?;
    let train = to_labeled_samples(&splits.train);
    let config = TrainConfig {
        steps: 30,
        learning_rate: 0.05,
        ..TrainConfig::default()
    };

    let model = Kan::new(2, &[8, 3], &mut rng)?;
    let mut trainer = Trainer::with_adamw(model, &config)?;
    let report = trainer.fit(&train, &[], &config)?;

    let first = report.train_losses[0];
    let last = trainer.evaluate(&train)?;
    assert!(last < first, "train loss went from {} to {}", first, last);
    Ok(())
}

#[test]
fn test_pipeline_is_reproducible() -> Result<(), ScalarGradError> {
    init_logger();
    let run = || -> Result<Vec<f64>, ScalarGradError> {
        let mut rng = XorShiftRng::seed_from_u64(7);
        let splits = generate_yin_yang(&mut rng, 30)?;
        let train = to_labeled_samples(&splits.train);
        let config = TrainConfig {
            steps: 5,
            ..TrainConfig::default()
        };
        let model = Mlp::new(2, &[4, 3], &mut rng)?;
        let mut trainer = Trainer::with_adamw(model, &config)?;
        Ok(trainer.fit(&train, &[], &config)?.train_losses)
    };

    assert_eq!(run()?, run()?);
    Ok(())
}
