//! Trains an MLP and a KAN on the Yin-Yang dataset and compares them.
//!
//! Run with `RUST_LOG=info` to see per-step progress from the trainer.

use scalargrad_core::model::{Kan, Mlp};
use scalargrad_core::nn::Module;
use scalargrad_core::train::{TrainConfig, TrainReport, Trainer};
use scalargrad_data::datasets::yin_yang::to_labeled_samples;
use scalargrad_data::{generate_yin_yang, XorShiftRng};
use rand::SeedableRng;

const SEED: u64 = 42;
const NUM_POINTS: usize = 100;

fn print_progression(name: &str, report: &TrainReport) {
    println!("\n{} Loss Progression:", name);
    for (step, loss) in report.train_losses.iter().enumerate() {
        println!("Step {}: Train Loss = {:.6}", step + 1, loss);
    }
    println!("\n{} Validation Loss:", name);
    for (step, loss) in &report.val_losses {
        println!("Step {}: Val Loss = {:.6}", step + 1, loss);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut rng = XorShiftRng::seed_from_u64(SEED);
    let splits = generate_yin_yang(&mut rng, NUM_POINTS)?;
    let train = to_labeled_samples(&splits.train);
    let val = to_labeled_samples(&splits.val);

    // Both models draw their weights from the same stream, after the data.
    let mlp = Mlp::new(2, &[8, 3], &mut rng)?;
    let kan = Kan::new(2, &[8, 3], &mut rng)?;
    println!(
        "MLP: {} parameters, KAN: {} parameters",
        mlp.num_parameters(),
        kan.num_parameters()
    );

    let config = TrainConfig::default();

    let mut mlp_trainer = Trainer::with_adamw(mlp, &config)?;
    let mlp_report = mlp_trainer.fit(&train, &val, &config)?;

    let mut kan_trainer = Trainer::with_adamw(kan, &config)?;
    let kan_report = kan_trainer.fit(&train, &val, &config)?;

    println!("\n==== Benchmark Results ====");
    println!("MLP Training Time: {:?}", mlp_report.elapsed);
    println!("KAN Training Time: {:?}", kan_report.elapsed);

    print_progression("MLP", &mlp_report);
    print_progression("KAN", &kan_report);

    let test = to_labeled_samples(&splits.test);
    println!("\n==== Test Loss ====");
    println!("MLP: {:.6}", mlp_trainer.evaluate(&test)?);
    println!("KAN: {:.6}", kan_trainer.evaluate(&test)?);
    Ok(())
}
