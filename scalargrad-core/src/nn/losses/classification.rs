//! Multi-class classification loss for models with one output per class.

use crate::autograd::Value;
use crate::error::ScalarGradError;
use crate::nn::losses::bce::binary_cross_entropy;
use crate::nn::module::Module;

/// A feature vector with its class index.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSample {
    pub features: Vec<f64>,
    pub label: usize,
}

impl LabeledSample {
    pub fn new(features: Vec<f64>, label: usize) -> Self {
        LabeledSample { features, label }
    }
}

/// One-vs-rest loss over a batch.
///
/// For each sample the model's raw outputs go through a sigmoid and are compared
/// with the one-hot encoding of the label using [`binary_cross_entropy`]. The
/// per-sample losses are averaged.
///
/// # Errors
/// * `EmptyInput` if `samples` is empty.
/// * `InvalidLabel` if a label is not smaller than the number of model outputs.
/// * Any error from the model's forward pass.
pub fn classification_loss<M: Module + ?Sized>(
    model: &M,
    samples: &[LabeledSample],
) -> Result<Value, ScalarGradError> {
    if samples.is_empty() {
        return Err(ScalarGradError::EmptyInput {
            operation: "classification_loss".to_string(),
        });
    }

    let mut per_sample = Vec::with_capacity(samples.len());
    for sample in samples {
        let outputs = model.forward_features(&sample.features)?;
        if sample.label >= outputs.len() {
            return Err(ScalarGradError::InvalidLabel {
                label: sample.label,
                num_classes: outputs.len(),
            });
        }
        let probabilities: Vec<Value> = outputs.iter().map(Value::sigmoid).collect();
        let targets: Vec<f64> = (0..outputs.len())
            .map(|class| if class == sample.label { 1.0 } else { 0.0 })
            .collect();
        per_sample.push(binary_cross_entropy(&probabilities, &targets)?);
    }

    let total: Value = per_sample.into_iter().sum();
    Ok(total * (1.0 / samples.len() as f64))
}
