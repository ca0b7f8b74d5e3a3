use crate::autograd::Value;
use crate::error::ScalarGradError;
use crate::nn::check_len;

/// Probabilities are clamped into `[PROBABILITY_EPSILON, 1 - PROBABILITY_EPSILON]`
/// before taking logarithms.
pub const PROBABILITY_EPSILON: f64 = 1e-7;

/// Mean binary cross-entropy between probabilities and targets in `[0, 1]`:
///
/// `-(1/n) * sum_i [t_i * ln(p_i) + (1 - t_i) * ln(1 - p_i)]`
///
/// Built entirely from graph operations, so gradients flow back into the
/// probabilities. A probability outside the clamp range gets a zero gradient.
///
/// # Errors
/// * `ShapeMismatch` if the slices differ in length.
/// * `EmptyInput` if they are empty.
pub fn binary_cross_entropy(
    probabilities: &[Value],
    targets: &[f64],
) -> Result<Value, ScalarGradError> {
    check_len(probabilities.len(), targets.len(), "binary_cross_entropy")?;
    if probabilities.is_empty() {
        return Err(ScalarGradError::EmptyInput {
            operation: "binary_cross_entropy".to_string(),
        });
    }

    let total: Value = probabilities
        .iter()
        .zip(targets)
        .map(|(p, &t)| {
            let p = p.clamp(PROBABILITY_EPSILON, 1.0 - PROBABILITY_EPSILON);
            let positive = p.ln() * t;
            let negative = (1.0 - &p).ln() * (1.0 - t);
            positive + negative
        })
        .sum();
    Ok(total * (-1.0 / probabilities.len() as f64))
}
