use crate::autograd::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical:?} != numerical grad {numerical:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Gradient for input {input_index} is NaN or infinite: {value:?}")]
    NonFiniteGradient { input_index: usize, value: f64 },
}

/// Checks gradients from the reverse sweep against central finite differences.
///
/// `func` builds a graph from one leaf per coordinate of `point` and returns its
/// root. The analytical gradient comes from a single `backward()` on fresh leaves;
/// the numerical one from `(f(x + eps) - f(x - eps)) / (2 * eps)` per coordinate.
/// The two must agree within `tolerance`, absolutely or relatively.
///
/// Returns the analytical gradients on success.
pub fn check_grad<F>(
    func: F,
    point: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&[Value]) -> Value,
{
    let inputs: Vec<Value> = point.iter().map(|&x| Value::new(x)).collect();
    func(&inputs).backward();
    let analytical: Vec<f64> = inputs.iter().map(Value::grad).collect();

    let evaluate = |coords: &[f64]| {
        let leaves: Vec<Value> = coords.iter().map(|&x| Value::new(x)).collect();
        func(&leaves).value()
    };

    let mut perturbed = point.to_vec();
    for (i, &analytical_grad) in analytical.iter().enumerate() {
        perturbed[i] = point[i] + epsilon;
        let loss_plus = evaluate(&perturbed);
        perturbed[i] = point[i] - epsilon;
        let loss_minus = evaluate(&perturbed);
        perturbed[i] = point[i];

        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NonFiniteGradient {
                input_index: i,
                value: numerical,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::NonFiniteGradient {
                input_index: i,
                value: analytical_grad,
            });
        }
        if !relative_eq!(
            analytical_grad,
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical: analytical_grad,
                numerical,
                difference: (analytical_grad - numerical).abs(),
            });
        }
    }

    Ok(analytical)
}
