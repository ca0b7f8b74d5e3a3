// scalargrad-core/src/nn/losses/mse.rs

use crate::autograd::Value;
use crate::error::ScalarGradError;
use crate::nn::check_len;

/// Mean squared error: `(1/n) * sum_i (pred_i - target_i)^2`.
///
/// The result is a graph node, so `backward()` on it reaches every prediction
/// (and every target that is not a constant).
///
/// # Errors
/// * `ShapeMismatch` if the slices differ in length.
/// * `EmptyInput` if they are empty.
pub fn mse_loss(predictions: &[Value], targets: &[Value]) -> Result<Value, ScalarGradError> {
    check_len(predictions.len(), targets.len(), "mse_loss")?;
    if predictions.is_empty() {
        return Err(ScalarGradError::EmptyInput {
            operation: "mse_loss".to_string(),
        });
    }

    let total: Value = predictions
        .iter()
        .zip(targets)
        .map(|(p, t)| p.sub(t).pow(2.0))
        .sum();
    Ok(total * (1.0 / predictions.len() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn values(xs: &[f64]) -> Vec<Value> {
        xs.iter().map(|&x| Value::new(x)).collect()
    }

    #[test]
    fn test_mse_loss_forward_basic() -> Result<(), ScalarGradError> {
        let input = values(&[1.0, 2.0]);
        let target = values(&[1.5, 1.0]);

        let loss = mse_loss(&input, &target)?;

        assert_relative_eq!(loss.value(), 0.625);
        Ok(())
    }

    #[test]
    fn test_mse_loss_perfect_prediction() -> Result<(), ScalarGradError> {
        let loss = mse_loss(&values(&[0.3, -2.0]), &values(&[0.3, -2.0]))?;
        assert_eq!(loss.value(), 0.0);
        Ok(())
    }

    #[test]
    fn test_mse_loss_backward() -> Result<(), ScalarGradError> {
        // dL/dp_i = 2 (p_i - t_i) / n
        let input = values(&[1.0, 2.0]);
        let target = values(&[1.5, 1.0]);

        mse_loss(&input, &target)?.backward();

        assert_relative_eq!(input[0].grad(), -0.5);
        assert_relative_eq!(input[1].grad(), 1.0);
        assert_relative_eq!(target[0].grad(), 0.5);
        Ok(())
    }

    #[test]
    fn test_mse_loss_shape_mismatch() {
        let result = mse_loss(&values(&[1.0, 2.0, 3.0]), &values(&[1.0]));

        assert!(matches!(
            result,
            Err(ScalarGradError::ShapeMismatch { expected: 3, actual: 1, .. })
        ));
    }

    #[test]
    fn test_mse_loss_same_length_different_values_is_fine() -> Result<(), ScalarGradError> {
        let loss = mse_loss(&values(&[0.0, 0.0]), &values(&[3.0, 4.0]))?;
        assert_relative_eq!(loss.value(), 12.5);
        Ok(())
    }

    #[test]
    fn test_mse_loss_empty() {
        let result = mse_loss(&[], &[]);
        assert!(matches!(result, Err(ScalarGradError::EmptyInput { .. })));
    }
}
