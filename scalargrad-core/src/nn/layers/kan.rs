//! Kolmogorov-Arnold style layers.
//!
//! Instead of one weight per input followed by a shared non-linearity, every
//! input edge carries its own learnable activation `tanh(w * x + b)`. A neuron's
//! output is the plain sum of its edge activations.

use crate::autograd::Value;
use crate::error::ScalarGradError;
use crate::nn::check_len;
use crate::nn::init;
use crate::nn::module::Module;
use rand::Rng;

/// One output of a [`KanLayer`]: `sum_i tanh(w_i * x_i + b_i)`.
#[derive(Debug, Clone)]
pub struct KanNeuron {
    weights: Vec<Value>,
    biases: Vec<Value>,
}

impl KanNeuron {
    /// Edge weights are drawn from `uniform[-1, 1)`; edge biases start at zero.
    pub fn new<R: Rng + ?Sized>(in_features: usize, rng: &mut R) -> Self {
        let weights = (0..in_features)
            .map(|_| init::uniform(rng, -1.0, 1.0))
            .collect();
        KanNeuron {
            weights,
            biases: init::zeros(in_features),
        }
    }

    pub fn in_features(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn biases(&self) -> &[Value] {
        &self.biases
    }

    pub fn forward(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        check_len(self.weights.len(), inputs.len(), "KanNeuron forward")?;
        Ok(self
            .weights
            .iter()
            .zip(&self.biases)
            .zip(inputs)
            .map(|((w, b), x)| w.mul(x).add(b).tanh())
            .sum())
    }

    /// All weights, then all biases.
    pub fn parameters(&self) -> Vec<Value> {
        self.weights.iter().chain(&self.biases).cloned().collect()
    }
}

#[derive(Debug, Clone)]
pub struct KanLayer {
    neurons: Vec<KanNeuron>,
    in_features: usize,
}

impl KanLayer {
    pub fn new<R: Rng + ?Sized>(in_features: usize, out_features: usize, rng: &mut R) -> Self {
        let neurons = (0..out_features)
            .map(|_| KanNeuron::new(in_features, rng))
            .collect();
        KanLayer {
            neurons,
            in_features,
        }
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[KanNeuron] {
        &self.neurons
    }
}

impl Module for KanLayer {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        check_len(self.in_features, inputs.len(), "KanLayer forward")?;
        self.neurons.iter().map(|n| n.forward(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(KanNeuron::parameters).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::check_grad;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_kan_neuron_forward() -> Result<(), ScalarGradError> {
        let mut rng = StdRng::seed_from_u64(5);
        let neuron = KanNeuron::new(2, &mut rng);
        let (w0, w1) = (neuron.weights()[0].value(), neuron.weights()[1].value());

        let out = neuron.forward(&[Value::new(0.3), Value::new(-0.6)])?;

        let expected = (w0 * 0.3).tanh() + (w1 * -0.6).tanh();
        assert_abs_diff_eq!(out.value(), expected, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_kan_neuron_accepts_more_inputs_than_outputs() -> Result<(), ScalarGradError> {
        // Every input has its own edge, regardless of the layer width.
        let mut rng = StdRng::seed_from_u64(6);
        let layer = KanLayer::new(5, 1, &mut rng);

        let out = layer.forward_features(&[0.1, 0.2, 0.3, 0.4, 0.5])?;

        assert_eq!(out.len(), 1);
        assert_eq!(layer.num_parameters(), 10);
        Ok(())
    }

    #[test]
    fn test_kan_neuron_init() {
        let mut rng = StdRng::seed_from_u64(7);
        let neuron = KanNeuron::new(8, &mut rng);

        assert!(neuron.weights().iter().all(|w| (-1.0..1.0).contains(&w.value())));
        assert!(neuron.biases().iter().all(|b| b.value() == 0.0));
    }

    #[test]
    fn test_kan_layer_shape_mismatch() {
        let mut rng = StdRng::seed_from_u64(8);
        let layer = KanLayer::new(2, 3, &mut rng);

        let result = layer.forward_features(&[1.0]);

        assert!(matches!(
            result,
            Err(ScalarGradError::ShapeMismatch { expected: 2, actual: 1, .. })
        ));
    }

    #[test]
    fn test_kan_edge_gradients() -> Result<(), ScalarGradError> {
        let mut rng = StdRng::seed_from_u64(9);
        let neuron = KanNeuron::new(1, &mut rng);
        let w = neuron.weights()[0].value();
        let x = Value::new(0.7);

        neuron.forward(&[x.clone()])?.backward();

        let local = 1.0 - (w * 0.7).tanh().powi(2);
        assert_abs_diff_eq!(neuron.weights()[0].grad(), local * 0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(neuron.biases()[0].grad(), local, epsilon = 1e-12);
        assert_abs_diff_eq!(x.grad(), local * w, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_kan_layer_against_finite_differences() {
        let mut rng = StdRng::seed_from_u64(10);
        let layer = KanLayer::new(3, 2, &mut rng);

        let result = check_grad(
            |x| match layer.forward(x) {
                Ok(outputs) => outputs.into_iter().sum(),
                Err(_) => Value::new(f64::NAN),
            },
            &[0.2, -0.5, 0.9],
            1e-6,
            1e-5,
        );

        assert!(result.is_ok(), "{:?}", result);
    }
}
