use crate::autograd::Value;
use crate::error::ScalarGradError;
use crate::nn::activation::Activation;
use crate::nn::check_len;
use crate::nn::init;
use crate::nn::module::Module;
use rand::Rng;

/// A single neuron: `activation(bias + sum_i w_i * x_i)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `in_features` weights drawn from
    /// `uniform[-1, 1) / sqrt(in_features)` and a zero bias.
    pub fn new<R: Rng + ?Sized>(in_features: usize, activation: Activation, rng: &mut R) -> Self {
        let weights = (0..in_features)
            .map(|_| init::scaled_uniform(rng, in_features))
            .collect();
        Neuron {
            weights,
            bias: Value::new(0.0),
            activation,
        }
    }

    /// Creates a neuron from existing parameter handles.
    pub fn from_parameters(weights: Vec<Value>, bias: Value, activation: Activation) -> Self {
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    pub fn in_features(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Computes the neuron's output. The bias node itself starts the sum, so it
    /// receives a gradient like every weight.
    pub fn forward(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        check_len(self.weights.len(), inputs.len(), "Neuron forward")?;
        let pre_activation = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.clone(), |acc, (w, x)| acc.add(&w.mul(x)));
        Ok(self.activation.apply(&pre_activation))
    }

    /// Weights in input order, then the bias.
    pub fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}

/// A fully connected layer: `out_features` independent [`Neuron`]s over the same input.
#[derive(Debug, Clone)]
pub struct Linear {
    neurons: Vec<Neuron>,
    in_features: usize,
}

impl Linear {
    pub fn new<R: Rng + ?Sized>(
        in_features: usize,
        out_features: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..out_features)
            .map(|_| Neuron::new(in_features, activation, rng))
            .collect();
        Linear {
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

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Linear {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        check_len(self.in_features, inputs.len(), "Linear forward")?;
        self.neurons.iter().map(|n| n.forward(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(Neuron::parameters).collect()
    }
}

#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
