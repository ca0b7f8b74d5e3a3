use crate::autograd::Value;

/// Non-linearity applied to a neuron's pre-activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// Identity, used for output layers.
    #[default]
    Linear,
    Tanh,
    Relu,
    Sigmoid,
}

impl Activation {
    /// Applies the activation, adding at most one node to the graph.
    pub fn apply(self, x: &Value) -> Value {
        match self {
            Activation::Linear => x.clone(),
            Activation::Tanh => x.tanh(),
            Activation::Relu => x.relu(),
            Activation::Sigmoid => x.sigmoid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_is_identity() {
        let x = Value::new(-2.5);
        let y = Activation::Linear.apply(&x);

        assert_eq!(y.id(), x.id());
    }

    #[test]
    fn test_apply_builds_matching_node() {
        let x = Value::new(0.3);

        assert_eq!(Activation::Tanh.apply(&x).op_name(), "tanh");
        assert_eq!(Activation::Relu.apply(&x).op_name(), "relu");
        assert_eq!(Activation::Sigmoid.apply(&x).op_name(), "sigmoid");
        assert_eq!(Activation::Relu.apply(&Value::new(-1.0)).value(), 0.0);
    }
}
