use crate::autograd::Value;

/// The operation that produced a node, together with the operands it captured.
///
/// Each variant carries exactly what its local derivative rule needs: the operand
/// handles and, for `Pow` and `Clamp`, the constants fixed at construction time.
/// The rules read operand values lazily, when the reverse sweep reaches the node.
#[derive(Debug, Clone)]
pub enum Op {
    /// Input, parameter or constant. No predecessors.
    Leaf,
    /// `lhs + rhs`
    Add(Value, Value),
    /// `lhs * rhs`
    Mul(Value, Value),
    /// `base ^ exponent` with a plain real exponent.
    Pow { base: Value, exponent: f64 },
    /// `max(0, input)`
    Relu(Value),
    /// `tanh(input)`
    Tanh(Value),
    /// `1 / (1 + e^-input)`
    Sigmoid(Value),
    /// `e^input`
    Exp(Value),
    /// `ln(input)`
    Ln(Value),
    /// `min(max(input, min), max)`
    Clamp { input: Value, min: f64, max: f64 },
}

impl Op {
    /// Short tag used in `Debug` output.
    pub fn name(&self) -> &'static str {
        match self {
            Op::Leaf => "leaf",
            Op::Add(..) => "add",
            Op::Mul(..) => "mul",
            Op::Pow { .. } => "pow",
            Op::Relu(_) => "relu",
            Op::Tanh(_) => "tanh",
            Op::Sigmoid(_) => "sigmoid",
            Op::Exp(_) => "exp",
            Op::Ln(_) => "ln",
            Op::Clamp { .. } => "clamp",
        }
    }

    /// The operands of this operation, in construction order.
    pub fn operands(&self) -> Vec<Value> {
        match self {
            Op::Leaf => Vec::new(),
            Op::Add(lhs, rhs) | Op::Mul(lhs, rhs) => vec![lhs.clone(), rhs.clone()],
            Op::Pow { base: input, .. }
            | Op::Clamp { input, .. }
            | Op::Relu(input)
            | Op::Tanh(input)
            | Op::Sigmoid(input)
            | Op::Exp(input)
            | Op::Ln(input) => vec![input.clone()],
        }
    }

    /// Consumes the operation, handing back the operand handles it owned.
    pub(crate) fn into_operands(self) -> Vec<Value> {
        match self {
            Op::Leaf => Vec::new(),
            Op::Add(lhs, rhs) | Op::Mul(lhs, rhs) => vec![lhs, rhs],
            Op::Pow { base: input, .. }
            | Op::Clamp { input, .. }
            | Op::Relu(input)
            | Op::Tanh(input)
            | Op::Sigmoid(input)
            | Op::Exp(input)
            | Op::Ln(input) => vec![input],
        }
    }

    /// Distributes the gradient of the node produced by this operation into its operands.
    ///
    /// `out_value` and `out_grad` are the value and the fully accumulated gradient of
    /// that node. Contributions are always added, never assigned, so an operand shared
    /// by several consumers (or used twice by the same one) receives the sum.
    pub(crate) fn backward(&self, out_value: f64, out_grad: f64) {
        match self {
            Op::Leaf => {}
            Op::Add(lhs, rhs) => {
                lhs.accumulate_grad(out_grad);
                rhs.accumulate_grad(out_grad);
            }
            Op::Mul(lhs, rhs) => {
                // Read both values first: lhs and rhs may be the same node.
                let (lhs_value, rhs_value) = (lhs.value(), rhs.value());
                lhs.accumulate_grad(rhs_value * out_grad);
                rhs.accumulate_grad(lhs_value * out_grad);
            }
            Op::Pow { base, exponent } => {
                let local = exponent * base.value().powf(exponent - 1.0);
                base.accumulate_grad(local * out_grad);
            }
            Op::Relu(input) => {
                if out_value > 0.0 {
                    input.accumulate_grad(out_grad);
                }
            }
            Op::Tanh(input) => {
                input.accumulate_grad((1.0 - out_value * out_value) * out_grad);
            }
            Op::Sigmoid(input) => {
                input.accumulate_grad(out_value * (1.0 - out_value) * out_grad);
            }
            Op::Exp(input) => {
                input.accumulate_grad(out_value * out_grad);
            }
            Op::Ln(input) => {
                let local = 1.0 / input.value();
                input.accumulate_grad(local * out_grad);
            }
            Op::Clamp { input, min, max } => {
                let x = input.value();
                if x >= *min && x <= *max {
                    input.accumulate_grad(out_grad);
                }
            }
        }
    }
}
