//! The `Value` node handle and the operations that build graphs from it.
//!
//! A `Value` is a reference-counted handle to a node holding a scalar, its
//! accumulated gradient and the [`Op`] that produced it. Cloning a `Value` is
//! cheap and yields another handle to the *same* node, which is how a parameter
//! is shared between a model and every graph built from it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::autograd::backward_op::Op;
use crate::autograd::graph::{self, NodeId};

/// Node storage. Only `data` and `grad` are mutated after construction.
pub(crate) struct ValueData {
    pub(crate) data: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
}

// Unlinks operands with an explicit stack, so tearing down a deep graph does not
// recurse once per level.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut pending = std::mem::replace(&mut self.op, Op::Leaf).into_operands();
        while let Some(value) = pending.pop() {
            if Rc::strong_count(&value.0) == 1 {
                let op = std::mem::replace(&mut value.0.borrow_mut().op, Op::Leaf);
                pending.extend(op.into_operands());
            }
        }
    }
}

/// A scalar node in the computation graph.
///
/// Every operation allocates a new node whose predecessors are its operands, so a
/// graph can only ever point backwards to nodes that already exist. Handles are
/// `Rc`-based and therefore not `Send`: a graph lives on one thread.
#[derive(Clone)]
pub struct Value(pub(crate) Rc<RefCell<ValueData>>);

impl Value {
    /// Creates a leaf node (input, parameter or constant) with a zero gradient.
    pub fn new(data: f64) -> Self {
        Self::from_op(data, Op::Leaf)
    }

    fn from_op(data: f64, op: Op) -> Self {
        Value(Rc::new(RefCell::new(ValueData {
            data,
            grad: 0.0,
            op,
        })))
    }

    /// Identity of the underlying node. Two handles share an id iff they share a node.
    pub fn id(&self) -> NodeId {
        NodeId::of(self)
    }

    /// Current scalar value.
    pub fn value(&self) -> f64 {
        self.0.borrow().data
    }

    /// Current accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.0.borrow().grad
    }

    /// Overwrites the value. Meant for initialising leaves, not for nodes that
    /// already have consumers waiting on a backward pass. Optimizer updates
    /// (`value += delta`) go through [`Value::add_to_value`].
    pub fn set_value(&self, data: f64) {
        self.0.borrow_mut().data = data;
    }

    /// In-place update `value += delta`, as applied by an optimizer to a parameter.
    pub fn add_to_value(&self, delta: f64) {
        self.0.borrow_mut().data += delta;
    }

    /// Overwrites the gradient.
    pub fn set_grad(&self, grad: f64) {
        self.0.borrow_mut().grad = grad;
    }

    /// Resets the gradient to zero.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    pub(crate) fn accumulate_grad(&self, delta: f64) {
        self.0.borrow_mut().grad += delta;
    }

    /// Returns `true` if this node has no predecessors.
    pub fn is_leaf(&self) -> bool {
        matches!(self.0.borrow().op, Op::Leaf)
    }

    /// Tag of the operation that produced this node (`"leaf"` for leaves).
    pub fn op_name(&self) -> &'static str {
        self.0.borrow().op.name()
    }

    /// The operands that produced this node, in order. Empty for leaves.
    pub fn predecessors(&self) -> Vec<Value> {
        self.0.borrow().op.operands()
    }

    /// Runs the reverse sweep rooted at this node.
    ///
    /// Seeds this node's gradient with `1.0` and accumulates `d(self)/d(n)` into every
    /// node `n` reachable through predecessor edges. Gradients are added to whatever
    /// the nodes already hold, so callers must zero them between sweeps that share
    /// nodes.
    pub fn backward(&self) {
        graph::backward(self);
    }

    // === Core operations ===

    /// `self + other`
    pub fn add(&self, other: &Value) -> Value {
        Self::from_op(self.value() + other.value(), Op::Add(self.clone(), other.clone()))
    }

    /// `self * other`
    pub fn mul(&self, other: &Value) -> Value {
        Self::from_op(self.value() * other.value(), Op::Mul(self.clone(), other.clone()))
    }

    /// `self ^ exponent` for a constant real exponent.
    ///
    /// A non-positive base with a non-integer exponent is outside the real domain.
    /// It is not checked: the value (and later the gradient) becomes NaN.
    pub fn pow(&self, exponent: f64) -> Value {
        Self::from_op(
            self.value().powf(exponent),
            Op::Pow {
                base: self.clone(),
                exponent,
            },
        )
    }

    /// `max(0, self)`
    pub fn relu(&self) -> Value {
        Self::from_op(self.value().max(0.0), Op::Relu(self.clone()))
    }

    /// Hyperbolic tangent.
    pub fn tanh(&self) -> Value {
        Self::from_op(self.value().tanh(), Op::Tanh(self.clone()))
    }

    /// Logistic sigmoid `1 / (1 + e^-self)`.
    pub fn sigmoid(&self) -> Value {
        Self::from_op(1.0 / (1.0 + (-self.value()).exp()), Op::Sigmoid(self.clone()))
    }

    /// `e^self`
    pub fn exp(&self) -> Value {
        Self::from_op(self.value().exp(), Op::Exp(self.clone()))
    }

    /// Natural logarithm. Same domain policy as [`Value::pow`]: a non-positive input
    /// yields NaN or `-inf` instead of an error.
    pub fn ln(&self) -> Value {
        Self::from_op(self.value().ln(), Op::Ln(self.clone()))
    }

    /// Clamps into `[min, max]`. The gradient passes through only when the input lies
    /// inside the interval. A NaN input stays NaN.
    pub fn clamp(&self, min: f64, max: f64) -> Value {
        let x = self.value();
        let clamped = if x.is_nan() { x } else { x.max(min).min(max) };
        Self::from_op(
            clamped,
            Op::Clamp {
                input: self.clone(),
                min,
                max,
            },
        )
    }

    // === Composite operations ===

    /// `self - other`, built as `self + other * -1`.
    pub fn sub(&self, other: &Value) -> Value {
        self.add(&other.mul(&Value::new(-1.0)))
    }

    /// `self / other`, built as `self * other^-1`.
    pub fn div(&self, other: &Value) -> Value {
        self.mul(&other.pow(-1.0))
    }

    /// `-self`, built as `self * -1`.
    pub fn neg(&self) -> Value {
        self.mul(&Value::new(-1.0))
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0.borrow();
        write!(f, "Value(data={:.4}, grad={:.4})", node.data, node.grad)
    }
}

// Operands are not followed, a deep graph would otherwise print in full.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0.borrow();
        f.debug_struct("Value")
            .field("data", &node.data)
            .field("grad", &node.grad)
            .field("op", &node.op.name())
            .finish()
    }
}

// === Operator overloads ===

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident) => {
        impl std::ops::$trait<&Value> for &Value {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                Value::$method(self, rhs)
            }
        }

        impl std::ops::$trait<Value> for &Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                Value::$method(self, &rhs)
            }
        }

        impl std::ops::$trait<&Value> for Value {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                Value::$method(&self, rhs)
            }
        }

        impl std::ops::$trait<Value> for Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                Value::$method(&self, &rhs)
            }
        }

        impl std::ops::$trait<f64> for &Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                Value::$method(self, &Value::new(rhs))
            }
        }

        impl std::ops::$trait<f64> for Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                Value::$method(&self, &Value::new(rhs))
            }
        }

        impl std::ops::$trait<&Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                Value::$method(&Value::new(self), rhs)
            }
        }

        impl std::ops::$trait<Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                Value::$method(&Value::new(self), &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add);
impl_binary_op!(Sub, sub);
impl_binary_op!(Mul, mul);
impl_binary_op!(Div, div);

impl std::ops::Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        Value::neg(self)
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        Value::neg(&self)
    }
}

impl std::iter::Sum for Value {
    /// Left fold with `add`. An empty iterator sums to a zero leaf.
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Value {
        iter.reduce(|acc, v| acc.add(&v))
            .unwrap_or_else(|| Value::new(0.0))
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
