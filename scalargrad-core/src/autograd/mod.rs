//! Reverse-mode automatic differentiation over scalar values.
//!
//! Graphs are built dynamically by composing [`Value`]s; [`Value::backward`] runs the
//! reverse sweep that fills in gradients. The local derivative rules live on the
//! [`Op`] variant recorded by each node.

pub mod backward_op;
pub mod grad_check;
pub mod graph;
pub mod value;

pub use backward_op::Op;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::{topological_sort, zero_grad_reachable, NodeId};
pub use value::Value;
