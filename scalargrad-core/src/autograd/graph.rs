use crate::autograd::Value;
use log::debug;
use std::collections::HashSet;
use std::rc::Rc;

/// Identity of a node: the address of its shared allocation.
///
/// Stable for as long as any handle to the node is alive, which covers a whole
/// sweep since the sorted order itself holds a handle to every node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn of(value: &Value) -> Self {
        NodeId(Rc::as_ptr(&value.0) as *const () as usize)
    }
}

/// Builds a topological order of every node reachable from `root` through
/// predecessor edges.
///
/// The order is a post-order of a depth-first search: each node appears after all
/// of its predecessors, and `root` is last. A node reachable along several paths
/// appears exactly once. The search keeps an explicit stack so long chains (a loss
/// summed over many samples) do not grow the call stack.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut order = Vec::new();
    // `true` marks a node whose predecessors have already been pushed.
    let mut stack = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            order.push(node);
            continue;
        }
        if !visited.insert(node.id()) {
            continue;
        }
        let predecessors = node.predecessors();
        stack.push((node, true));
        // Reversed so the first operand is explored first.
        for predecessor in predecessors.into_iter().rev() {
            if !visited.contains(&predecessor.id()) {
                stack.push((predecessor, false));
            }
        }
    }
    order
}

/// Reverse sweep: seeds `root` with gradient `1.0`, then runs every node's local
/// derivative rule from the root back to the leaves.
///
/// Running the rules in reverse topological order guarantees that every consumer of
/// a node has contributed to its gradient before that node distributes it further.
pub(crate) fn backward(root: &Value) {
    let order = topological_sort(root);
    debug!("backward: {} nodes reachable from root", order.len());

    root.set_grad(1.0);
    for node in order.iter().rev() {
        let data = node.0.borrow();
        data.op.backward(data.data, data.grad);
    }
}

/// Resets the gradient of every node reachable from `root`, `root` included.
pub fn zero_grad_reachable(root: &Value) {
    for node in topological_sort(root) {
        node.zero_grad();
    }
}
