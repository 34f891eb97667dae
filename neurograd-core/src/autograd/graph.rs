use crate::autograd::BackwardOp;
use crate::error::NeuroGradError;
use crate::node::Node;
use crate::node_data::NodeData;
use log::{debug, trace};
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;

/// Stable identity of a node inside its [`Graph`]: the index of its arena slot.
///
/// Two nodes holding equal values are still different nodes; traversal and
/// gradient bookkeeping always key on `NodeId`, never on the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena, in creation order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Arena owning every node of a dynamic computation graph.
///
/// Nodes are appended as they are created and are never removed individually;
/// dropping the `Graph` frees the whole computation at once. Edges point from a
/// node to its parents (its operands), and since a node can only be built from
/// nodes that already exist, the graph is acyclic by construction.
///
/// `Graph` uses a `RefCell` for interior mutability and is therefore neither
/// `Sync` nor meant to be shared across threads: gradient accumulation is a
/// plain `+=` and relies on the strictly sequential reverse traversal.
#[derive(Default)]
pub struct Graph {
    nodes: RefCell<Vec<NodeData>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a leaf node holding `value`, with a zero gradient, no parents and
    /// no backward rule.
    pub fn leaf(&self, value: f64) -> Node<'_> {
        self.push(NodeData::leaf(value))
    }

    /// Number of nodes allocated in this graph.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Appends the result of an operation. Used by the `ops` constructors only.
    pub(crate) fn push_op(&self, value: f64, grad_fn: Box<dyn BackwardOp>) -> Node<'_> {
        self.push(NodeData::from_op(value, grad_fn))
    }

    fn push(&self, data: NodeData) -> Node<'_> {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(data);
        Node::new(self, id)
    }

    pub(crate) fn value_of(&self, id: NodeId) -> f64 {
        self.nodes.borrow()[id.0].value
    }

    pub(crate) fn grad_of(&self, id: NodeId) -> f64 {
        self.nodes.borrow()[id.0].grad
    }

    pub(crate) fn parents_of(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[id.0].parents.clone()
    }

    pub(crate) fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes.borrow()[id.0].is_leaf()
    }

    /// Resolves `root` to its id in this arena.
    fn check_root(&self, root: &Node<'_>, operation: &str) -> Result<NodeId, NeuroGradError> {
        if !std::ptr::eq(root.graph(), self) {
            return Err(NeuroGradError::GraphMismatch {
                operation: operation.to_string(),
            });
        }
        let len = self.len();
        if root.id().0 >= len {
            return Err(NeuroGradError::NodeNotFound { id: root.id().0, len });
        }
        Ok(root.id())
    }

    /// Returns every node reachable from `root` through parent edges, each exactly
    /// once, such that a node appears only after all of its parents.
    ///
    /// This is a post-order depth-first traversal that visits parents in the order
    /// they are stored, so the same graph always yields the same order. An explicit
    /// stack replaces recursion; the order is the same as the recursive version.
    ///
    /// # Errors
    /// * `GraphMismatch` if `root` belongs to another graph.
    /// * `NodeNotFound` if `root` is not a slot of this arena.
    pub fn topological_sort(&self, root: &Node<'_>) -> Result<Vec<NodeId>, NeuroGradError> {
        let root = self.check_root(root, "topological_sort")?;
        let nodes = self.nodes.borrow();
        Ok(build_topo(&nodes, root))
    }

    /// Runs reverse-mode differentiation from `root`.
    ///
    /// Sets the gradient of `root` to `1.0`, then walks the topological order in
    /// reverse and lets every non-leaf node add its contributions into its parents.
    /// All consumers of a node come later in the order, so by the time a node's
    /// rule runs its gradient already holds the sum over every path from `root`.
    ///
    /// Gradients are accumulated, not assigned: calling `backward` twice on the
    /// same root without [`zero_grad`](Self::zero_grad) in between adds the second
    /// pass on top of the first for every ancestor of `root`.
    ///
    /// # Errors
    /// * `GraphMismatch` if `root` belongs to another graph.
    /// * `NodeNotFound` if `root` is not a slot of this arena.
    /// * `BackwardArity` if a backward rule returns the wrong number of contributions.
    ///   The pass stops at that node; contributions already added by the nodes
    ///   before it stay in place, so gradients are unspecified until the next
    ///   [`zero_grad`](Self::zero_grad).
    pub fn backward(&self, root: &Node<'_>) -> Result<(), NeuroGradError> {
        let root = self.check_root(root, "backward")?;
        let mut nodes = self.nodes.borrow_mut();
        nodes[root.0].grad = 1.0;

        let sorted_nodes = build_topo(&nodes, root);
        debug!(
            "backward: root {} reaches {} of {} nodes",
            root,
            sorted_nodes.len(),
            nodes.len()
        );

        for &node_id in sorted_nodes.iter().rev() {
            let node = &nodes[node_id.0];
            let op = match node.grad_fn.as_ref() {
                Some(op) => op,
                None => continue,
            };
            let grad_output = node.grad;
            let contributions = op.backward(grad_output);
            if contributions.len() != node.parents.len() {
                return Err(NeuroGradError::BackwardArity {
                    operation: format!("{:?}", op),
                    expected: node.parents.len(),
                    actual: contributions.len(),
                });
            }
            trace!(
                "backward: node {} grad={} -> parents {:?} += {:?}",
                node_id,
                grad_output,
                node.parents,
                contributions
            );
            let parents = node.parents.clone();
            for (parent, contribution) in parents.into_iter().zip(contributions) {
                nodes[parent.0].grad += contribution;
            }
        }
        Ok(())
    }

    /// Sets the gradient of every node reachable from `root` (including `root`) to zero.
    ///
    /// # Errors
    /// * `GraphMismatch` if `root` belongs to another graph.
    /// * `NodeNotFound` if `root` is not a slot of this arena.
    pub fn zero_grad(&self, root: &Node<'_>) -> Result<(), NeuroGradError> {
        let root = self.check_root(root, "zero_grad")?;
        let mut nodes = self.nodes.borrow_mut();
        let sorted_nodes = build_topo(&nodes, root);
        debug!("zero_grad: clearing {} nodes reachable from {}", sorted_nodes.len(), root);
        for node_id in sorted_nodes {
            nodes[node_id.0].grad = 0.0;
        }
        Ok(())
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph(nodes={})", self.len())
    }
}

/// Post-order DFS over parent edges. `root` must be a valid index of `nodes`.
fn build_topo(nodes: &[NodeData], root: NodeId) -> Vec<NodeId> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list = Vec::new();
    // (node, index of the next parent to visit)
    let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
    visited.insert(root);

    while let Some(top) = stack.last_mut() {
        let (node_id, next_parent) = *top;
        let parents = &nodes[node_id.0].parents;
        if next_parent < parents.len() {
            top.1 += 1;
            let parent = parents[next_parent];
            if visited.insert(parent) {
                stack.push((parent, 0));
            }
        } else {
            stack.pop();
            sorted_list.push(node_id);
        }
    }
    sorted_list
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
