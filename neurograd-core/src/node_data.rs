// src/node_data.rs
use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;

/// Internal storage for one scalar node of a computation graph.
///
/// `NodeData` records are owned by the [`Graph`](crate::autograd::Graph) arena and
/// addressed by [`NodeId`]. User code only ever sees them through a
/// [`Node`](crate::node::Node) handle.
#[derive(Debug)]
pub(crate) struct NodeData {
    /// Forward value, computed eagerly when the node is created. Never changes afterwards.
    pub(crate) value: f64,
    /// Accumulated d(root)/d(this node). Starts at 0 and only changes during
    /// `backward()` or `zero_grad()`.
    pub(crate) grad: f64,
    /// The operands this node was derived from, in the order the backward rule
    /// returns their contributions.
    pub(crate) parents: Vec<NodeId>,
    /// The backward operation that produced this node.
    /// Leaf nodes (created directly from a scalar) have `grad_fn = None`.
    pub(crate) grad_fn: Option<Box<dyn BackwardOp>>,
}

impl NodeData {
    /// Creates a leaf record: no parents, no backward rule, zero gradient.
    pub(crate) fn leaf(value: f64) -> Self {
        NodeData {
            value,
            grad: 0.0,
            parents: Vec::new(),
            grad_fn: None,
        }
    }

    /// Creates the record of an operation result. The parents are taken from
    /// `grad_fn.inputs()` so that the edge list and the backward rule cannot disagree.
    pub(crate) fn from_op(value: f64, grad_fn: Box<dyn BackwardOp>) -> Self {
        NodeData {
            value,
            grad: 0.0,
            parents: grad_fn.inputs(),
            grad_fn: Some(grad_fn),
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.grad_fn.is_none()
    }
}
