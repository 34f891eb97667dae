// src/node/mod.rs

use crate::autograd::graph::{Graph, NodeId};

mod autograd_methods;
mod op_methods;
mod traits;

/// Handle to one scalar node of a [`Graph`].
///
/// `Node` is a cheap `Copy` pair of the owning graph and the node's [`NodeId`].
/// All storage lives in the graph arena; the lifetime `'g` ties every handle to
/// its graph, so a node can never outlive the computation it belongs to.
///
/// Identity is the pair (graph, id): two nodes with equal values are different
/// nodes unless they are the same arena slot.
#[derive(Clone, Copy)]
pub struct Node<'g> {
    pub(crate) graph: &'g Graph,
    pub(crate) id: NodeId,
}

impl<'g> Node<'g> {
    pub(crate) fn new(graph: &'g Graph, id: NodeId) -> Self {
        Node { graph, id }
    }

    /// Returns the arena identifier of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the graph this node belongs to.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// The forward value, fixed when the node was created.
    pub fn value(&self) -> f64 {
        self.graph.value_of(self.id)
    }

    /// The gradient accumulated by the backward passes run so far.
    pub fn grad(&self) -> f64 {
        self.graph.grad_of(self.id)
    }

    /// The operands this node was computed from, in stored order.
    pub fn parents(&self) -> Vec<Node<'g>> {
        self.graph
            .parents_of(self.id)
            .into_iter()
            .map(|id| Node::new(self.graph, id))
            .collect()
    }

    /// `true` for nodes created directly from a scalar (no backward rule).
    pub fn is_leaf(&self) -> bool {
        self.graph.is_leaf(self.id)
    }

    /// Returns `true` if both handles belong to the same graph.
    pub(crate) fn same_graph(&self, other: &Node<'_>) -> bool {
        std::ptr::eq(self.graph, other.graph)
    }
}
