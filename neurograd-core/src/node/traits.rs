// src/node/traits.rs

use crate::node::Node;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};

impl Debug for Node<'_> {
    /// Shows the node id together with its current value and gradient.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node(id={}, value={}, grad={})",
            self.id,
            self.value(),
            self.grad()
        )
    }
}

impl PartialEq for Node<'_> {
    /// Identity comparison: same graph and same arena slot. Values are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.same_graph(other) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl Hash for Node<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.graph, state);
        self.id.hash(state);
    }
}
