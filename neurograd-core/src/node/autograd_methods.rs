use crate::error::NeuroGradError;
use crate::node::Node;

impl<'g> Node<'g> {
    /// Performs the backward pass starting from this node.
    ///
    /// Seeds this node's gradient with `1.0` and accumulates d(self)/d(ancestor)
    /// into every node reachable through parent edges, internal nodes included.
    ///
    /// Calling `backward()` again without [`zero_grad`](Self::zero_grad) adds the
    /// new gradients on top of the previous ones.
    ///
    /// # Errors
    /// See [`Graph::backward`](crate::autograd::Graph::backward).
    pub fn backward(&self) -> Result<(), NeuroGradError> {
        self.graph.backward(self)
    }

    /// Resets the gradient of this node and of every ancestor to zero.
    pub fn zero_grad(&self) -> Result<(), NeuroGradError> {
        self.graph.zero_grad(self)
    }

    /// All nodes reachable from this one, parents before children, this node last.
    pub fn topological_order(&self) -> Result<Vec<Node<'g>>, NeuroGradError> {
        let order = self.graph.topological_sort(self)?;
        Ok(order
            .into_iter()
            .map(|id| Node::new(self.graph, id))
            .collect())
    }
}
