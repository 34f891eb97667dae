// neurograd-core/src/ops/arithmetic/add.rs

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::error::NeuroGradError;
use crate::node::Node;
use crate::ops::apply_binary_op;

// --- Backward Operation ---

/// Backward pass structure for addition.
///
/// \( z = a + b \) has \( \partial z / \partial a = \partial z / \partial b = 1 \),
/// so the upstream gradient flows unchanged to both inputs.
#[derive(Debug)]
struct AddBackward {
    a: NodeId,
    b: NodeId,
}

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![grad_output, grad_output]
    }

    fn inputs(&self) -> Vec<NodeId> {
        vec![self.a, self.b]
    }
}

// --- Forward Operation ---

/// Adds two nodes: `a + b`.
///
/// # Errors
/// `GraphMismatch` if `a` and `b` belong to different graphs.
pub fn add_op<'g>(a: &Node<'g>, b: &Node<'g>) -> Result<Node<'g>, NeuroGradError> {
    apply_binary_op(
        a,
        b,
        |x, y| x + y,
        |a, _, b, _| Box::new(AddBackward { a, b }),
        "add_op",
    )
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
