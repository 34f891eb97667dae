// neurograd-core/src/ops/arithmetic/sub.rs

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::error::NeuroGradError;
use crate::node::Node;
use crate::ops::apply_binary_op;

/// Backward pass structure for subtraction \( z = a - b \):
/// \( +1 \) to `a`, \( -1 \) to `b`, both scaled by the upstream gradient.
#[derive(Debug)]
struct SubBackward {
    a: NodeId,
    b: NodeId,
}

impl BackwardOp for SubBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![grad_output, -grad_output]
    }

    fn inputs(&self) -> Vec<NodeId> {
        vec![self.a, self.b]
    }
}

/// Subtracts two nodes: `a - b`.
///
/// # Errors
/// `GraphMismatch` if `a` and `b` belong to different graphs.
pub fn sub_op<'g>(a: &Node<'g>, b: &Node<'g>) -> Result<Node<'g>, NeuroGradError> {
    apply_binary_op(
        a,
        b,
        |x, y| x - y,
        |a, _, b, _| Box::new(SubBackward { a, b }),
        "sub_op",
    )
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
