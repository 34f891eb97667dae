// neurograd-core/src/ops/arithmetic/mul.rs

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::error::NeuroGradError;
use crate::node::Node;
use crate::ops::apply_binary_op;

/// Backward pass structure for multiplication \( z = a \cdot b \).
///
/// Stores both input values: \( \partial z / \partial a = b \) and
/// \( \partial z / \partial b = a \).
#[derive(Debug)]
struct MulBackward {
    a: NodeId,
    a_value: f64,
    b: NodeId,
    b_value: f64,
}

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![self.b_value * grad_output, self.a_value * grad_output]
    }

    fn inputs(&self) -> Vec<NodeId> {
        vec![self.a, self.b]
    }
}

/// Multiplies two nodes: `a * b`.
///
/// # Errors
/// `GraphMismatch` if `a` and `b` belong to different graphs.
pub fn mul_op<'g>(a: &Node<'g>, b: &Node<'g>) -> Result<Node<'g>, NeuroGradError> {
    apply_binary_op(
        a,
        b,
        |x, y| x * y,
        |a, a_value, b, b_value| {
            Box::new(MulBackward {
                a,
                a_value,
                b,
                b_value,
            })
        },
        "mul_op",
    )
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
