// neurograd-core/src/ops/arithmetic/div.rs

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::error::NeuroGradError;
use crate::node::Node;
use crate::ops::apply_binary_op;

/// Backward pass structure for division \( z = a / b \).
///
/// \( \partial z / \partial a = 1 / b \) and \( \partial z / \partial b = -a / b^2 \).
/// A zero divisor yields infinite or NaN gradients, following IEEE-754.
#[derive(Debug)]
struct DivBackward {
    a: NodeId,
    a_value: f64,
    b: NodeId,
    b_value: f64,
}

impl BackwardOp for DivBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        let grad_a = (1.0 / self.b_value) * grad_output;
        let grad_b = (-self.a_value / (self.b_value * self.b_value)) * grad_output;
        vec![grad_a, grad_b]
    }

    fn inputs(&self) -> Vec<NodeId> {
        vec![self.a, self.b]
    }
}

/// Divides two nodes: `a / b`.
///
/// Division by zero is not intercepted: the value (and later the gradients)
/// become `inf` or `NaN` exactly as plain `f64` division does.
///
/// # Errors
/// `GraphMismatch` if `a` and `b` belong to different graphs.
pub fn div_op<'g>(a: &Node<'g>, b: &Node<'g>) -> Result<Node<'g>, NeuroGradError> {
    apply_binary_op(
        a,
        b,
        |x, y| x / y,
        |a, a_value, b, b_value| {
            Box::new(DivBackward {
                a,
                a_value,
                b,
                b_value,
            })
        },
        "div_op",
    )
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
