use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::error::NeuroGradError;
use crate::node::Node;
use crate::ops::apply_unary_op;

// --- Backward Operation ---

/// Backward pass structure for ReLU.
///
/// Passes the upstream gradient through iff the input was strictly positive.
/// The sub-gradient at exactly zero is 0.
#[derive(Debug)]
struct ReluBackward {
    a: NodeId,
    a_value: f64,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        let mask = if self.a_value > 0.0 { 1.0 } else { 0.0 };
        vec![mask * grad_output]
    }

    fn inputs(&self) -> Vec<NodeId> {
        vec![self.a]
    }
}

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `max(0, a)`.
pub fn relu_op<'g>(a: &Node<'g>) -> Result<Node<'g>, NeuroGradError> {
    Ok(apply_unary_op(
        a,
        |x| if x > 0.0 { x } else { 0.0 },
        |a, a_value, _| Box::new(ReluBackward { a, a_value }),
    ))
}

// --- Tests ---
#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
