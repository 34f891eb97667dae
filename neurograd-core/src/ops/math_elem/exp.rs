// neurograd-core/src/ops/math_elem/exp.rs

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::error::NeuroGradError;
use crate::node::Node;
use crate::ops::apply_unary_op;

/// Backward pass structure for \( z = e^a \).
///
/// The derivative is the output itself, so the forward result is stored.
#[derive(Debug)]
struct ExpBackward {
    a: NodeId,
    output: f64,
}

impl BackwardOp for ExpBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![self.output * grad_output]
    }

    fn inputs(&self) -> Vec<NodeId> {
        vec![self.a]
    }
}

/// Computes \( e^a \).
///
/// Large inputs overflow to `inf` like [`f64::exp`].
pub fn exp_op<'g>(a: &Node<'g>) -> Result<Node<'g>, NeuroGradError> {
    Ok(apply_unary_op(a, f64::exp, |a, _, output| {
        Box::new(ExpBackward { a, output })
    }))
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
