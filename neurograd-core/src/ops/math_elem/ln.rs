// neurograd-core/src/ops/math_elem/ln.rs

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::error::NeuroGradError;
use crate::node::Node;
use crate::ops::apply_unary_op;

// --- LnBackward Definition ---

/// Backward pass structure for the natural logarithm \( z = \ln(a) \).
///
/// Stores the input value, as the gradient is \( 1 / a \).
#[derive(Debug)]
struct LnBackward {
    a: NodeId,
    a_value: f64,
}

impl BackwardOp for LnBackward {
    /// \\[ \frac{dL}{da} = \frac{dL}{dz} \cdot \frac{1}{a} \\]
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![(1.0 / self.a_value) * grad_output]
    }

    fn inputs(&self) -> Vec<NodeId> {
        vec![self.a]
    }
}

// --- ln_op Implementation ---

/// Computes the natural logarithm (base \( e \)) of a node.
///
/// # Domain Considerations
/// The logarithm is only defined for strictly positive numbers. Non-positive
/// inputs are not rejected: `ln(0)` is `-inf` and `ln(x < 0)` is `NaN`, as with
/// [`f64::ln`], and these values propagate into everything computed from them.
pub fn ln_op<'g>(a: &Node<'g>) -> Result<Node<'g>, NeuroGradError> {
    Ok(apply_unary_op(a, f64::ln, |a, a_value, _| {
        Box::new(LnBackward { a, a_value })
    }))
}

// --- Tests ---
#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
