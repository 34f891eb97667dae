use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::error::NeuroGradError;
use crate::node::Node;
use crate::ops::apply_unary_op;

/// Backward pass structure for \( t = \tanh(a) \), with \( dt/da = 1 - t^2 \).
#[derive(Debug)]
struct TanhBackward {
    a: NodeId,
    output: f64,
}

impl BackwardOp for TanhBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![(1.0 - self.output * self.output) * grad_output]
    }

    fn inputs(&self) -> Vec<NodeId> {
        vec![self.a]
    }
}

/// Applies the hyperbolic tangent.
pub fn tanh_op<'g>(a: &Node<'g>) -> Result<Node<'g>, NeuroGradError> {
    Ok(apply_unary_op(a, f64::tanh, |a, _, output| {
        Box::new(TanhBackward { a, output })
    }))
}
