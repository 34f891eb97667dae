use crate::error::NeuroGradError;
use crate::node::Node;
use crate::ops::arithmetic::{add_op, div_op};
use crate::ops::math_elem::exp_op;

/// Normalizes a list of logits into probabilities:
/// \( p_i = e^{x_i} / \sum_j e^{x_j} \).
///
/// Produces one output node per input. The sum is a left-to-right chain of `add`
/// nodes starting from a zero leaf, and every output is a `div` of its own `exp`
/// node by that shared sum; there is no fused backward rule. The logits are not
/// shifted by their maximum, so very large logits overflow `exp` to `inf`.
///
/// An empty list yields an empty list.
///
/// # Errors
/// `GraphMismatch` if the logits do not all belong to the same graph.
pub fn softmax_op<'g>(logits: &[Node<'g>]) -> Result<Vec<Node<'g>>, NeuroGradError> {
    let first = match logits.first() {
        Some(first) => first,
        None => return Ok(Vec::new()),
    };

    let mut exps = Vec::with_capacity(logits.len());
    let mut sum_exps = first.graph().leaf(0.0);
    for logit in logits {
        let e = exp_op(logit)?;
        sum_exps = add_op(&sum_exps, &e)?;
        exps.push(e);
    }

    exps.iter().map(|e| div_op(e, &sum_exps)).collect()
}

#[cfg(test)]
#[path = "softmax_test.rs"]
mod tests;
