use crate::error::NeuroGradError;
use crate::node::Node;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::ops::math_elem::ln_op;

/// Cross-entropy of a batch of one-target-per-example:
/// \( L = -\sum_k \ln(p_{t_k}) \) for every target index \( t_k \) in `targets`.
///
/// `probs` are typically the outputs of [`softmax_op`](crate::ops::activation::softmax_op).
/// The loss is a left-to-right chain of `add` nodes starting from a zero leaf, each
/// term being `neg(ln(probs[t]))`. It is not fused with softmax:
/// gradients reach the logits through the `ln`, `div` and `exp` rules.
///
/// With an empty `targets` list the loss is a zero leaf.
///
/// # Errors
/// * `IndexOutOfBounds` if any target is `>= probs.len()`. Checked before any node is built.
/// * `EmptyNodeList` if both `probs` and `targets` are empty. There is no graph to
///   hold a zero leaf in that case, so this is an error rather than a zero loss.
/// * `GraphMismatch` if the selected probabilities come from different graphs.
pub fn cross_entropy_op<'g>(
    probs: &[Node<'g>],
    targets: &[usize],
) -> Result<Node<'g>, NeuroGradError> {
    if let Some(&index) = targets.iter().find(|&&t| t >= probs.len()) {
        return Err(NeuroGradError::IndexOutOfBounds {
            index,
            len: probs.len(),
        });
    }
    let graph = match probs.first() {
        Some(first) => first.graph(),
        None => {
            return Err(NeuroGradError::EmptyNodeList {
                operation: "cross_entropy_op".to_string(),
            })
        }
    };

    let mut total_loss = graph.leaf(0.0);
    for &target in targets {
        let loss = neg_op(&ln_op(&probs[target])?)?;
        total_loss = add_op(&total_loss, &loss)?;
    }
    Ok(total_loss)
}

#[cfg(test)]
#[path = "cross_entropy_test.rs"]
mod tests;
