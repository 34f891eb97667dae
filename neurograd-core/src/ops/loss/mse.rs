use crate::error::NeuroGradError;
use crate::node::Node;
use crate::ops::arithmetic::{add_op, div_op, mul_op, sub_op};

/// Mean squared error between predictions and constant targets:
/// \( L = \frac{1}{n} \sum_i (p_i - t_i)^2 \).
///
/// Targets become leaves of the predictions' graph. Each squared error is
/// `mul(d, d)` with `d = sub(p_i, t_i)`, the terms are summed with an `add`
/// chain from a zero leaf and the total is divided by a leaf holding `n`.
///
/// # Errors
/// * `LengthMismatch` if `predictions` and `targets` differ in length.
/// * `EmptyNodeList` if there are no predictions.
/// * `GraphMismatch` if the predictions come from different graphs.
pub fn mse_loss_op<'g>(
    predictions: &[Node<'g>],
    targets: &[f64],
) -> Result<Node<'g>, NeuroGradError> {
    if predictions.len() != targets.len() {
        return Err(NeuroGradError::LengthMismatch {
            expected: predictions.len(),
            actual: targets.len(),
            operation: "mse_loss_op".to_string(),
        });
    }
    let graph = match predictions.first() {
        Some(first) => first.graph(),
        None => {
            return Err(NeuroGradError::EmptyNodeList {
                operation: "mse_loss_op".to_string(),
            })
        }
    };

    let mut total = graph.leaf(0.0);
    for (prediction, &target) in predictions.iter().zip(targets) {
        let diff = sub_op(prediction, &graph.leaf(target))?;
        total = add_op(&total, &mul_op(&diff, &diff)?)?;
    }
    div_op(&total, &graph.leaf(predictions.len() as f64))
}
