// neurograd-core/src/ops/arithmetic/neg.rs

use crate::error::NeuroGradError;
use crate::node::Node;
use crate::ops::arithmetic::sub_op;

/// Negates a node: `-a`.
///
/// Built as `0 - a` from a fresh zero leaf and [`sub_op`]; there is no dedicated
/// backward rule, the gradient `-1` comes from subtraction.
pub fn neg_op<'g>(a: &Node<'g>) -> Result<Node<'g>, NeuroGradError> {
    let zero = a.graph().leaf(0.0);
    sub_op(&zero, a)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
