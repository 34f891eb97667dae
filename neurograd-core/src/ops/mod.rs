//! # Scalar Operations Module (`ops`)
//!
//! This module is the central hub for the operation constructors that build the
//! computation graph. Operations are grouped into submodules by functionality.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (named `xxx_op`) that
//!   computes the forward value eagerly and pushes a new node whose parents are the
//!   operands. The same functions are available as methods on [`Node`].
//! - **`Backward` Structs:** Each primitive operation has a struct (e.g. `AddBackward`,
//!   `LnBackward`) implementing [`BackwardOp`]. It captures the forward values it
//!   needs and returns the analytic local derivative times the node's gradient.
//! - **Composite operations** (`neg`, `sigmoid`, `softmax`, `cross_entropy`, `mse_loss`)
//!   have no backward struct of their own. They are built from the primitives, so
//!   their gradients follow from the primitives' rules.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg.
//! - [`math_elem`]: exp, ln.
//! - [`activation`]: tanh, relu, sigmoid, softmax.
//! - [`loss`]: cross-entropy, mean squared error.

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::error::NeuroGradError;
use crate::node::Node;

pub mod activation;
pub mod arithmetic;
pub mod loss;
pub mod math_elem;

/// Applies a unary scalar operation to a node.
///
/// # Arguments
/// * `a`: The input node.
/// * `op`: The forward function.
/// * `backward_builder`: Builds the backward rule from the input id, the input value
///   and the output value.
pub(crate) fn apply_unary_op<'g, F, B>(a: &Node<'g>, op: F, backward_builder: B) -> Node<'g>
where
    F: Fn(f64) -> f64,
    B: FnOnce(NodeId, f64, f64) -> Box<dyn BackwardOp>,
{
    let a_value = a.value();
    let output = op(a_value);
    let grad_fn = backward_builder(a.id(), a_value, output);
    a.graph().push_op(output, grad_fn)
}

/// Applies a binary scalar operation to two nodes of the same graph.
///
/// # Arguments
/// * `a`, `b`: The operands, in parent order.
/// * `op`: The forward function.
/// * `backward_builder`: Builds the backward rule from `(a_id, a_value, b_id, b_value)`.
/// * `op_name`: Name of the operation for error messages.
///
/// # Errors
/// `GraphMismatch` if `a` and `b` belong to different graphs.
pub(crate) fn apply_binary_op<'g, F, B>(
    a: &Node<'g>,
    b: &Node<'g>,
    op: F,
    backward_builder: B,
    op_name: &str,
) -> Result<Node<'g>, NeuroGradError>
where
    F: Fn(f64, f64) -> f64,
    B: FnOnce(NodeId, f64, NodeId, f64) -> Box<dyn BackwardOp>,
{
    if !a.same_graph(b) {
        return Err(NeuroGradError::GraphMismatch {
            operation: op_name.to_string(),
        });
    }
    let a_value = a.value();
    let b_value = b.value();
    let output = op(a_value, b_value);
    let grad_fn = backward_builder(a.id(), a_value, b.id(), b_value);
    Ok(a.graph().push_op(output, grad_fn))
}
