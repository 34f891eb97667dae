use crate::autograd::graph::NodeId;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable scalar operation.
///
/// Every operation that creates a non-leaf node has an associated `BackwardOp`
/// implementation. It is stored in the output node's `grad_fn` field and is used
/// during `backward()` to propagate gradients according to the chain rule.
///
/// Implementations capture whatever forward values they need when the node is
/// built. Node values never change after creation, so no graph access is needed
/// while the rule runs.
pub trait BackwardOp: Debug {
    /// Computes the contribution of this node's gradient to each of its inputs.
    ///
    /// If the operation is \( z = f(x_1, ..., x_n) \), this returns
    /// \( \frac{dL}{dz} \cdot \frac{\partial z}{\partial x_i} \) for every input \( i \).
    ///
    /// # Arguments
    /// * `grad_output`: The fully accumulated gradient of the node that owns this rule (dL/dz).
    ///
    /// # Returns
    /// One contribution per input, in the same order as [`inputs`](Self::inputs).
    /// The graph engine adds each contribution into the matching parent's gradient.
    fn backward(&self, grad_output: f64) -> Vec<f64>;

    /// Returns the identifiers of the input nodes that participated in the forward operation.
    ///
    /// The order **must** match the order of the contributions returned by `backward()`.
    fn inputs(&self) -> Vec<NodeId>;
}
