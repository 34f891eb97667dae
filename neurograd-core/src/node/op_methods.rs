// src/node/op_methods.rs
//
// Method-call forms of the operation constructors in `crate::ops`.

use crate::error::NeuroGradError;
use crate::node::Node;
use crate::ops::activation::{relu_op, sigmoid_op, tanh_op};
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::ops::math_elem::{exp_op, ln_op};

impl<'g> Node<'g> {
    /// `self + other`. See [`add_op`].
    pub fn add(&self, other: &Node<'g>) -> Result<Node<'g>, NeuroGradError> {
        add_op(self, other)
    }

    /// `self - other`. See [`sub_op`].
    pub fn sub(&self, other: &Node<'g>) -> Result<Node<'g>, NeuroGradError> {
        sub_op(self, other)
    }

    /// `self * other`. See [`mul_op`].
    pub fn mul(&self, other: &Node<'g>) -> Result<Node<'g>, NeuroGradError> {
        mul_op(self, other)
    }

    /// `self / other`. See [`div_op`].
    pub fn div(&self, other: &Node<'g>) -> Result<Node<'g>, NeuroGradError> {
        div_op(self, other)
    }

    /// `-self`. See [`neg_op`].
    pub fn neg(&self) -> Result<Node<'g>, NeuroGradError> {
        neg_op(self)
    }

    /// `e^self`. See [`exp_op`].
    pub fn exp(&self) -> Result<Node<'g>, NeuroGradError> {
        exp_op(self)
    }

    /// Natural logarithm of `self`. See [`ln_op`].
    pub fn ln(&self) -> Result<Node<'g>, NeuroGradError> {
        ln_op(self)
    }

    /// Hyperbolic tangent. See [`tanh_op`].
    pub fn tanh(&self) -> Result<Node<'g>, NeuroGradError> {
        tanh_op(self)
    }

    /// `max(0, self)`. See [`relu_op`].
    pub fn relu(&self) -> Result<Node<'g>, NeuroGradError> {
        relu_op(self)
    }

    /// Logistic sigmoid. See [`sigmoid_op`].
    pub fn sigmoid(&self) -> Result<Node<'g>, NeuroGradError> {
        sigmoid_op(self)
    }
}
