// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linear activation functions for perceptron-style models.
//!
//! `tanh` and `relu` carry their own analytic backward rules. `sigmoid` and
//! `softmax` are compositions of the arithmetic and `exp` primitives and get
//! their gradients from those.

pub mod relu;
pub mod sigmoid;
pub mod softmax;
pub mod tanh;

// Re-export key functions
pub use relu::relu_op;
pub use sigmoid::sigmoid_op;
pub use softmax::softmax_op;
pub use tanh::tanh_op;
