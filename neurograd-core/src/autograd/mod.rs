//! # Autograd Engine
//!
//! The dynamic computation graph ([`Graph`]), the per-operation backward rule
//! ([`BackwardOp`]) and numerical gradient verification ([`grad_check`]).

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use grad_check::{check_grad, GradCheckConfig, GradCheckError};
pub use graph::{Graph, NodeId};
