// src/ops/loss/mod.rs

//! # Loss Functions
//!
//! Scalar losses built entirely from primitive operations, so that their
//! gradients come from the primitives' backward rules.
//!
//! - [`cross_entropy_op`]: negative log-likelihood of target classes given probabilities.
//! - [`mse_loss_op`]: mean squared error against constant targets.

pub mod cross_entropy;
pub mod mse;

pub use cross_entropy::cross_entropy_op;
pub use mse::mse_loss_op;
