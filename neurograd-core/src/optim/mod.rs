// neurograd-core/src/optim/mod.rs

//! Optimizers for training [`Module`](crate::nn::Module)s.
//!
//! An optimizer reads the gradients collected on a bound model's parameter
//! leaves and writes updated values back into the model. The next training
//! step binds those values into a fresh graph.

pub mod sgd;

pub use sgd::Sgd;
