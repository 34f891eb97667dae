// src/nn/mod.rs
// Perceptron building blocks: neurons, layers and the Module trait.

pub mod layers;
pub mod module; // Trait Module

// Re-export common items
pub use layers::layer::{BoundLayer, Layer};
pub use layers::neuron::{Activation, BoundNeuron, Neuron};
pub use module::Module;
