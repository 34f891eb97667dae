//! # Training a Single Perceptron on Logical OR
//!
//! This example walks through the full training loop of `neurograd-core`:
//!
//! 1.  **Model definition**: one `Neuron` with two inputs and a sigmoid activation.
//! 2.  **Binding**: each epoch binds the neuron into a fresh `Graph`, so the
//!     parameters become leaves of that graph.
//! 3.  **Forward pass and loss**: the four OR samples go through the neuron and
//!     `mse_loss_op` reduces the predictions to one scalar.
//! 4.  **Backward pass**: `loss.backward()` fills in the gradient of every leaf.
//! 5.  **Update**: `Sgd::step` writes the new parameter values back into the neuron.
//!
//! ## Running
//! `cargo run --example perceptron_or`

use neurograd_core::nn::{Activation, Module, Neuron};
use neurograd_core::ops::loss::mse_loss_op;
use neurograd_core::optim::Sgd;
use neurograd_core::{Graph, NeuroGradError};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SAMPLES: [([f64; 2], f64); 4] = [
    ([0.0, 0.0], 0.0),
    ([0.0, 1.0], 1.0),
    ([1.0, 0.0], 1.0),
    ([1.0, 1.0], 1.0),
];

fn main() -> Result<(), NeuroGradError> {
    let mut neuron = Neuron::with_rng(2, Activation::Sigmoid, &mut StdRng::seed_from_u64(7));
    let optimizer = Sgd::new(1.0);
    let targets: Vec<f64> = SAMPLES.iter().map(|&(_, y)| y).collect();
    let num_epochs = 1000;

    println!(
        "Training a {}-parameter perceptron on OR for {} epochs",
        neuron.num_parameters(),
        num_epochs
    );

    for epoch in 0..num_epochs {
        let graph = Graph::new();
        let bound = neuron.bind(&graph);

        let mut predictions = Vec::with_capacity(SAMPLES.len());
        for (x, _) in SAMPLES.iter() {
            let inputs = [graph.leaf(x[0]), graph.leaf(x[1])];
            predictions.push(bound.forward(&inputs)?);
        }
        let loss = mse_loss_op(&predictions, &targets)?;
        loss.backward()?;
        optimizer.step(&mut neuron, &bound.gradients())?;

        if epoch % 100 == 0 || epoch == num_epochs - 1 {
            println!("Epoch {:4}: loss = {:.6}", epoch, loss.value());
        }
    }

    println!("Learned weights = {:?}, bias = {:.4}", neuron.weights(), neuron.bias());
    let graph = Graph::new();
    let bound = neuron.bind(&graph);
    for (x, y) in SAMPLES.iter() {
        let out = bound.forward(&[graph.leaf(x[0]), graph.leaf(x[1])])?;
        println!("{:?} -> {:.4} (target {})", x, out.value(), y);
    }
    Ok(())
}
