use super::*;
use crate::autograd::{check_grad, GradCheckConfig};
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_neuron_forward_identity() -> Result<(), NeuroGradError> {
    let neuron = Neuron::from_parameters(vec![2.0, -1.0], 0.5, Activation::Identity);
    let graph = Graph::new();
    let bound = neuron.bind(&graph);
    let inputs = [graph.leaf(3.0), graph.leaf(4.0)];
    let out = bound.forward(&inputs)?;
    // 2*3 - 1*4 + 0.5
    assert_relative_eq!(out.value(), 2.5);
    Ok(())
}

#[test]
fn test_neuron_gradients() -> Result<(), NeuroGradError> {
    let neuron = Neuron::from_parameters(vec![2.0, -1.0], 0.5, Activation::Identity);
    let graph = Graph::new();
    let bound = neuron.bind(&graph);
    let inputs = [graph.leaf(3.0), graph.leaf(4.0)];
    let out = bound.forward(&inputs)?;
    out.backward()?;

    // d/dw_i = x_i, d/db = 1, d/dx_i = w_i
    assert_eq!(bound.gradients(), vec![3.0, 4.0, 1.0]);
    assert_relative_eq!(inputs[0].grad(), 2.0);
    assert_relative_eq!(inputs[1].grad(), -1.0);
    Ok(())
}

#[test]
fn test_neuron_activations() -> Result<(), NeuroGradError> {
    let graph = Graph::new();
    let x = graph.leaf(-0.4);
    assert_relative_eq!(Activation::Identity.apply(&x)?.value(), -0.4);
    assert_eq!(Activation::Relu.apply(&x)?.value(), 0.0);
    assert_relative_eq!(Activation::Tanh.apply(&x)?.value(), (-0.4f64).tanh(), epsilon = 1e-12);
    assert_relative_eq!(
        Activation::Sigmoid.apply(&x)?.value(),
        1.0 / (1.0 + 0.4f64.exp()),
        epsilon = 1e-12
    );
    Ok(())
}

#[test]
fn test_neuron_input_length_mismatch() {
    let neuron = Neuron::from_parameters(vec![1.0, 1.0], 0.0, Activation::Relu);
    let graph = Graph::new();
    let bound = neuron.bind(&graph);
    let result = bound.forward(&[graph.leaf(1.0)]);
    assert!(matches!(
        result,
        Err(NeuroGradError::LengthMismatch { expected: 2, actual: 1, .. })
    ));
}

#[test]
fn test_neuron_random_init_is_seeded() {
    let a = Neuron::with_rng(5, Activation::Tanh, &mut StdRng::seed_from_u64(3));
    let b = Neuron::with_rng(5, Activation::Tanh, &mut StdRng::seed_from_u64(3));
    assert_eq!(a, b);
    assert_eq!(a.n_inputs(), 5);
    assert_eq!(a.bias(), 0.0);
    assert!(a.weights().iter().all(|w| w.is_finite()));

    let unseeded = Neuron::new(3, Activation::Relu);
    assert_eq!(unseeded.num_parameters(), 4);
}

#[test]
fn test_neuron_set_parameters() -> Result<(), NeuroGradError> {
    let mut neuron = Neuron::from_parameters(vec![0.0, 0.0], 0.0, Activation::Sigmoid);
    neuron.set_parameters(&[1.0, 2.0, 3.0])?;
    assert_eq!(neuron.weights(), &[1.0, 2.0]);
    assert_eq!(neuron.bias(), 3.0);
    assert_eq!(neuron.parameters(), vec![1.0, 2.0, 3.0]);
    assert!(neuron.set_parameters(&[1.0]).is_err());
    Ok(())
}

#[test]
fn test_neuron_grad_check() {
    // tanh(w0*x0 + w1*x1 + b) with weights, inputs and bias all as inputs.
    let result = check_grad(
        |xs| {
            let s = xs[0].mul(&xs[2])?.add(&xs[1].mul(&xs[3])?)?.add(&xs[4])?;
            Activation::Tanh.apply(&s)
        },
        &[0.3, -0.7, 1.1, 0.4, 0.05],
        GradCheckConfig::default(),
    );
    assert!(result.is_ok(), "{:?}", result);
}
