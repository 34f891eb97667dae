use approx::assert_relative_eq;
use neurograd_core::ops::activation::{sigmoid_op, softmax_op, tanh_op};
use neurograd_core::ops::arithmetic::{add_op, mul_op};
use neurograd_core::ops::loss::cross_entropy_op;
use neurograd_core::{Graph, NeuroGradError};

mod common;
use common::{leaves, reachable_grads};

#[test]
fn test_additivity() -> Result<(), NeuroGradError> {
    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(-3.0);
    let c = add_op(&a, &b)?;
    assert_eq!(c.value(), -1.0);

    c.backward()?;
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
    Ok(())
}

#[test]
fn test_product_rule() -> Result<(), NeuroGradError> {
    let graph = Graph::new();
    let x = graph.leaf(3.0);
    let y = graph.leaf(4.0);
    let z = mul_op(&x, &y)?;
    assert_eq!(z.value(), 12.0);

    z.backward()?;
    assert_eq!(x.grad(), 4.0);
    assert_eq!(y.grad(), 3.0);
    Ok(())
}

#[test]
fn test_chain_rule_through_composition() -> Result<(), NeuroGradError> {
    let graph = Graph::new();
    let a = graph.leaf(1.0);
    let b = graph.leaf(2.0);
    let f = add_op(&a, &mul_op(&b, &graph.leaf(2.0))?)?;
    assert_eq!(f.value(), 5.0);

    f.backward()?;
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 2.0);
    Ok(())
}

#[test]
fn test_tanh_at_zero() -> Result<(), NeuroGradError> {
    let graph = Graph::new();
    let v = graph.leaf(0.0);
    let out = tanh_op(&v)?;
    assert_eq!(out.value(), 0.0);
    out.backward()?;
    assert_eq!(v.grad(), 1.0);
    Ok(())
}

#[test]
fn test_sigmoid_at_zero() -> Result<(), NeuroGradError> {
    let graph = Graph::new();
    let v = graph.leaf(0.0);
    let out = sigmoid_op(&v)?;
    assert_relative_eq!(out.value(), 0.5, epsilon = 1e-12);
    out.backward()?;
    assert_relative_eq!(v.grad(), 0.25, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_softmax_numeric_example() -> Result<(), NeuroGradError> {
    let graph = Graph::new();
    let logits = leaves(&graph, &[1.0, 2.0, 3.0]);
    let probs = softmax_op(&logits)?;
    let expected = [0.09003057317038046, 0.24472847105479767, 0.6652409557748219];
    for (p, e) in probs.iter().zip(expected) {
        assert_relative_eq!(p.value(), e, epsilon = 1e-9);
        assert!(p.value() > 0.0 && p.value() < 1.0);
    }
    let total: f64 = probs.iter().map(|p| p.value()).sum();
    assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_cross_entropy_gradient() -> Result<(), NeuroGradError> {
    let graph = Graph::new();
    let probs = leaves(&graph, &[0.1, 0.8, 0.1]);
    let loss = cross_entropy_op(&probs, &[1])?;
    assert_relative_eq!(loss.value(), -(0.8f64.ln()), epsilon = 1e-12);

    loss.backward()?;
    assert_relative_eq!(probs[1].grad(), -1.25, epsilon = 1e-12);
    assert_eq!(probs[0].grad(), 0.0);
    assert_eq!(probs[2].grad(), 0.0);
    Ok(())
}

#[test]
fn test_reset_then_backward_reproduces_gradients() -> Result<(), NeuroGradError> {
    let graph = Graph::new();
    let logits = leaves(&graph, &[0.3, -1.2, 2.2, 0.0]);
    let probs = softmax_op(&logits)?;
    let loss = cross_entropy_op(&probs, &[2, 0])?;

    loss.backward()?;
    let first = reachable_grads(&loss);

    loss.zero_grad()?;
    assert!(reachable_grads(&loss).iter().all(|&g| g == 0.0));

    loss.backward()?;
    let second = reachable_grads(&loss);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_shared_subexpression_diamond() -> Result<(), NeuroGradError> {
    // d = (x + y) * x, dd/dx = (x + y) + x
    let graph = Graph::new();
    let x = graph.leaf(2.0);
    let y = graph.leaf(3.0);
    let d = mul_op(&add_op(&x, &y)?, &x)?;
    assert_eq!(d.value(), 10.0);

    d.backward()?;
    assert_eq!(x.grad(), 7.0);
    assert_eq!(y.grad(), 2.0);
    Ok(())
}

#[test]
fn test_summed_output_gradients_with_shared_backward() -> Result<(), NeuroGradError> {
    // Gradients of p0 + p1 computed by one backward on their sum
    // equal the sum of two separate backward passes with a reset in between.
    let graph = Graph::new();
    let logits = leaves(&graph, &[0.5, 1.5, -0.5]);
    let probs = softmax_op(&logits)?;

    probs[0].backward()?;
    let from_p0: Vec<f64> = logits.iter().map(|l| l.grad()).collect();
    probs[0].zero_grad()?;
    probs[1].backward()?;
    let from_p1: Vec<f64> = logits.iter().map(|l| l.grad()).collect();
    probs[1].zero_grad()?;

    let total = add_op(&probs[0], &probs[1])?;
    total.backward()?;
    for (i, logit) in logits.iter().enumerate() {
        assert_relative_eq!(logit.grad(), from_p0[i] + from_p1[i], epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_internal_nodes_receive_gradients() -> Result<(), NeuroGradError> {
    let graph = Graph::new();
    let a = graph.leaf(3.0);
    let b = graph.leaf(0.5);
    let inner = mul_op(&a, &b)?;
    let outer = add_op(&inner, &inner)?;
    outer.backward()?;
    assert_eq!(inner.grad(), 2.0);
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 6.0);
    Ok(())
}
