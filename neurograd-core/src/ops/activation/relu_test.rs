use super::*;
use crate::autograd::Graph;

#[test]
fn test_relu_forward() -> Result<(), NeuroGradError> {
    let graph = Graph::new();
    let outputs: Vec<f64> = [-2.0, -1.0, 0.0, 1.0, 2.0]
        .iter()
        .map(|&x| relu_op(&graph.leaf(x)).map(|n| n.value()))
        .collect::<Result<_, _>>()?;
    assert_eq!(outputs, vec![0.0, 0.0, 0.0, 1.0, 2.0]);
    Ok(())
}

#[test]
fn test_relu_backward() -> Result<(), NeuroGradError> {
    let graph = Graph::new();
    for (input, expected_grad) in [(-2.0, 0.0), (0.0, 0.0), (1e-9, 1.0), (3.0, 1.0)] {
        let x = graph.leaf(input);
        let y = relu_op(&x)?;
        y.backward()?;
        assert_eq!(x.grad(), expected_grad, "input {}", input);
    }
    Ok(())
}

#[test]
fn test_relu_backward_chain() -> Result<(), NeuroGradError> {
    // loss = relu(x * 2)
    let graph = Graph::new();
    let two = graph.leaf(2.0);
    let pos = graph.leaf(1.0);
    let neg = graph.leaf(-1.0);

    let loss_pos = pos.mul(&two)?.relu()?;
    loss_pos.backward()?;
    assert_eq!(pos.grad(), 2.0);

    let loss_neg = neg.mul(&two)?.relu()?;
    loss_neg.backward()?;
    assert_eq!(neg.grad(), 0.0);
    Ok(())
}
