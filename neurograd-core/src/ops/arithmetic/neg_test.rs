use super::*;
use crate::autograd::Graph;
use approx::assert_relative_eq;

#[test]
fn test_neg_forward_backward() -> Result<(), NeuroGradError> {
    let graph = Graph::new();
    let a = graph.leaf(2.5);
    let n = neg_op(&a)?;
    assert_relative_eq!(n.value(), -2.5);

    n.backward()?;
    assert_relative_eq!(a.grad(), -1.0);
    Ok(())
}

#[test]
fn test_neg_is_composite() -> Result<(), NeuroGradError> {
    let graph = Graph::new();
    let a = graph.leaf(1.0);
    let n = neg_op(&a)?;
    // zero leaf + the subtraction node
    assert_eq!(graph.len(), 3);
    let parents = n.parents();
    assert_eq!(parents.len(), 2);
    assert!(parents[0].is_leaf());
    assert_eq!(parents[0].value(), 0.0);
    assert_eq!(parents[1], a);
    Ok(())
}
