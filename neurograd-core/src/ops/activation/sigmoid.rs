use crate::error::NeuroGradError;
use crate::node::Node;
use crate::ops::arithmetic::{add_op, div_op, neg_op};
use crate::ops::math_elem::exp_op;

/// Applies the logistic sigmoid \( \sigma(a) = 1 / (1 + e^{-a}) \).
///
/// Built from `neg`, `exp`, `add` and `div` with two fresh constant leaves, so the
/// gradient \( \sigma(a)(1 - \sigma(a)) \) is obtained through the primitives'
/// rules rather than a closed-form backward rule.
pub fn sigmoid_op<'g>(a: &Node<'g>) -> Result<Node<'g>, NeuroGradError> {
    let graph = a.graph();
    let denominator = add_op(&graph.leaf(1.0), &exp_op(&neg_op(a)?)?)?;
    div_op(&graph.leaf(1.0), &denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::{check_grad, Graph, GradCheckConfig};
    use approx::assert_relative_eq;

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
    fn test_sigmoid_matches_closed_form() -> Result<(), NeuroGradError> {
        for x in [-4.0, -0.5, 1.5, 3.0] {
            let graph = Graph::new();
            let v = graph.leaf(x);
            let out = sigmoid_op(&v)?;
            out.backward()?;
            let s = 1.0 / (1.0 + f64::exp(-x));
            assert_relative_eq!(out.value(), s, epsilon = 1e-12);
            assert_relative_eq!(v.grad(), s * (1.0 - s), epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_sigmoid_grad_check() {
        let result = check_grad(|xs| xs[0].sigmoid(), &[0.7], GradCheckConfig::default());
        assert!(result.is_ok(), "{:?}", result);
    }
}
