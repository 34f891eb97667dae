use crate::autograd::Graph;
use crate::error::NeuroGradError;
use crate::node::Node;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(NeuroGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(NeuroGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

/// Tunables of [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Step used for the central difference.
    pub epsilon: f64,
    /// Allowed absolute *and* relative deviation before reporting a mismatch.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            tolerance: 1e-4,
        }
    }
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// `func` receives one leaf per entry of `inputs` (all in one fresh graph) and
/// returns the scalar output node. The analytical gradients come from a single
/// `backward()` on that output; each numerical gradient is
/// \( (f(x_i + \epsilon) - f(x_i - \epsilon)) / 2\epsilon \), each side evaluated
/// in its own graph.
///
/// # Errors
/// The first failing input is reported; see [`GradCheckError`].
pub fn check_grad<F>(func: F, inputs: &[f64], config: GradCheckConfig) -> Result<(), GradCheckError>
where
    F: for<'g> Fn(&[Node<'g>]) -> Result<Node<'g>, NeuroGradError>,
{
    if inputs.is_empty() {
        return Ok(());
    }

    // --- Analytical gradients ---
    let graph = Graph::new();
    let leaves: Vec<Node> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output
        .backward()
        .map_err(GradCheckError::BackwardPassError)?;
    let analytical_grads: Vec<f64> = leaves.iter().map(|leaf| leaf.grad()).collect();

    for (i, &analytical_grad) in analytical_grads.iter().enumerate() {
        let loss_plus = evaluate(&func, inputs, i, config.epsilon)?;
        let loss_minus = evaluate(&func, inputs, i, -config.epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * config.epsilon);
        debug!(
            "check_grad: input {} analytical={} numerical={}",
            i, analytical_grad, numerical_grad
        );

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > config.tolerance
            && difference / (analytical_grad.abs() + config.epsilon) > config.tolerance
        {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}

/// Forward value of `func` with input `index` shifted by `delta`, in a fresh graph.
fn evaluate<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> Result<f64, GradCheckError>
where
    F: for<'g> Fn(&[Node<'g>]) -> Result<Node<'g>, NeuroGradError>,
{
    let graph = Graph::new();
    let leaves: Vec<Node> = inputs
        .iter()
        .enumerate()
        .map(|(j, &x)| graph.leaf(if j == index { x + delta } else { x }))
        .collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok(output.value())
}
