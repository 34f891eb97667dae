use crate::error::NeuroGradError;
use crate::nn::module::Module;
use log::debug;

/// Implements plain Stochastic Gradient Descent with optional weight decay.
///
/// Each step applies \( p \leftarrow p - lr \cdot (g + wd \cdot p) \).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    learning_rate: f64,
    weight_decay: f64,
}

impl Sgd {
    /// Creates an optimizer with the given learning rate and no weight decay.
    pub fn new(learning_rate: f64) -> Self {
        Sgd {
            learning_rate,
            weight_decay: 0.0,
        }
    }

    /// Sets the weight decay (L2 penalty) factor.
    pub fn with_weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn weight_decay(&self) -> f64 {
        self.weight_decay
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        self.learning_rate = learning_rate;
    }

    /// Updates every parameter of `module` from `grads`.
    ///
    /// `grads` must follow the order of [`Module::parameters`]; the bound model's
    /// `gradients()` returns them in that order.
    ///
    /// # Errors
    /// `LengthMismatch` if `grads.len()` differs from the module's parameter count.
    /// The module is left untouched in that case.
    pub fn step<M: Module + ?Sized>(&self, module: &mut M, grads: &[f64]) -> Result<(), NeuroGradError> {
        let params = module.parameters();
        if params.len() != grads.len() {
            return Err(NeuroGradError::LengthMismatch {
                expected: params.len(),
                actual: grads.len(),
                operation: "Sgd::step".to_string(),
            });
        }
        debug!(
            "Sgd: step() on {} parameters, lr = {}, weight_decay = {}",
            params.len(),
            self.learning_rate,
            self.weight_decay
        );
        let updated: Vec<f64> = params
            .iter()
            .zip(grads)
            .map(|(&p, &g)| p - self.learning_rate * (g + self.weight_decay * p))
            .collect();
        module.set_parameters(&updated)
    }
}
