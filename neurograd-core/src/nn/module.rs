use crate::error::NeuroGradError;

/// The base trait for trainable models.
///
/// Parameter values live outside any graph as plain `f64`s. A model is bound
/// into a fresh [`Graph`](crate::autograd::Graph) for each forward/backward
/// pass, and an optimizer writes the updated values back with
/// [`set_parameters`](Module::set_parameters). Graph nodes therefore stay
/// single-assignment.
pub trait Module: std::fmt::Debug {
    /// Returns all learnable parameter values in a fixed, module-defined order.
    fn parameters(&self) -> Vec<f64>;

    /// Overwrites all parameters. `values` must follow the order of
    /// [`parameters`](Module::parameters).
    ///
    /// # Errors
    /// `LengthMismatch` if `values.len() != self.num_parameters()`.
    fn set_parameters(&mut self, values: &[f64]) -> Result<(), NeuroGradError>;

    /// Number of learnable parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
