use crate::autograd::Graph;
use crate::error::NeuroGradError;
use crate::nn::module::Module;
use crate::node::Node;
use crate::ops::arithmetic::{add_op, mul_op};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Non-linearity applied to a neuron's pre-activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// No non-linearity (linear unit).
    #[default]
    Identity,
    Relu,
    Tanh,
    Sigmoid,
}

impl Activation {
    /// Applies the activation to `x`, adding the corresponding nodes to its graph.
    pub fn apply<'g>(self, x: &Node<'g>) -> Result<Node<'g>, NeuroGradError> {
        match self {
            Activation::Identity => Ok(*x),
            Activation::Relu => x.relu(),
            Activation::Tanh => x.tanh(),
            Activation::Sigmoid => x.sigmoid(),
        }
    }
}

/// A single perceptron: `activation(Σ w_i·x_i + b)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights: Vec<f64>,
    bias: f64,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with random weights, using the thread-local RNG.
    ///
    /// See [`with_rng`](Self::with_rng) for the initialization scheme.
    pub fn new(n_inputs: usize, activation: Activation) -> Self {
        Self::with_rng(n_inputs, activation, &mut rand::thread_rng())
    }

    /// Creates a neuron with weights drawn from a standard normal distribution
    /// scaled by `1/sqrt(n_inputs)`, and a zero bias.
    pub fn with_rng<R: Rng + ?Sized>(n_inputs: usize, activation: Activation, rng: &mut R) -> Self {
        let scale = 1.0 / (n_inputs.max(1) as f64).sqrt();
        let weights = (0..n_inputs)
            .map(|_| {
                let sample: f64 = StandardNormal.sample(rng);
                sample * scale
            })
            .collect();
        Neuron {
            weights,
            bias: 0.0,
            activation,
        }
    }

    /// Creates a neuron from explicit parameter values.
    pub fn from_parameters(weights: Vec<f64>, bias: f64, activation: Activation) -> Self {
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Number of inputs the neuron expects.
    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    /// Places the current parameter values into `graph` as leaves.
    pub fn bind<'g>(&self, graph: &'g Graph) -> BoundNeuron<'g> {
        BoundNeuron {
            weights: self.weights.iter().map(|&w| graph.leaf(w)).collect(),
            bias: graph.leaf(self.bias),
            activation: self.activation,
        }
    }
}

impl Module for Neuron {
    /// Weights in input order, then the bias.
    fn parameters(&self) -> Vec<f64> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn set_parameters(&mut self, values: &[f64]) -> Result<(), NeuroGradError> {
        let expected = self.num_parameters();
        if values.len() != expected {
            return Err(NeuroGradError::LengthMismatch {
                expected,
                actual: values.len(),
                operation: "Neuron::set_parameters".to_string(),
            });
        }
        let (weights, bias) = values.split_at(self.weights.len());
        self.weights.copy_from_slice(weights);
        self.bias = bias[0];
        Ok(())
    }

    fn num_parameters(&self) -> usize {
        self.weights.len() + 1
    }
}

/// A [`Neuron`] whose parameters are leaves of one graph.
#[derive(Debug, Clone)]
pub struct BoundNeuron<'g> {
    weights: Vec<Node<'g>>,
    bias: Node<'g>,
    activation: Activation,
}

impl<'g> BoundNeuron<'g> {
    /// Computes `activation(Σ w_i·x_i + b)`.
    ///
    /// The sum starts from the bias node and adds each product in input order.
    ///
    /// # Errors
    /// * `LengthMismatch` if `inputs.len()` differs from the number of weights.
    /// * `GraphMismatch` if an input belongs to another graph.
    pub fn forward(&self, inputs: &[Node<'g>]) -> Result<Node<'g>, NeuroGradError> {
        if inputs.len() != self.weights.len() {
            return Err(NeuroGradError::LengthMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "BoundNeuron::forward".to_string(),
            });
        }
        let mut pre_activation = self.bias;
        for (w, x) in self.weights.iter().zip(inputs) {
            pre_activation = add_op(&pre_activation, &mul_op(w, x)?)?;
        }
        self.activation.apply(&pre_activation)
    }

    /// Parameter leaves in [`Module::parameters`] order (weights, then bias).
    pub fn parameters(&self) -> Vec<Node<'g>> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    /// Current gradients of the parameter leaves, in [`Module::parameters`] order.
    pub fn gradients(&self) -> Vec<f64> {
        self.parameters().iter().map(|p| p.grad()).collect()
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
