use crate::autograd::Graph;
use crate::error::NeuroGradError;
use crate::nn::layers::neuron::{Activation, BoundNeuron, Neuron};
use crate::nn::module::Module;
use crate::node::Node;
use rand::Rng;

/// A fully connected layer: `n_outputs` neurons reading the same `n_inputs` inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a layer with randomly initialized neurons (thread-local RNG).
    pub fn new(n_inputs: usize, n_outputs: usize, activation: Activation) -> Self {
        Self::with_rng(n_inputs, n_outputs, activation, &mut rand::thread_rng())
    }

    /// Creates a layer drawing every neuron's weights from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        n_inputs: usize,
        n_outputs: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..n_outputs)
            .map(|_| Neuron::with_rng(n_inputs, activation, rng))
            .collect();
        Layer { neurons }
    }

    /// Builds a layer from existing neurons.
    ///
    /// # Errors
    /// `LengthMismatch` if the neurons do not all expect the same number of inputs.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, NeuroGradError> {
        if let Some(first) = neurons.first() {
            let expected = first.n_inputs();
            if let Some(other) = neurons.iter().find(|n| n.n_inputs() != expected) {
                return Err(NeuroGradError::LengthMismatch {
                    expected,
                    actual: other.n_inputs(),
                    operation: "Layer::from_neurons".to_string(),
                });
            }
        }
        Ok(Layer { neurons })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Places every neuron's parameters into `graph` as leaves.
    pub fn bind<'g>(&self, graph: &'g Graph) -> BoundLayer<'g> {
        BoundLayer {
            neurons: self.neurons.iter().map(|n| n.bind(graph)).collect(),
        }
    }
}

impl Module for Layer {
    /// Parameters of each neuron, neuron after neuron.
    fn parameters(&self) -> Vec<f64> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn set_parameters(&mut self, values: &[f64]) -> Result<(), NeuroGradError> {
        let expected = self.num_parameters();
        if values.len() != expected {
            return Err(NeuroGradError::LengthMismatch {
                expected,
                actual: values.len(),
                operation: "Layer::set_parameters".to_string(),
            });
        }
        let mut offset = 0;
        for neuron in &mut self.neurons {
            let count = neuron.num_parameters();
            neuron.set_parameters(&values[offset..offset + count])?;
            offset += count;
        }
        Ok(())
    }

    fn num_parameters(&self) -> usize {
        self.neurons.iter().map(|n| n.num_parameters()).sum()
    }
}

/// A [`Layer`] whose parameters are leaves of one graph.
#[derive(Debug, Clone)]
pub struct BoundLayer<'g> {
    neurons: Vec<BoundNeuron<'g>>,
}

impl<'g> BoundLayer<'g> {
    /// Returns one output node per neuron.
    pub fn forward(&self, inputs: &[Node<'g>]) -> Result<Vec<Node<'g>>, NeuroGradError> {
        self.neurons.iter().map(|n| n.forward(inputs)).collect()
    }

    /// Parameter leaves in [`Module::parameters`] order.
    pub fn parameters(&self) -> Vec<Node<'g>> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    /// Current gradients of the parameter leaves, in [`Module::parameters`] order.
    pub fn gradients(&self) -> Vec<f64> {
        self.parameters().iter().map(|p| p.grad()).collect()
    }
}
