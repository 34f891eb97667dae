use thiserror::Error;

/// Custom error type for the NeuroGrad framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum NeuroGradError {
    #[error("Operation {operation} received nodes from different graphs")]
    GraphMismatch { operation: String },

    #[error("Index out of bounds: index {index} for a list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Node {id} does not exist in a graph of {len} nodes")]
    NodeNotFound { id: usize, len: usize },

    #[error("Backward rule of {operation} returned {actual} gradients, but the node has {expected} parents")]
    BackwardArity {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Operation {operation} requires a non-empty list of nodes")]
    EmptyNodeList { operation: String },

    #[error("Length mismatch: expected {expected}, got {actual} during operation {operation}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },
}
