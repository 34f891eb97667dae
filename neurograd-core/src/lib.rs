//! # NeuroGrad core
//!
//! Scalar reverse-mode automatic differentiation. Every value is a node of a
//! [`Graph`] that remembers the operation that produced it; one call to
//! [`Node::backward`] fills in d(output)/d(node) for every node the output
//! depends on.
//!
//! ```
//! use neurograd_core::{Graph, NeuroGradError};
//!
//! # fn main() -> Result<(), NeuroGradError> {
//! let graph = Graph::new();
//! let x = graph.leaf(2.0);
//! let y = graph.leaf(3.0);
//! let d = x.add(&y)?.mul(&x)?;
//! d.backward()?;
//! assert_eq!(d.value(), 10.0);
//! assert_eq!(x.grad(), 7.0);
//! assert_eq!(y.grad(), 2.0);
//! # Ok(())
//! # }
//! ```

pub mod autograd;
pub mod error;
pub mod nn;
pub mod node;
pub(crate) mod node_data;
pub mod ops;
pub mod optim;

pub use autograd::{Graph, NodeId};
pub use error::NeuroGradError;
pub use node::Node;
