//! # microgradient-core
//!
//! Scalar reverse-mode automatic differentiation.
//!
//! A [`Graph`] is an arena of scalar nodes. Leaves are created with
//! [`Graph::leaf`]; every arithmetic or activation applied to a [`Value`]
//! handle appends a new node that remembers its operands and the local
//! derivative rule of the operation. [`Value::backward`] then fills in the
//! gradient of that value with respect to everything upstream.
//!
//! ```
//! use microgradient_core::Graph;
//!
//! let graph = Graph::new();
//! let a = graph.leaf(2.0);
//! let b = graph.leaf(-3.0);
//! let c = graph.leaf(10.0);
//! let d = a * b + c;
//! assert_eq!(d.value(), 4.0);
//!
//! d.backward().unwrap();
//! assert_eq!(a.grad(), -3.0);
//! assert_eq!(b.grad(), 2.0);
//! assert_eq!(c.grad(), 1.0);
//! ```

// Main modules of the crate
pub mod autograd;
pub mod error;
pub mod graph;
pub mod node;
pub mod operand;
pub mod ops;
pub mod utils;
pub mod value;

// Re-export the core types so they are reachable as `microgradient_core::Value` etc.
pub use error::MicroGradError;
pub use graph::Graph;
pub use node::{NodeId, OpTag};
pub use operand::Operand;
pub use value::{GraphTrace, Value};
