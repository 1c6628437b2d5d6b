//! # Automatic Differentiation
//!
//! Reverse-mode differentiation over the scalar graph held by a
//! [`Graph`](crate::graph::Graph):
//!
//! - [`backward_op`]: the [`Op`] variant stored in every node and the
//!   [`BackwardOp`] trait computing its local gradient contributions.
//! - `graph`: topological ordering and tracing of the nodes reachable from a root.
//! - [`grad_check`]: finite-difference verification of analytic gradients.
//!
//! The backward driver itself is [`Value::backward`](crate::value::Value::backward).

pub mod backward_op;
pub mod grad_check;
pub(crate) mod graph;

pub use backward_op::{BackwardOp, Op};
pub use grad_check::{check_grad, GradCheckConfig, GradCheckError};
