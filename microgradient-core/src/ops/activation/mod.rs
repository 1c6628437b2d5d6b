//! # Activation Functions
//!
//! Non-linear activations applied to a single scalar.
//!
//! ## Currently Implemented:
//! - [`tanh`](tanh/fn.tanh_op.html): hyperbolic tangent.
//! - [`ReLU`](relu/fn.relu_op.html): Rectified Linear Unit.

pub mod relu;
pub mod tanh;

// Re-export key functions
pub use relu::relu_op;
pub use tanh::tanh_op;
