//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable operation of the engine lives here, grouped by kind.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a public function (`add_op`,
//!   `pow_op`, ...) that computes the forward value, appends the result node to
//!   the graph and records the [`Op`](crate::autograd::Op) variant used later by
//!   the backward pass.
//! - **Operators:** [`Value`](crate::value::Value) implements `+ - * /` and
//!   unary `-` on top of these functions, and the `pow`, `exp`, `tanh` and
//!   `relu` methods.
//! - **Constants:** binary operations accept any
//!   [`Operand`](crate::operand::Operand), so plain numbers are promoted into
//!   leaf nodes at the entry point.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, pow, and the composite neg, sub, div.
//! - [`math_elem`]: exp.
//! - [`activation`]: tanh, relu.

use crate::autograd::Op;
use crate::node::{NodeData, NodeId};
use crate::value::Value;
use log::warn;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::exp_op;

/// Applies a unary operation to a node.
///
/// Computes the forward value, appends the output node and binds the
/// operation built by `backward_builder` from the input id.
///
/// # Arguments
/// * `a`: The input node.
/// * `forward`: Forward function `Fn(f64) -> f64`.
/// * `backward_builder`: Builds the `Op` recorded on the output.
/// * `op_name`: Name of the operation for diagnostics.
pub(crate) fn apply_unary_op<'g, F, B>(
    a: Value<'g>,
    forward: F,
    backward_builder: B,
    op_name: &str,
) -> Value<'g>
where
    F: Fn(f64) -> f64,
    B: FnOnce(NodeId) -> Op,
{
    let input = a.value();
    let output = forward(input);
    if input.is_finite() && !output.is_finite() {
        warn!("{}: input {} produced non-finite result {}", op_name, input, output);
    }
    a.graph.push(NodeData::new(output, backward_builder(a.id)))
}

/// Applies a binary operation to two nodes of the same graph.
///
/// Callers resolve operands through [`Operand`](crate::operand::Operand)
/// first, so both handles are known to share `a`'s arena here.
pub(crate) fn apply_binary_op<'g, F, B>(
    a: Value<'g>,
    b: Value<'g>,
    forward: F,
    backward_builder: B,
    op_name: &str,
) -> Value<'g>
where
    F: Fn(f64, f64) -> f64,
    B: FnOnce(NodeId, NodeId) -> Op,
{
    debug_assert!(a.graph.owns(&b), "{}: operands from different graphs", op_name);
    let (lhs, rhs) = (a.value(), b.value());
    let output = forward(lhs, rhs);
    if lhs.is_finite() && rhs.is_finite() && !output.is_finite() {
        warn!("{}: inputs ({}, {}) produced non-finite result {}", op_name, lhs, rhs, output);
    }
    a.graph.push(NodeData::new(output, backward_builder(a.id, b.id)))
}
