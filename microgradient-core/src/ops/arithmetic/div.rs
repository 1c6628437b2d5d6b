// microgradient-core/src/ops/arithmetic/div.rs

use crate::error::MicroGradError;
use crate::operand::Operand;
use crate::ops::arithmetic::{mul_nodes, pow_node};
use crate::value::Value;

/// Divides two scalars, defined as `a * b**-1`.
///
/// Gradients follow from the multiplication and power nodes this creates:
/// \( \frac{\partial z}{\partial a} = b^{-1} \) and
/// \( \frac{\partial z}{\partial b} = -a \cdot b^{-2} \).
/// Division by a zero-valued node yields an infinite forward value, as IEEE
/// arithmetic does; it is not an error.
///
/// # Errors
/// Returns `MicroGradError::GraphMismatch` if `b` is a node of another graph.
pub fn div_op<'g>(a: Value<'g>, b: impl Into<Operand<'g>>) -> Result<Value<'g>, MicroGradError> {
    let b = b.into().promote(a.graph, "div_op")?;
    Ok(mul_nodes(a, pow_node(b, -1.0)))
}

/// `constant / a`, built as `a**-1 * constant`.
pub(crate) fn rdiv_constant(constant: f64, a: Value<'_>) -> Value<'_> {
    let reciprocal = pow_node(a, -1.0);
    let constant = a.graph.leaf(constant);
    mul_nodes(reciprocal, constant)
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
