// microgradient-core/src/ops/arithmetic/sub.rs

use crate::error::MicroGradError;
use crate::operand::Operand;
use crate::ops::arithmetic::{add_nodes, neg_op};
use crate::value::Value;

/// Subtracts two scalars, defined as `a + (-b)`.
///
/// No dedicated backward rule: gradients follow from the addition and
/// negation nodes this creates.
///
/// # Errors
/// Returns `MicroGradError::GraphMismatch` if `b` is a node of another graph.
pub fn sub_op<'g>(a: Value<'g>, b: impl Into<Operand<'g>>) -> Result<Value<'g>, MicroGradError> {
    let b = b.into().promote(a.graph, "sub_op")?;
    Ok(add_nodes(a, neg_op(b)))
}

/// `constant - a`, built as `(-a) + constant`.
pub(crate) fn rsub_constant(constant: f64, a: Value<'_>) -> Value<'_> {
    let negated = neg_op(a);
    let constant = a.graph.leaf(constant);
    add_nodes(negated, constant)
}

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
