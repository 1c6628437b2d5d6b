// microgradient-core/src/ops/arithmetic/add.rs

use crate::autograd::Op;
use crate::error::MicroGradError;
use crate::operand::Operand;
use crate::value::Value;

/// Adds two scalars: \( z = a + b \).
///
/// `b` may be another node or a numeric constant, which is promoted into a
/// leaf. The backward pass forwards the output gradient unchanged to both
/// operands.
///
/// # Errors
/// Returns `MicroGradError::GraphMismatch` if `b` is a node of another graph.
pub fn add_op<'g>(a: Value<'g>, b: impl Into<Operand<'g>>) -> Result<Value<'g>, MicroGradError> {
    let b = b.into().promote(a.graph, "add_op")?;
    Ok(add_nodes(a, b))
}

pub(crate) fn add_nodes<'g>(a: Value<'g>, b: Value<'g>) -> Value<'g> {
    crate::ops::apply_binary_op(a, b, |x, y| x + y, Op::Add, "add_op")
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
