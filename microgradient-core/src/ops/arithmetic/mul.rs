// microgradient-core/src/ops/arithmetic/mul.rs

use crate::autograd::Op;
use crate::error::MicroGradError;
use crate::operand::Operand;
use crate::value::Value;

/// Multiplies two scalars: \( z = a \cdot b \).
///
/// The backward pass sends \( b \cdot \frac{dL}{dz} \) to `a` and
/// \( a \cdot \frac{dL}{dz} \) to `b`, using the forward values.
///
/// # Errors
/// Returns `MicroGradError::GraphMismatch` if `b` is a node of another graph.
pub fn mul_op<'g>(a: Value<'g>, b: impl Into<Operand<'g>>) -> Result<Value<'g>, MicroGradError> {
    let b = b.into().promote(a.graph, "mul_op")?;
    Ok(mul_nodes(a, b))
}

pub(crate) fn mul_nodes<'g>(a: Value<'g>, b: Value<'g>) -> Value<'g> {
    crate::ops::apply_binary_op(a, b, |x, y| x * y, Op::Mul, "mul_op")
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
