// microgradient-core/src/ops/arithmetic/pow.rs

use crate::autograd::Op;
use crate::error::MicroGradError;
use crate::operand::Operand;
use crate::value::Value;

/// Raises a scalar to a constant power: \( z = a^p \).
///
/// The exponent must be a real numeric constant (any primitive integer or
/// float). Raising a node to the power of another node is not supported.
///
/// The backward pass sends \( p \cdot a^{p-1} \cdot \frac{dL}{dz} \) to `a`.
///
/// # Errors
/// Returns `MicroGradError::InvalidArgument` if `exponent` is a node, or a
/// NaN or infinite constant.
pub fn pow_op<'g>(
    a: Value<'g>,
    exponent: impl Into<Operand<'g>>,
) -> Result<Value<'g>, MicroGradError> {
    let exponent = match exponent.into() {
        Operand::Constant(p) if p.is_finite() => p,
        Operand::Constant(p) => {
            return Err(MicroGradError::invalid_argument(
                "pow_op",
                format!("exponent must be a finite real constant, got {}", p),
            ))
        }
        Operand::Node(node) => {
            return Err(MicroGradError::invalid_argument(
                "pow_op",
                format!(
                    "exponent must be a numeric constant, got node {}",
                    node.id()
                ),
            ))
        }
    };
    Ok(pow_node(a, exponent))
}

pub(crate) fn pow_node(a: Value<'_>, exponent: f64) -> Value<'_> {
    crate::ops::apply_unary_op(
        a,
        |x| x.powf(exponent),
        |base| Op::Pow { base, exponent },
        "pow_op",
    )
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
