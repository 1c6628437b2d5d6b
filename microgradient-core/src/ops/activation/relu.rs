use crate::autograd::Op;
use crate::value::Value;

/// Applies the Rectified Linear Unit: `a` if `a > 0`, otherwise `0`.
///
/// The local derivative is `1` when the output is positive and `0` otherwise,
/// so the gradient at exactly zero is `0`.
pub fn relu_op(a: Value<'_>) -> Value<'_> {
    crate::ops::apply_unary_op(
        a,
        |x| if x > 0.0 { x } else { 0.0 },
        Op::Relu,
        "relu_op",
    )
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
