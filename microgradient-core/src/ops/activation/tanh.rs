use crate::autograd::Op;
use crate::value::Value;

/// Applies the hyperbolic tangent
/// \( t = \frac{e^{2a} - 1}{e^{2a} + 1} \).
///
/// The forward value uses `f64::tanh`, which equals the formula above but
/// saturates to `±1` instead of producing `NaN` once \( e^{2a} \) overflows.
/// The backward pass sends \( (1 - t^2) \cdot \frac{dL}{dt} \) to `a`.
pub fn tanh_op(a: Value<'_>) -> Value<'_> {
    crate::ops::apply_unary_op(a, f64::tanh, Op::Tanh, "tanh_op")
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
