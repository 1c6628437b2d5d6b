// microgradient-core/src/ops/math_elem/exp.rs

use crate::autograd::Op;
use crate::value::Value;

/// Computes the exponential \( z = e^{a} \).
///
/// Since \( \frac{dz}{da} = e^{a} = z \), the backward pass reuses the stored
/// output value: `a` receives \( z \cdot \frac{dL}{dz} \).
///
/// # Overflow
/// Inputs above roughly 709.78 overflow to `f64::INFINITY`; a warning is logged.
pub fn exp_op(a: Value<'_>) -> Value<'_> {
    crate::ops::apply_unary_op(a, f64::exp, Op::Exp, "exp_op")
}

// --- Tests ---
#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
