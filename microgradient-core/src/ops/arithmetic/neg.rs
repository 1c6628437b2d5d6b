// microgradient-core/src/ops/arithmetic/neg.rs

use crate::ops::arithmetic::mul_nodes;
use crate::value::Value;

/// Negates a scalar, defined as `a * -1`.
///
/// The `-1` is promoted into a leaf node, so the gradient flows through the
/// multiplication rule.
pub fn neg_op(a: Value<'_>) -> Value<'_> {
    let minus_one = a.graph.leaf(-1.0);
    mul_nodes(a, minus_one)
}
