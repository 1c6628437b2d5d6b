// src/value/traits.rs

use crate::operand::Operand;
use crate::ops::arithmetic::{
    add_nodes, mul_nodes, neg_op, pow_node, rdiv_constant, rsub_constant,
};
use crate::value::Value;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

// --- Formatting ---

impl Display for Value<'_> {
    /// Formats as `Value(data=.., grad=..)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={:?}, grad={:?})", self.value(), self.grad())
    }
}

impl Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("id", &self.id)
            .field("data", &self.value())
            .field("grad", &self.grad())
            .field("op", &self.op_tag().to_string())
            .field("label", &self.label())
            .finish()
    }
}

// --- Identity ---

impl PartialEq for Value<'_> {
    /// Two handles are equal when they designate the same node of the same
    /// graph, regardless of the numbers stored.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl Eq for Value<'_> {}

impl Hash for Value<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.graph, state);
        self.id.hash(state);
    }
}

// --- Operators ---
//
// Operators cannot return `Result`. Mixing nodes of two different graphs is a
// programming error here and panics; use the named `ops::*_op` functions to
// get `MicroGradError::GraphMismatch` instead.

fn same_graph<'g>(lhs: Value<'g>, rhs: Value<'g>, operation: &str) -> Value<'g> {
    match Operand::from(rhs).promote(lhs.graph, operation) {
        Ok(rhs) => rhs,
        Err(err) => panic!("{}", err),
    }
}

impl<'g> Add for Value<'g> {
    type Output = Value<'g>;

    fn add(self, rhs: Value<'g>) -> Value<'g> {
        add_nodes(self, same_graph(self, rhs, "add"))
    }
}

impl<'g> Mul for Value<'g> {
    type Output = Value<'g>;

    fn mul(self, rhs: Value<'g>) -> Value<'g> {
        mul_nodes(self, same_graph(self, rhs, "mul"))
    }
}

impl<'g> Sub for Value<'g> {
    type Output = Value<'g>;

    fn sub(self, rhs: Value<'g>) -> Value<'g> {
        add_nodes(self, neg_op(same_graph(self, rhs, "sub")))
    }
}

impl<'g> Div for Value<'g> {
    type Output = Value<'g>;

    fn div(self, rhs: Value<'g>) -> Value<'g> {
        mul_nodes(self, pow_node(same_graph(self, rhs, "div"), -1.0))
    }
}

impl<'g> Neg for Value<'g> {
    type Output = Value<'g>;

    fn neg(self) -> Value<'g> {
        neg_op(self)
    }
}

/// `Value ∘ constant` and `constant ∘ Value` for a primitive numeric type.
///
/// The constant becomes a fresh leaf. Reversed forms are rewritten so that
/// they build the same graph shape as the node-first form:
/// `c + a` is `a + c`, `c * a` is `a * c`, `c - a` is `(-a) + c` and
/// `c / a` is `a**-1 * c`.
macro_rules! impl_constant_ops {
    ($($t:ty),*) => {
        $(
            impl<'g> Add<$t> for Value<'g> {
                type Output = Value<'g>;

                fn add(self, rhs: $t) -> Value<'g> {
                    add_nodes(self, self.graph.leaf(rhs as f64))
                }
            }

            impl<'g> Mul<$t> for Value<'g> {
                type Output = Value<'g>;

                fn mul(self, rhs: $t) -> Value<'g> {
                    mul_nodes(self, self.graph.leaf(rhs as f64))
                }
            }

            impl<'g> Sub<$t> for Value<'g> {
                type Output = Value<'g>;

                fn sub(self, rhs: $t) -> Value<'g> {
                    add_nodes(self, neg_op(self.graph.leaf(rhs as f64)))
                }
            }

            impl<'g> Div<$t> for Value<'g> {
                type Output = Value<'g>;

                fn div(self, rhs: $t) -> Value<'g> {
                    mul_nodes(self, pow_node(self.graph.leaf(rhs as f64), -1.0))
                }
            }

            impl<'g> Add<Value<'g>> for $t {
                type Output = Value<'g>;

                fn add(self, rhs: Value<'g>) -> Value<'g> {
                    rhs + self
                }
            }

            impl<'g> Mul<Value<'g>> for $t {
                type Output = Value<'g>;

                fn mul(self, rhs: Value<'g>) -> Value<'g> {
                    rhs * self
                }
            }

            impl<'g> Sub<Value<'g>> for $t {
                type Output = Value<'g>;

                fn sub(self, rhs: Value<'g>) -> Value<'g> {
                    rsub_constant(self as f64, rhs)
                }
            }

            impl<'g> Div<Value<'g>> for $t {
                type Output = Value<'g>;

                fn div(self, rhs: Value<'g>) -> Value<'g> {
                    rdiv_constant(self as f64, rhs)
                }
            }
        )*
    };
}

impl_constant_ops!(f64, i32);

#[cfg(test)]
mod tests {
    use crate::error::MicroGradError;
    use crate::graph::Graph;
    use crate::node::OpTag;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    #[test]
    fn test_display() -> Result<(), MicroGradError> {
        let graph = Graph::new();
        let a = graph.leaf(2.0);
        let b = a * -3.0;
        assert_eq!(b.to_string(), "Value(data=-6.0, grad=0.0)");
        b.backward()?;
        assert_eq!(a.to_string(), "Value(data=2.0, grad=-3.0)");
        Ok(())
    }

    #[test]
    fn test_identity_not_value_equality() {
        let graph = Graph::new();
        let a = graph.leaf(1.0);
        let b = graph.leaf(1.0);
        assert_ne!(a, b);
        assert_eq!(a, graph.get(a.id()).unwrap());

        let set: HashSet<_> = [a, b, a].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_commuted_constant_forms_match() -> Result<(), MicroGradError> {
        let graph = Graph::new();
        let a = graph.leaf(3.0);

        let pairs = [
            (a + 2.0, 2.0_f64 + a),
            (a * 2.0, 2.0_f64 * a),
            (a + 2_i32, 2_i32 + a),
            (a * 4_i32, 4_i32 * a),
        ];
        for (node_first, constant_first) in pairs {
            assert_eq!(node_first.value(), constant_first.value());
            graph.zero_grad();
            node_first.backward()?;
            let expected = a.grad();
            graph.zero_grad();
            constant_first.backward()?;
            assert_eq!(a.grad(), expected);
        }
        Ok(())
    }

    #[test]
    fn test_reversed_sub_and_div() -> Result<(), MicroGradError> {
        let graph = Graph::new();
        let a = graph.leaf(4.0);

        let c = 10.0_f64 - a;
        assert_eq!(c.value(), 6.0);
        c.backward()?;
        assert_eq!(a.grad(), -1.0);

        graph.zero_grad();
        let d = 2_i32 / a;
        assert_relative_eq!(d.value(), 0.5, epsilon = 1e-12);
        d.backward()?;
        assert_relative_eq!(a.grad(), -0.125, epsilon = 1e-12);

        let e = a - 1_i32;
        assert_eq!(e.value(), 3.0);
        let f = a / 8.0;
        assert_relative_eq!(f.value(), 0.5, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_node_operators() -> Result<(), MicroGradError> {
        let graph = Graph::new();
        let a = graph.leaf(6.0);
        let b = graph.leaf(2.0);

        assert_eq!((a - b).value(), 4.0);
        assert_relative_eq!((a / b).value(), 3.0, epsilon = 1e-12);
        let n = -a;
        assert_eq!(n.value(), -6.0);
        assert_eq!(n.op_tag(), OpTag::Mul);
        Ok(())
    }

    #[test]
    fn test_methods() -> Result<(), MicroGradError> {
        let graph = Graph::new();
        let a = graph.leaf(-0.5);
        assert_eq!(a.relu().value(), 0.0);
        assert_relative_eq!(a.tanh().value(), (-0.5_f64).tanh(), epsilon = 1e-12);
        assert_relative_eq!(a.exp().value(), (-0.5_f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(a.pow(2)?.value(), 0.25, epsilon = 1e-12);
        assert!(a.pow(a).is_err());
        Ok(())
    }

    #[test]
    #[should_panic(expected = "belong to different graphs")]
    fn test_operator_graph_mismatch_panics() {
        let g1 = Graph::new();
        let g2 = Graph::new();
        let _ = g1.leaf(1.0) + g2.leaf(2.0);
    }
}
