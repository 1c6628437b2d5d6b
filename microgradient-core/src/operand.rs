// src/operand.rs

use crate::error::MicroGradError;
use crate::graph::Graph;
use crate::value::Value;
use num_traits::AsPrimitive;

/// Right-hand side of an operation: an existing node or a plain number.
///
/// Every binary entry point in [`crate::ops`] takes `impl Into<Operand>`, so
/// callers can pass a [`Value`] or any primitive numeric constant. Constants
/// are promoted into fresh leaf nodes before the result is built.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'g> {
    Node(Value<'g>),
    Constant(f64),
}

impl<'g> Operand<'g> {
    /// Resolves the operand to a node of `graph`, creating a leaf for constants.
    ///
    /// # Errors
    /// Returns `MicroGradError::GraphMismatch` if a node from another graph is given.
    pub(crate) fn promote(
        self,
        graph: &'g Graph,
        operation: &str,
    ) -> Result<Value<'g>, MicroGradError> {
        match self {
            Operand::Node(value) if graph.owns(&value) => Ok(value),
            Operand::Node(_) => Err(MicroGradError::graph_mismatch(operation)),
            Operand::Constant(constant) => Ok(graph.leaf(constant)),
        }
    }
}

impl<'g> From<Value<'g>> for Operand<'g> {
    fn from(value: Value<'g>) -> Self {
        Operand::Node(value)
    }
}

impl<'g> From<&Value<'g>> for Operand<'g> {
    fn from(value: &Value<'g>) -> Self {
        Operand::Node(*value)
    }
}

macro_rules! impl_operand_from_primitive {
    ($($t:ty),*) => {
        $(
            impl<'g> From<$t> for Operand<'g> {
                fn from(constant: $t) -> Self {
                    Operand::Constant(constant.as_())
                }
            }
        )*
    };
}

impl_operand_from_primitive!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
