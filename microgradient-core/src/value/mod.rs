// src/value/mod.rs

use crate::autograd::BackwardOp;
use crate::error::MicroGradError;
use crate::graph::Graph;
use crate::node::{NodeId, OpTag};
use crate::operand::Operand;
use crate::ops;

mod autograd_methods;
mod traits;

pub use autograd_methods::GraphTrace;

/// Handle onto one scalar node of a [`Graph`].
///
/// `Value` is `Copy`: it is just the arena reference plus the node id, so
/// handing it to several operations shares the same node (diamond
/// dependencies are the normal case). Equality and hashing use node identity,
/// never the stored number.
///
/// Arithmetic is available through the usual operators (`+ - * /` and unary
/// `-`), mixing `Value`s with plain numbers, or through the named functions in
/// [`crate::ops`].
#[derive(Clone, Copy)]
pub struct Value<'g> {
    pub(crate) graph: &'g Graph,
    pub(crate) id: NodeId,
}

impl<'g> Value<'g> {
    /// Identity of this node within its graph.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The arena this node lives in.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Forward-computed value.
    pub fn value(&self) -> f64 {
        self.graph.read_nodes()[self.id.0].value
    }

    /// Accumulated gradient of the last backward root with respect to this node.
    pub fn grad(&self) -> f64 {
        self.graph.read_nodes()[self.id.0].grad
    }

    /// Label of the operation that produced this node.
    pub fn op_tag(&self) -> OpTag {
        self.graph.read_nodes()[self.id.0].op.tag()
    }

    pub fn is_leaf(&self) -> bool {
        self.op_tag().is_leaf()
    }

    /// Free-text annotation, if any.
    pub fn label(&self) -> Option<String> {
        self.graph.read_nodes()[self.id.0].label.clone()
    }

    /// Sets the free-text annotation. Has no effect on computation.
    pub fn set_label(&self, label: impl Into<String>) {
        self.graph.write_nodes()[self.id.0].label = Some(label.into());
    }

    /// Nodes consumed to produce this one, without duplicates.
    ///
    /// `a + a` reports `a` once. Leaves have no operands.
    pub fn operands(&self) -> Vec<Value<'g>> {
        let inputs = self.graph.read_nodes()[self.id.0].op.inputs();
        let mut unique: Vec<NodeId> = Vec::with_capacity(inputs.len());
        for id in inputs {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        unique
            .into_iter()
            .map(|id| Value { graph: self.graph, id })
            .collect()
    }
}

impl<'g> Value<'g> {
    /// `self ** exponent` for a numeric constant exponent.
    ///
    /// # Errors
    /// Returns `MicroGradError::InvalidArgument` if `exponent` is a node or
    /// not finite.
    pub fn pow(self, exponent: impl Into<Operand<'g>>) -> Result<Value<'g>, MicroGradError> {
        ops::pow_op(self, exponent)
    }

    /// `e ** self`.
    pub fn exp(self) -> Value<'g> {
        ops::exp_op(self)
    }

    /// Hyperbolic tangent of `self`.
    pub fn tanh(self) -> Value<'g> {
        ops::tanh_op(self)
    }

    /// Rectified linear unit of `self`.
    pub fn relu(self) -> Value<'g> {
        ops::relu_op(self)
    }
}
