// src/node.rs
use std::fmt;

use crate::autograd::Op;

/// Stable identity of a node inside its [`Graph`](crate::graph::Graph) arena.
///
/// Ids are handed out in creation order, so every operand of a node has a
/// strictly smaller id than the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Arena record for one scalar node.
///
/// `value` and `op` are fixed at construction. Only `grad` changes during a
/// backward pass, and `label` may be edited freely since it carries no
/// semantics.
#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    /// Forward-computed result.
    pub(crate) value: f64,
    /// Accumulated d(root)/d(self).
    pub(crate) grad: f64,
    /// Producing operation, including its operand ids.
    pub(crate) op: Op,
    pub(crate) label: Option<String>,
}

impl NodeData {
    pub(crate) fn new(value: f64, op: Op) -> Self {
        NodeData {
            value,
            grad: 0.0,
            op,
            label: None,
        }
    }
}

/// Diagnostic label of the operation that produced a node.
///
/// Only meant for display and visualization; the engine never branches on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpTag {
    Leaf,
    Add,
    Mul,
    Pow(f64),
    Exp,
    Tanh,
    Relu,
}

impl OpTag {
    pub fn is_leaf(&self) -> bool {
        matches!(self, OpTag::Leaf)
    }
}

impl fmt::Display for OpTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpTag::Leaf => Ok(()),
            OpTag::Add => write!(f, "+"),
            OpTag::Mul => write!(f, "*"),
            OpTag::Pow(exponent) => write!(f, "**{}", exponent),
            OpTag::Exp => write!(f, "exp"),
            OpTag::Tanh => write!(f, "tanh"),
            OpTag::Relu => write!(f, "ReLU"),
        }
    }
}
