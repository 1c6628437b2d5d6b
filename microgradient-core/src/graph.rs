// src/graph.rs

use crate::autograd::Op;
use crate::error::MicroGradError;
use crate::node::{NodeData, NodeId};
use crate::value::Value;
use log::debug;
use std::cell::{Ref, RefCell, RefMut};

/// Arena owning every node of one computation graph.
///
/// `Graph` hands out [`Value`] handles that borrow it, so nodes live exactly as
/// long as the graph does and can be shared by any number of consumers.
/// Nodes are only ever appended, which keeps every id stable and guarantees
/// that operands precede the nodes built from them.
///
/// The arena uses `RefCell` for interior mutability: forward construction and
/// backward passes are single-threaded and run to completion, and `Graph` is
/// deliberately not `Sync`.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: RefCell<Vec<NodeData>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a leaf node holding `value`, with zero gradient and no operands.
    pub fn leaf(&self, value: f64) -> Value<'_> {
        self.push(NodeData::new(value, Op::Leaf))
    }

    /// Creates a leaf node with a display label.
    ///
    /// The label is only used for diagnostics.
    pub fn leaf_with_label(&self, value: f64, label: impl Into<String>) -> Value<'_> {
        let mut data = NodeData::new(value, Op::Leaf);
        data.label = Some(label.into());
        self.push(data)
    }

    /// Number of nodes in the arena, including promoted constants.
    pub fn len(&self) -> usize {
        self.read_nodes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_nodes().is_empty()
    }

    /// Looks up a node by id.
    ///
    /// # Errors
    /// Returns `MicroGradError::NodeNotFound` if `id` was not issued by this graph.
    pub fn get(&self, id: NodeId) -> Result<Value<'_>, MicroGradError> {
        let len = self.len();
        if id.0 >= len {
            return Err(MicroGradError::NodeNotFound { id, len });
        }
        Ok(Value { graph: self, id })
    }

    /// Handles to every node, in creation order.
    pub fn values(&self) -> Vec<Value<'_>> {
        (0..self.len())
            .map(|i| Value { graph: self, id: NodeId(i) })
            .collect()
    }

    /// Resets the gradient of every node to `0.0`.
    ///
    /// `backward()` accumulates onto existing gradients, so call this between
    /// passes when a fresh result is wanted.
    pub fn zero_grad(&self) {
        let mut nodes = self.write_nodes();
        debug!("Graph::zero_grad: resetting {} nodes", nodes.len());
        for node in nodes.iter_mut() {
            node.grad = 0.0;
        }
    }

    /// Appends a node and returns its handle.
    pub(crate) fn push(&self, data: NodeData) -> Value<'_> {
        let mut nodes = self.write_nodes();
        let id = NodeId(nodes.len());
        nodes.push(data);
        Value { graph: self, id }
    }

    pub(crate) fn read_nodes(&self) -> Ref<'_, Vec<NodeData>> {
        self.nodes.borrow()
    }

    pub(crate) fn write_nodes(&self) -> RefMut<'_, Vec<NodeData>> {
        self.nodes.borrow_mut()
    }

    /// True if `value` is a handle into this arena.
    pub(crate) fn owns(&self, value: &Value<'_>) -> bool {
        std::ptr::eq(self, value.graph)
    }
}
