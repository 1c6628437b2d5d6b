use crate::node::NodeId;
use thiserror::Error;

/// Custom error type for the microgradient engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MicroGradError {
    #[error("Invalid argument for operation {operation}: {message}")]
    InvalidArgument { operation: String, message: String },

    #[error("Operands of {operation} belong to different graphs")]
    GraphMismatch { operation: String },

    #[error("Node {id} not found in a graph of {len} nodes")]
    NodeNotFound { id: NodeId, len: usize },
}

impl MicroGradError {
    pub(crate) fn invalid_argument(operation: &str, message: impl Into<String>) -> Self {
        MicroGradError::InvalidArgument {
            operation: operation.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn graph_mismatch(operation: &str) -> Self {
        MicroGradError::GraphMismatch {
            operation: operation.to_string(),
        }
    }
}
