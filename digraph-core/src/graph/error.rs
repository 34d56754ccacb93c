//! Graph Errors
//!
//! Every rejected mutation reports exactly one of these kinds.

use thiserror::Error;

use super::node::NodeIndex;

/// Result alias for graph mutations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Reasons a graph mutation can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The parent given to `add_node` did not exist before the new node.
    ///
    /// The node itself was still appended at `node`; only the parent edge
    /// was skipped.
    #[error("invalid parent {parent} for new node {node}")]
    InvalidParent { parent: NodeIndex, node: NodeIndex },

    /// The node given to `remove_node` does not exist.
    #[error("invalid node {node} (graph has {len} nodes)")]
    InvalidNode { node: NodeIndex, len: usize },

    /// An endpoint is out of range, or the edge to remove does not exist.
    #[error("invalid edge {from} -> {to}")]
    InvalidEdge { from: NodeIndex, to: NodeIndex },
}

impl GraphError {
    /// Index of the node created by a failed `add_node`, if any.
    pub fn node(&self) -> Option<NodeIndex> {
        match self {
            GraphError::InvalidParent { node, .. } => Some(*node),
            _ => None,
        }
    }
}
