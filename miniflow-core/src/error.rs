//! Graph Errors
//!
//! Every fallible operation in the crate returns [`Result`]. Errors are local
//! to the call that produced them; nothing is retried or rolled back.

use thiserror::Error;

use crate::graph::{NodeId, NodeKind};

/// Crate result type.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised while building, scheduling, or running a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// `forward()` was invoked on a node with no computation of its own.
    #[error("forward() is not implemented for {node}")]
    NotImplemented { node: NodeId },

    /// A feed mapping or direct assignment targeted a node that is not an input.
    #[error("invalid feed target: {node} is a {kind:?} node, not an input")]
    InvalidFeedTarget { node: NodeId, kind: NodeKind },

    /// Scheduling finished with nodes whose incoming edges were never consumed.
    #[error("cycle detected: {} node(s) never became ready: {unresolved:?}", .unresolved.len())]
    CycleDetected { unresolved: Vec<NodeId> },

    /// A value was read before anything computed or assigned it.
    #[error("unresolved value: {node} has not been computed")]
    UnresolvedValue { node: NodeId },

    /// The id does not belong to this graph's arena.
    #[error("unknown node: {node}")]
    UnknownNode { node: NodeId },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_message_counts_unresolved_nodes() {
        let err = GraphError::CycleDetected {
            unresolved: vec![NodeId::from(3), NodeId::from(4)],
        };
        let message = err.to_string();
        assert!(message.starts_with("cycle detected: 2 node(s)"));
    }

    #[test]
    fn invalid_feed_target_names_the_kind() {
        let err = GraphError::InvalidFeedTarget {
            node: NodeId::from(1),
            kind: NodeKind::Add,
        };
        assert_eq!(
            err.to_string(),
            "invalid feed target: node#1 is a Add node, not an input"
        );
    }
}
