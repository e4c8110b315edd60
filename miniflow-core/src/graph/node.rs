//! Graph Nodes
//!
//! This module defines the node types that live in the computation graph.

use std::fmt;

use smallvec::SmallVec;

/// Identifier of a node inside a [`Graph`](super::Graph) arena.
///
/// Ids are dense indices handed out in construction order, so a lower id was
/// always created before a higher one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Get the raw arena index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// The kind of node in the computation graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A bare node with predecessors but no computation.
    /// Running it fails with `NotImplemented`.
    Base,

    /// A source node. No predecessors; its value is fed from outside.
    Input,

    /// Sum of exactly two predecessors.
    Add,
}

impl NodeKind {
    /// Whether nodes of this kind take their value from a feed mapping.
    pub fn is_source(&self) -> bool {
        matches!(self, NodeKind::Input)
    }

    /// Number of predecessors the kind requires, or `None` if any count is accepted.
    pub fn arity(&self) -> Option<usize> {
        match self {
            NodeKind::Base => None,
            NodeKind::Input => Some(0),
            NodeKind::Add => Some(2),
        }
    }
}

/// Inbound references. Every built-in operator fits inline.
pub type Inbound = SmallVec<[NodeId; 2]>;

/// A node in the computation graph.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// Position of this node in the arena.
    id: NodeId,

    /// What kind of node this is.
    kind: NodeKind,

    /// Predecessors, in the order given at construction. Never changes.
    inbound: Inbound,

    /// Successors. Grows as later nodes name this one as a predecessor.
    outbound: Vec<NodeId>,

    /// Current value. `None` until computed or assigned.
    value: Option<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(id: NodeId, kind: NodeKind, inbound: Inbound) -> Self {
        Self {
            id,
            kind,
            inbound,
            outbound: Vec::new(),
            value: None,
        }
    }

    /// Get the node's ID.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Get the node's kind.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Predecessors in construction order.
    pub fn inbound(&self) -> &[NodeId] {
        &self.inbound
    }

    /// Successors in the order they were constructed.
    pub fn outbound(&self) -> &[NodeId] {
        &self.outbound
    }

    /// Current value, if any.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Check whether the node holds a value.
    pub fn is_resolved(&self) -> bool {
        self.value.is_some()
    }

    pub(crate) fn add_outbound(&mut self, node_id: NodeId) {
        self.outbound.push(node_id);
    }

    pub(crate) fn set_value(&mut self, value: T) {
        self.value = Some(value);
    }
}
