//! Node Arena
//!
//! [`Graph`] owns every node. Nodes refer to each other by [`NodeId`], so the
//! bidirectional links (inbound on the successor, outbound on the predecessor)
//! never form ownership cycles.

use std::ops::Add;

use smallvec::smallvec;
use tracing::trace;

use super::node::{Inbound, Node, NodeId, NodeKind};
use crate::error::{GraphError, Result};

/// A computation graph holding values of type `T`.
#[derive(Debug, Clone)]
pub struct Graph<T = f64> {
    /// All nodes, indexed by `NodeId`.
    nodes: Vec<Node<T>>,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create an input node.
    pub fn input(&mut self) -> NodeId {
        let id = NodeId::from(self.nodes.len());
        self.nodes.push(Node::new(id, NodeKind::Input, Inbound::new()));
        trace!(node = %id, "input created");
        id
    }

    /// Create a node computing `x + y`.
    pub fn add(&mut self, x: NodeId, y: NodeId) -> Result<NodeId> {
        self.push(NodeKind::Add, smallvec![x, y])
    }

    /// Create a bare node over `inbound`.
    ///
    /// The node takes part in scheduling like any other, but running it fails
    /// with [`GraphError::NotImplemented`].
    pub fn node(&mut self, inbound: &[NodeId]) -> Result<NodeId> {
        self.push(NodeKind::Base, inbound.iter().copied().collect())
    }

    /// Register a node and mirror each inbound edge on its predecessor.
    fn push(&mut self, kind: NodeKind, inbound: Inbound) -> Result<NodeId> {
        for &pred in &inbound {
            self.get_checked(pred)?;
        }

        let id = NodeId::from(self.nodes.len());
        for &pred in &inbound {
            self.nodes[pred.index()].add_outbound(id);
        }
        trace!(node = %id, ?kind, inbound = ?inbound.as_slice(), "node created");
        self.nodes.push(Node::new(id, kind, inbound));

        Ok(id)
    }

    /// Get a reference to a node.
    pub fn get(&self, node_id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(node_id.index())
    }

    pub(crate) fn get_checked(&self, node_id: NodeId) -> Result<&Node<T>> {
        self.get(node_id).ok_or(GraphError::UnknownNode { node: node_id })
    }

    fn get_checked_mut(&mut self, node_id: NodeId) -> Result<&mut Node<T>> {
        self.nodes
            .get_mut(node_id.index())
            .ok_or(GraphError::UnknownNode { node: node_id })
    }

    /// Check whether the id belongs to this graph.
    pub fn contains(&self, node_id: NodeId) -> bool {
        node_id.index() < self.nodes.len()
    }

    /// Iterate over all nodes in construction order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        self.nodes.iter()
    }

    /// Get the total number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Read a node's current value.
    ///
    /// Fails with [`GraphError::UnresolvedValue`] if nothing has computed or
    /// assigned it yet.
    pub fn value(&self, node_id: NodeId) -> Result<&T> {
        self.get_checked(node_id)?
            .value()
            .ok_or(GraphError::UnresolvedValue { node: node_id })
    }

    /// Assign an input's value directly.
    pub fn set_value(&mut self, node_id: NodeId, value: T) -> Result<()> {
        let node = self.get_checked_mut(node_id)?;
        if !node.kind().is_source() {
            return Err(GraphError::InvalidFeedTarget {
                node: node_id,
                kind: node.kind(),
            });
        }
        node.set_value(value);
        Ok(())
    }

    /// Run an input node, overwriting its value when one is supplied.
    ///
    /// With `None` the stored value is left as is.
    pub fn forward_input(&mut self, node_id: NodeId, value: Option<T>) -> Result<()> {
        match value {
            Some(value) => self.set_value(node_id, value),
            None => {
                let node = self.get_checked(node_id)?;
                if !node.kind().is_source() {
                    return Err(GraphError::InvalidFeedTarget {
                        node: node_id,
                        kind: node.kind(),
                    });
                }
                Ok(())
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn link(&mut self, from: NodeId, to: NodeId) {
        self.nodes[from.index()].add_outbound(to);
    }
}

impl<T> Graph<T>
where
    T: Clone + Add<Output = T>,
{
    /// Compute and store a node's value from its predecessors.
    ///
    /// Inputs keep whatever value they already hold.
    pub fn forward(&mut self, node_id: NodeId) -> Result<()> {
        let node = self.get_checked(node_id)?;
        match node.kind() {
            NodeKind::Input => self.forward_input(node_id, None),
            NodeKind::Add => {
                let (x, y) = (node.inbound()[0], node.inbound()[1]);
                let sum = self.value(x)?.clone() + self.value(y)?.clone();
                self.nodes[node_id.index()].set_value(sum);
                Ok(())
            }
            NodeKind::Base => Err(GraphError::NotImplemented { node: node_id }),
        }
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
