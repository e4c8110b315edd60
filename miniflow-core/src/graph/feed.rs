//! Feed Mapping
//!
//! Values handed to input nodes before a pass.

use indexmap::IndexMap;

use super::node::NodeId;

/// Mapping from input node to the value it adopts when scheduled.
///
/// Keys are unique. Insertion order is kept so that scheduling is
/// reproducible; it has no other meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedDict<T> {
    entries: IndexMap<NodeId, T>,
}

impl<T> FeedDict<T> {
    /// Create an empty feed mapping.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Feed `value` to `node`, returning the value it replaces.
    pub fn insert(&mut self, node: NodeId, value: T) -> Option<T> {
        self.entries.insert(node, value)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, node: NodeId, value: T) -> Self {
        self.entries.insert(node, value);
        self
    }

    pub fn get(&self, node: NodeId) -> Option<&T> {
        self.entries.get(&node)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.entries.contains_key(&node)
    }

    /// Fed nodes, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> {
        self.entries.iter().map(|(&node, value)| (node, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for FeedDict<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(NodeId, T)> for FeedDict<T> {
    fn from_iter<I: IntoIterator<Item = (NodeId, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
