//! Topological Scheduler
//!
//! The scheduler turns a feed mapping into the order in which nodes must run.
//! It ensures that predecessors always come before their successors.
//!
//! # Algorithm
//!
//! We use Kahn's algorithm over the part of the graph reachable from the fed
//! inputs:
//!
//! 1. Breadth-first from the fed inputs along outbound edges, recording for
//!    every discovered node its discovered predecessors and its successors.
//!    This is a private copy of the edges, so the live graph is never touched.
//! 2. The ready set starts as exactly the fed inputs.
//! 3. Take a ready node, append it to the order, and consume its outgoing
//!    edges. A successor with no incoming edges left becomes ready.
//! 4. Anything discovered but never ready sits on a cycle (or behind one).
//! 5. Once the order stands, each fed source is assigned its feed value.
//!
//! Predecessors that are not reachable from the feed are not counted, so an
//! operator reading an unfed input is still scheduled and fails when it runs.

use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, instrument, trace, warn};

use super::arena::Graph;
use super::feed::FeedDict;
use super::node::NodeId;
use crate::config::{CyclePolicy, ReadyOrder, SchedulerConfig};
use crate::error::{GraphError, Result};

/// Discovered edges of one node, consumed as the algorithm runs.
#[derive(Debug, Default)]
struct Edges {
    incoming: IndexSet<NodeId>,
    outgoing: IndexSet<NodeId>,
}

/// Produces execution orders for a graph.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    /// Create a scheduler with the given settings.
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Order every node reachable from `feed`, assigning each fed input its value.
    ///
    /// Fails with [`GraphError::InvalidFeedTarget`] if a key is not an input. A
    /// cycle fails with [`GraphError::CycleDetected`] unless the config asks for
    /// truncation. Values are assigned only once the order is complete, so a
    /// failed sort leaves every input as it was.
    #[instrument(skip_all, fields(feed = feed.len()))]
    pub fn sort<T>(&self, graph: &mut Graph<T>, feed: &FeedDict<T>) -> Result<Vec<NodeId>>
    where
        T: Clone + Debug,
    {
        for node_id in feed.keys() {
            let node = graph.get_checked(node_id)?;
            if !node.kind().is_source() {
                return Err(GraphError::InvalidFeedTarget {
                    node: node_id,
                    kind: node.kind(),
                });
            }
        }

        let mut edges = discover(graph, feed)?;
        debug!(discovered = edges.len(), "discovery complete");

        let mut ready: VecDeque<NodeId> = feed.keys().collect();
        let mut order = Vec::with_capacity(edges.len());

        while let Some(node_id) = self.next_ready(&mut ready) {
            trace!(node = %node_id, position = order.len(), "scheduled");
            order.push(node_id);

            let successors = edges
                .get_mut(&node_id)
                .map(|e| std::mem::take(&mut e.outgoing))
                .unwrap_or_default();
            for successor in successors {
                if let Some(e) = edges.get_mut(&successor) {
                    e.incoming.shift_remove(&node_id);
                    if e.incoming.is_empty() {
                        ready.push_back(successor);
                    }
                }
            }
        }

        if order.len() != edges.len() {
            let unresolved: Vec<NodeId> = edges
                .iter()
                .filter(|(_, e)| !e.incoming.is_empty())
                .map(|(&id, _)| id)
                .collect();

            match self.config.on_cycle {
                CyclePolicy::Error => return Err(GraphError::CycleDetected { unresolved }),
                CyclePolicy::Truncate => {
                    warn!(
                        ?unresolved,
                        scheduled = order.len(),
                        "cycle detected, order is incomplete"
                    );
                }
            }
        }

        for &node_id in &order {
            if graph.get_checked(node_id)?.kind().is_source() {
                if let Some(value) = feed.get(node_id) {
                    trace!(node = %node_id, ?value, "input fed");
                    graph.forward_input(node_id, Some(value.clone()))?;
                }
            }
        }

        debug!(scheduled = order.len(), "topological order built");
        Ok(order)
    }

    fn next_ready(&self, ready: &mut VecDeque<NodeId>) -> Option<NodeId> {
        match self.config.ready_order {
            ReadyOrder::Fifo => ready.pop_front(),
            ReadyOrder::Lifo => ready.pop_back(),
        }
    }
}

/// Breadth-first discovery of everything reachable from the fed inputs.
fn discover<T>(graph: &Graph<T>, feed: &FeedDict<T>) -> Result<IndexMap<NodeId, Edges>> {
    let mut edges: IndexMap<NodeId, Edges> = IndexMap::new();
    let mut visited = HashSet::new();
    let mut queue: VecDeque<NodeId> = feed.keys().collect();

    while let Some(node_id) = queue.pop_front() {
        if !visited.insert(node_id) {
            continue;
        }
        edges.entry(node_id).or_default();

        for &successor in graph.get_checked(node_id)?.outbound() {
            edges.entry(node_id).or_default().outgoing.insert(successor);
            edges.entry(successor).or_default().incoming.insert(node_id);
            queue.push_back(successor);
        }
    }

    Ok(edges)
}

/// Sort with the default [`Scheduler`].
pub fn topological_sort<T>(graph: &mut Graph<T>, feed: &FeedDict<T>) -> Result<Vec<NodeId>>
where
    T: Clone + Debug,
{
    Scheduler::default().sort(graph, feed)
}
