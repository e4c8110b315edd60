//! Computation Graph
//!
//! This module implements the graph of nodes and the machinery that runs it.
//!
//! # Overview
//!
//! The computation graph is a directed acyclic graph (DAG) where:
//!
//! - Nodes are inputs (fed from outside) or operators (computed from their
//!   predecessors)
//! - Edges represent data flow: if A reads B, there is an edge from B to A
//!
//! A run has two steps. The scheduler walks forward from the fed inputs and
//! produces a topological order, seeding each input with its fed value. The
//! forward pass then computes every node in that order and reads the output.
//!
//! # Design Decisions
//!
//! 1. All nodes live in one arena ([`Graph`]) and refer to each other by
//!    [`NodeId`], so predecessor and successor links never own each other.
//!
//! 2. Node kinds are a closed enum. The scheduler only asks whether a node is
//!    a source; the forward pass dispatches through [`Graph::forward`].
//!
//! 3. Values are `Option`s. An unset value is never confused with a computed
//!    zero.

mod arena;
mod executor;
mod feed;
mod node;
mod scheduler;

pub use arena::Graph;
pub use executor::{evaluate, forward_pass};
pub use feed::FeedDict;
pub use node::{Inbound, Node, NodeId, NodeKind};
pub use scheduler::{topological_sort, Scheduler};
