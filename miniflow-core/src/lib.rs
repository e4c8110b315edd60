//! MiniFlow Core
//!
//! This crate provides a minimal computation-graph evaluator. It implements:
//!
//! - A node arena with input and operator nodes
//! - A topological scheduler (Kahn's algorithm) seeded from a feed mapping
//! - A forward pass that evaluates the graph in dependency order
//!
//! Everything runs synchronously on the caller's thread.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `graph`: Nodes, the arena, scheduling and the forward pass
//! - `config`: Scheduler settings
//! - `error`: The crate error type
//!
//! # Example
//!
//! ```rust
//! use miniflow_core::{forward_pass, topological_sort, FeedDict, Graph};
//!
//! let mut graph: Graph = Graph::new();
//! let x = graph.input();
//! let y = graph.input();
//! let z = graph.add(x, y)?;
//! let out = graph.add(z, x)?;
//!
//! let feed = FeedDict::new().with(x, 4.0).with(y, 2.0);
//! let order = topological_sort(&mut graph, &feed)?;
//! assert_eq!(forward_pass(&mut graph, out, &order)?, 10.0);
//! # Ok::<(), miniflow_core::GraphError>(())
//! ```

pub mod config;
pub mod error;
pub mod graph;

pub use config::{CyclePolicy, ReadyOrder, SchedulerConfig};
pub use error::{GraphError, Result};
pub use graph::{
    evaluate, forward_pass, topological_sort, FeedDict, Graph, Node, NodeId, NodeKind, Scheduler,
};
