//! Forward Pass
//!
//! Runs every scheduled node once, in order, and reads back the output.

use std::fmt::Debug;
use std::ops::Add;

use tracing::{debug, instrument, trace};

use super::arena::Graph;
use super::feed::FeedDict;
use super::node::NodeId;
use super::scheduler::topological_sort;
use crate::error::{GraphError, Result};

/// Run `forward()` on each node of `sorted_nodes` and return `output`'s value.
///
/// Inputs keep the values the scheduler fed them. Fails with
/// [`GraphError::UnresolvedValue`] if `output` is not part of `sorted_nodes`,
/// even when an earlier pass left a value on it.
#[instrument(skip_all, fields(output = %output, nodes = sorted_nodes.len()))]
pub fn forward_pass<T>(graph: &mut Graph<T>, output: NodeId, sorted_nodes: &[NodeId]) -> Result<T>
where
    T: Clone + Add<Output = T>,
{
    if !sorted_nodes.contains(&output) {
        return Err(GraphError::UnresolvedValue { node: output });
    }

    for &node_id in sorted_nodes {
        trace!(node = %node_id, "forward");
        graph.forward(node_id)?;
    }

    let value = graph.value(output)?.clone();
    debug!("forward pass complete");
    Ok(value)
}

/// Schedule from `feed` with the default scheduler, then run a forward pass.
pub fn evaluate<T>(graph: &mut Graph<T>, output: NodeId, feed: &FeedDict<T>) -> Result<T>
where
    T: Clone + Debug + Add<Output = T>,
{
    let order = topological_sort(graph, feed)?;
    forward_pass(graph, output, &order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_two_inputs() {
        let mut graph: Graph = Graph::new();
        let x = graph.input();
        let y = graph.input();
        let f = graph.add(x, y).unwrap();

        let feed = FeedDict::new().with(x, 10.0).with(y, 5.0);
        let order = topological_sort(&mut graph, &feed).unwrap();

        assert_eq!(forward_pass(&mut graph, f, &order).unwrap(), 15.0);
    }

    #[test]
    fn single_input_passes_value_through() {
        let mut graph: Graph<i64> = Graph::new();
        let x = graph.input();

        assert_eq!(evaluate(&mut graph, x, &FeedDict::new().with(x, 42)).unwrap(), 42);
    }

    #[test]
    fn unreached_output_is_unresolved() {
        let mut graph: Graph = Graph::new();
        let x = graph.input();
        let w = graph.input();
        let unfed = graph.add(w, w).unwrap();

        let err = evaluate(&mut graph, unfed, &FeedDict::new().with(x, 1.0)).unwrap_err();
        assert!(matches!(err, GraphError::UnresolvedValue { node } if node == unfed));
    }

    #[test]
    fn output_from_an_earlier_pass_is_not_reused() {
        let mut graph: Graph<i64> = Graph::new();
        let x = graph.input();
        let w = graph.input();
        let unfed = graph.add(w, w).unwrap();

        assert_eq!(evaluate(&mut graph, unfed, &FeedDict::new().with(w, 3)).unwrap(), 6);

        let err = evaluate(&mut graph, unfed, &FeedDict::new().with(x, 1)).unwrap_err();
        assert!(matches!(err, GraphError::UnresolvedValue { node } if node == unfed));
    }

    #[test]
    fn base_node_in_order_stops_the_pass() {
        let mut graph: Graph = Graph::new();
        let x = graph.input();
        let base = graph.node(&[x]).unwrap();

        let err = evaluate(&mut graph, base, &FeedDict::new().with(x, 1.0)).unwrap_err();
        assert!(matches!(err, GraphError::NotImplemented { node } if node == base));
    }

    #[test]
    fn directly_set_input_feeds_a_scheduled_operator() {
        let mut graph: Graph = Graph::new();
        let x = graph.input();
        let bias = graph.input();
        let out = graph.add(x, bias).unwrap();

        graph.set_value(bias, 0.5).unwrap();
        assert_eq!(evaluate(&mut graph, out, &FeedDict::new().with(x, 2.0)).unwrap(), 2.5);
    }
}
