//! Scheduling and forward-pass throughput.
//!
//! - Chains: one long dependency path
//! - Trees: many inputs folded pairwise into a single output

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use miniflow_core::{evaluate, FeedDict, Graph, NodeId};

/// `x + x + ...`, `len` adds deep.
fn chain(len: usize) -> (Graph, FeedDict<f64>, NodeId) {
    let mut graph = Graph::new();
    let x = graph.input();
    let mut out = x;
    for _ in 0..len {
        out = graph.add(out, x).unwrap();
    }
    (graph, FeedDict::new().with(x, 1.0), out)
}

/// Balanced pairwise sum over `leaves` inputs.
fn tree(leaves: usize) -> (Graph, FeedDict<f64>, NodeId) {
    let mut graph = Graph::new();
    let inputs: Vec<NodeId> = (0..leaves).map(|_| graph.input()).collect();
    let feed = inputs.iter().map(|&id| (id, 1.0)).collect();

    let mut layer = inputs;
    while layer.len() > 1 {
        layer = layer
            .chunks(2)
            .map(|pair| match pair {
                [a, b] => graph.add(*a, *b).unwrap(),
                [a] => *a,
                _ => unreachable!(),
            })
            .collect();
    }
    (graph, feed, layer[0])
}

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");
    for len in [100, 1_000, 10_000] {
        let (mut graph, feed, out) = chain(len);
        group.throughput(Throughput::Elements(graph.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| black_box(evaluate(&mut graph, out, &feed).unwrap()))
        });
    }
    group.finish();
}

fn bench_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree");
    for leaves in [64, 1_024, 16_384] {
        let (mut graph, feed, out) = tree(leaves);
        group.throughput(Throughput::Elements(graph.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(leaves), &leaves, |b, _| {
            b.iter(|| black_box(evaluate(&mut graph, out, &feed).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_chain, bench_tree);
criterion_main!(benches);
