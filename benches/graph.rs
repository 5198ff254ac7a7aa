//! Benchmarks for the graph store and its structural algorithms.
//!
//! Every benchmark runs over seeded random graphs of increasing size:
//! - Cycle detection and topological sort
//! - Strongly connected components and condensation
//! - Simple cycle enumeration on small dense graphs
//! - Compaction after node removal

extern crate canongraph;

use canongraph::graph::{
    generate::{random_dag, random_graph},
    DirectedGraph, NodeId,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

const SIZES: [usize; 3] = [64, 256, 1024];

fn graph_of(size: usize, seed: u64) -> DirectedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    random_graph(&mut rng, size, 2)
}

/// Benchmark three-state cycle detection against the finish-order sort on DAGs.
fn bench_ordering(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordering");
    for size in SIZES {
        let mut rng = StdRng::seed_from_u64(size as u64);
        let dag = random_dag(&mut rng, size, 4);

        group.bench_with_input(BenchmarkId::new("has_cycle", size), &dag, |b, g| {
            b.iter(|| black_box(g.has_cycle()));
        });
        group.bench_with_input(BenchmarkId::new("topological_sort", size), &dag, |b, g| {
            b.iter(|| black_box(g.topological_sort()));
        });
    }
    group.finish();
}

/// Benchmark Tarjan labeling and the meta-graph built from it.
fn bench_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("components");
    for size in SIZES {
        let graph = graph_of(size, 7);

        group.bench_with_input(BenchmarkId::new("scc", size), &graph, |b, g| {
            b.iter(|| black_box(g.scc()));
        });
        group.bench_with_input(BenchmarkId::new("meta_graph", size), &graph, |b, g| {
            b.iter(|| black_box(g.meta_graph()));
        });
    }
    group.finish();
}

/// Benchmark simple cycle enumeration, which is exponential in the worst case.
fn bench_simple_cycles(c: &mut Criterion) {
    let graph = graph_of(12, 11);

    c.bench_function("simple_cycles_12", |b| {
        b.iter(|| black_box(graph.simple_cycles()));
    });
}

/// Benchmark compaction after punching holes into the id space.
fn bench_compact(c: &mut Criterion) {
    let graph = graph_of(1024, 13);

    c.bench_function("compact_1024", |b| {
        b.iter_batched(
            || {
                let mut g = graph.clone();
                for id in (0..g.node_count()).step_by(7) {
                    g.remove_node(NodeId::new(id));
                }
                g
            },
            |mut g| {
                g.compact();
                black_box(g)
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_ordering,
    bench_components,
    bench_simple_cycles,
    bench_compact
);
criterion_main!(benches);
