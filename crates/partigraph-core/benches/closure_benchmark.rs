//! Benchmarks for closure queries and partitioned edge insertion.
//!
//! Measures:
//! - Descendant/ancestor closure on layered DAGs and long chains
//! - Cross-partition edge insertion with membership validation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use partigraph_core::{partition_schema, Graph, PartitionedGraph};

partition_schema! {
    struct Layered {
        0 => Even(u32),
        1 => Odd(u32),
    }
}

/// Layered DAG: every vertex of layer `l` points to every vertex of layer `l + 1`.
fn layered_graph(layers: u32, width: u32) -> Graph<u32> {
    let mut graph = Graph::with_capacity((layers * width) as usize);
    for layer in 0..layers.saturating_sub(1) {
        for i in 0..width {
            for j in 0..width {
                graph.add_edge(layer * width + i, (layer + 1) * width + j);
            }
        }
    }
    graph
}

fn bench_descendants(c: &mut Criterion) {
    let mut group = c.benchmark_group("descendants_layered");
    for layers in [4u32, 16, 64] {
        let graph = layered_graph(layers, 8);
        group.throughput(Throughput::Elements(graph.vertex_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(layers), &graph, |b, g| {
            b.iter(|| black_box(g.get_descendants(black_box(&0))));
        });
    }
    group.finish();
}

fn bench_ancestors_chain(c: &mut Criterion) {
    let mut graph = Graph::new();
    for i in 0..10_000u32 {
        graph.add_edge(i, i + 1);
    }
    c.bench_function("ancestors_chain_10k", |b| {
        b.iter(|| black_box(graph.get_ancestors(black_box(&10_000))));
    });
}

fn bench_partitioned_add_edge(c: &mut Criterion) {
    c.bench_function("partitioned_add_edge_1k", |b| {
        b.iter(|| {
            let mut graph: PartitionedGraph<u32, Layered> = PartitionedGraph::with_capacity(1000);
            for v in 0..1000u32 {
                let result = if v % 2 == 0 {
                    graph.add_vertex::<Even>(v, v)
                } else {
                    graph.add_vertex::<Odd>(v, v)
                };
                black_box(result).ok();
            }
            for v in 0..999u32 {
                black_box(graph.add_edge(v, v + 1)).ok();
            }
            graph
        });
    });
}

criterion_group!(
    benches,
    bench_descendants,
    bench_ancestors_chain,
    bench_partitioned_add_edge
);
criterion_main!(benches);
