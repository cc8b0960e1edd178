//! Tests for Graph adjacency storage.

use std::collections::HashSet;

use super::store::Graph;
use crate::config::GraphConfig;

/// 0 → 1, 0 → 2, 1 → 3, 1 → 4, 3 → 5, 4 → 5
fn build_test_graph() -> Graph<i32> {
    let mut graph = Graph::new();
    graph.add_edge(0, 1);
    graph.add_edge(0, 2);
    graph.add_edge(1, 3);
    graph.add_edge(1, 4);
    graph.add_edge(3, 5);
    graph.add_edge(4, 5);
    graph
}

fn set(items: &[i32]) -> HashSet<i32> {
    items.iter().copied().collect()
}

#[test]
fn test_get_children() {
    let graph = build_test_graph();
    assert_eq!(graph.get_children(&0), set(&[1, 2]));
    assert_eq!(graph.get_children(&2), set(&[]));
}

#[test]
fn test_get_parents() {
    let graph = build_test_graph();
    assert_eq!(graph.get_parents(&0), set(&[]));
    assert_eq!(graph.get_parents(&5), set(&[3, 4]));
}

#[test]
fn test_get_neighbours() {
    let graph = build_test_graph();
    assert_eq!(graph.get_neighbours(&1), set(&[0, 3, 4]));
}

#[test]
fn test_get_descendants() {
    let graph = build_test_graph();
    assert_eq!(graph.get_descendants(&0), set(&[1, 2, 3, 4, 5]));
    assert_eq!(graph.get_descendants(&1), set(&[3, 4, 5]));
    assert_eq!(graph.get_descendants(&5), set(&[]));
}

#[test]
fn test_get_ancestors() {
    let graph = build_test_graph();
    assert_eq!(graph.get_ancestors(&5), set(&[0, 1, 3, 4]));
    assert_eq!(graph.get_ancestors(&0), set(&[]));
}

#[test]
fn test_absent_vertex_queries_are_empty() {
    let graph = build_test_graph();
    assert!(graph.get_children(&99).is_empty());
    assert!(graph.get_parents(&99).is_empty());
    assert!(graph.get_neighbours(&99).is_empty());
    assert!(graph.get_descendants(&99).is_empty());
    assert!(graph.get_ancestors(&99).is_empty());
    assert_eq!(graph.out_degree(&99), 0);
    assert_eq!(graph.in_degree(&99), 0);
    assert!(!graph.has_vertex(&99));
}

#[test]
fn test_add_edge_creates_vertices() {
    let mut graph = Graph::new();
    graph.add_edge("a", "b");
    assert!(graph.has_vertex(&"a"));
    assert!(graph.has_vertex(&"b"));
    assert!(graph.has_edge(&"a", &"b"));
    assert!(!graph.has_edge(&"b", &"a"));
}

#[test]
fn test_add_edge_is_idempotent() {
    let mut graph = Graph::new();
    graph.add_edge(1, 2);
    graph.add_edge(1, 2);
    graph.add_edge(1, 2);

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.get_children(&1), set(&[2]));
    assert_eq!(graph.get_parents(&2), set(&[1]));
}

#[test]
fn test_add_vertex_is_idempotent() {
    let mut graph = build_test_graph();
    let before = graph.clone();
    graph.add_vertex(1);
    assert_eq!(graph, before);

    graph.add_vertex(42);
    assert_eq!(graph.vertex_count(), 7);
    assert!(graph.get_neighbours(&42).is_empty());
}

#[test]
fn test_self_loop() {
    let mut graph = Graph::new();
    graph.add_edge(7, 7);

    assert_eq!(graph.get_children(&7), set(&[7]));
    assert_eq!(graph.get_parents(&7), set(&[7]));
    assert_eq!(graph.get_neighbours(&7), set(&[7]));
    // The origin is never part of its own closure.
    assert!(graph.get_descendants(&7).is_empty());
    assert!(graph.get_ancestors(&7).is_empty());
}

#[test]
fn test_two_cycle_terminates() {
    let mut graph = Graph::new();
    graph.add_edge(0, 1);
    graph.add_edge(1, 0);

    assert_eq!(graph.get_descendants(&0), set(&[1]));
    assert_eq!(graph.get_ancestors(&0), set(&[1]));
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let mut graph = Graph::new();
    for i in 0..100_000 {
        graph.add_edge(i, i + 1);
    }
    assert_eq!(graph.get_descendants(&0).len(), 100_000);
    assert_eq!(graph.get_ancestors(&100_000).len(), 100_000);
}

#[test]
fn test_merge() {
    let graph = build_test_graph();
    let mut that = Graph::new();
    that.add_edge(2, 6);
    that.add_edge(2, 7);
    that.add_edge(6, 8);
    that.add_edge(9, 3);

    assert_eq!(that.get_descendants(&9), set(&[3]));
    assert_eq!(that.get_ancestors(&8), set(&[2, 6]));

    that.merge(&graph);

    assert_eq!(that.get_descendants(&9), set(&[3, 5]));
    assert_eq!(that.get_ancestors(&8), set(&[0, 2, 6]));
}

#[test]
fn test_merge_keeps_isolated_vertices() {
    let mut that = Graph::new();
    that.add_vertex(10);

    let mut graph = build_test_graph();
    graph.merge(&that);

    assert!(graph.has_vertex(&10));
    assert_eq!(graph.vertex_count(), 7);
    assert_eq!(graph.edge_count(), 6);
}

#[test]
fn test_merge_overlapping_edges_absorbed() {
    let mut graph = build_test_graph();
    let copy = graph.clone();
    graph.merge(&copy);
    assert_eq!(graph, copy);
}

#[test]
fn test_counts_and_degrees() {
    let graph = build_test_graph();
    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.out_degree(&0), 2);
    assert_eq!(graph.out_degree(&5), 0);
    assert_eq!(graph.in_degree(&5), 2);
    assert_eq!(graph.in_degree(&0), 0);
}

#[test]
fn test_vertices_and_edges_iterators() {
    let graph = build_test_graph();
    let vertices: HashSet<i32> = graph.vertices().copied().collect();
    assert_eq!(vertices, set(&[0, 1, 2, 3, 4, 5]));

    let edges: HashSet<(i32, i32)> = graph.edges().map(|(a, b)| (*a, *b)).collect();
    assert_eq!(edges.len(), 6);
    assert!(edges.contains(&(3, 5)));
    assert!(!edges.contains(&(5, 3)));
}

#[test]
fn test_empty_graph() {
    let graph: Graph<u64> = Graph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.edges().count(), 0);
}

#[test]
fn test_with_config() {
    let config = GraphConfig {
        vertex_capacity: 128,
        ..GraphConfig::default()
    };
    let graph: Graph<u64> = Graph::with_config(&config);
    assert!(graph.is_empty());
}
