//! Adjacency storage for directed graphs with symmetric parent/child indexing.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::config::GraphConfig;

use super::traversal::{self, Direction, GraphTraversal};

/// Parent and child sets of a single vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Adjacency<V>
where
    V: Hash + Eq,
{
    parents: HashSet<V>,
    children: HashSet<V>,
}

impl<V> Default for Adjacency<V>
where
    V: Hash + Eq,
{
    fn default() -> Self {
        Self {
            parents: HashSet::new(),
            children: HashSet::new(),
        }
    }
}

/// A directed graph holding at most one edge per ordered vertex pair.
///
/// Can be treated as directed through [`get_parents`](Self::get_parents) and
/// [`get_children`](Self::get_children), or as undirected through
/// [`get_neighbours`](Self::get_neighbours). Vertices are created lazily and
/// never removed.
///
/// Every edge is recorded twice: `to` in the children of `from`, and `from`
/// in the parents of `to`. Queries on absent vertices return empty sets.
///
/// # Example
///
/// ```rust
/// use partigraph_core::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge(0, 1);
/// graph.add_edge(1, 2);
///
/// assert!(graph.get_children(&0).contains(&1));
/// assert_eq!(graph.get_descendants(&0).len(), 2);
/// assert!(graph.get_ancestors(&0).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<V>
where
    V: Hash + Eq,
{
    adjacency: HashMap<V, Adjacency<V>>,
    edge_count: usize,
}

impl<V> Default for Graph<V>
where
    V: Hash + Eq,
{
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }
}

impl<V> Graph<V>
where
    V: Hash + Eq + Clone,
{
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with adjacency storage pre-allocated for `vertices`.
    #[must_use]
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Creates a graph sized from a [`GraphConfig`].
    #[must_use]
    pub fn with_config(config: &GraphConfig) -> Self {
        Self::with_capacity(config.vertex_capacity)
    }

    // ── Mutation ───────────────────────────────────────────────────────

    /// Adds a vertex with no connections. No-op if it already exists.
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Adds an edge from `from` to `to`, creating missing vertices.
    ///
    /// Repeating an existing edge changes nothing. Self-loops are allowed.
    pub fn add_edge(&mut self, from: V, to: V) {
        self.add_vertex(to.clone());
        let inserted = self
            .adjacency
            .entry(from.clone())
            .or_default()
            .children
            .insert(to.clone());
        if inserted {
            if let Some(target) = self.adjacency.get_mut(&to) {
                target.parents.insert(from);
            }
            self.edge_count += 1;
        }
    }

    /// Adds every vertex and edge of `that` to this graph.
    ///
    /// Edges already present are absorbed, so merging is order independent.
    pub fn merge(&mut self, that: &Graph<V>) {
        let before = (self.vertex_count(), self.edge_count);
        self.adjacency.reserve(that.adjacency.len());
        for (vertex, adjacency) in &that.adjacency {
            self.add_vertex(vertex.clone());
            for child in &adjacency.children {
                self.add_edge(vertex.clone(), child.clone());
            }
        }
        tracing::debug!(
            vertices_before = before.0,
            vertices_after = self.vertex_count(),
            edges_before = before.1,
            edges_after = self.edge_count,
            "Merged graph"
        );
    }

    // ── Adjacency queries ──────────────────────────────────────────────

    /// Returns the direct children of `vertex` (empty if absent).
    #[must_use]
    pub fn get_children(&self, vertex: &V) -> HashSet<V> {
        self.adjacency
            .get(vertex)
            .map(|a| a.children.clone())
            .unwrap_or_default()
    }

    /// Returns the direct parents of `vertex` (empty if absent).
    #[must_use]
    pub fn get_parents(&self, vertex: &V) -> HashSet<V> {
        self.adjacency
            .get(vertex)
            .map(|a| a.parents.clone())
            .unwrap_or_default()
    }

    /// Returns parents and children of `vertex` as one set.
    #[must_use]
    pub fn get_neighbours(&self, vertex: &V) -> HashSet<V> {
        self.adjacency
            .get(vertex)
            .map(|a| a.parents.union(&a.children).cloned().collect())
            .unwrap_or_default()
    }

    /// Returns every vertex reachable from `vertex` along child edges.
    ///
    /// `vertex` itself is excluded, even when it lies on a cycle.
    #[must_use]
    pub fn get_descendants(&self, vertex: &V) -> HashSet<V> {
        traversal::closure(self, vertex, Direction::Children)
    }

    /// Returns every vertex reachable from `vertex` along parent edges.
    ///
    /// `vertex` itself is excluded, even when it lies on a cycle.
    #[must_use]
    pub fn get_ancestors(&self, vertex: &V) -> HashSet<V> {
        traversal::closure(self, vertex, Direction::Parents)
    }

    // ── Inspection ─────────────────────────────────────────────────────

    /// Returns true if the vertex exists.
    #[must_use]
    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns true if the edge `from -> to` exists.
    #[must_use]
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|a| a.children.contains(to))
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterates over all vertices in arbitrary order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Iterates over all edges as `(from, to)` pairs in arbitrary order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> {
        self.adjacency
            .iter()
            .flat_map(|(from, a)| a.children.iter().map(move |to| (from, to)))
    }

    /// Returns the number of children of `vertex`.
    #[must_use]
    pub fn out_degree(&self, vertex: &V) -> usize {
        self.adjacency.get(vertex).map_or(0, |a| a.children.len())
    }

    /// Returns the number of parents of `vertex`.
    #[must_use]
    pub fn in_degree(&self, vertex: &V) -> usize {
        self.adjacency.get(vertex).map_or(0, |a| a.parents.len())
    }
}

impl<V> GraphTraversal<V> for Graph<V>
where
    V: Hash + Eq + Clone,
{
    fn children_of(&self, vertex: &V) -> Option<&HashSet<V>> {
        self.adjacency.get(vertex).map(|a| &a.children)
    }

    fn parents_of(&self, vertex: &V) -> Option<&HashSet<V>> {
        self.adjacency.get(vertex).map(|a| &a.parents)
    }
}
