//! Partitioned graph: typed vertex groups with cross-partition edges only.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use crate::config::GraphConfig;
use crate::error::{Error, Result};
use crate::graph::{Graph, GraphTraversal};

use super::schema::{Partition, PartitionId, PartitionSchema};

/// A graph whose vertices belong to disjoint, typed partitions.
///
/// Each vertex is assigned to exactly one partition of schema `S`, once, and
/// carries a value of that partition's type. Edges are accepted only between
/// vertices of different partitions, which makes the container suited to
/// bipartite and k-partite structures such as entity/relationship graphs.
///
/// Adjacency storage and closure queries are delegated to an embedded
/// [`Graph`]. Rejected operations leave the graph unchanged.
pub struct PartitionedGraph<V, S>
where
    V: Hash + Eq,
    S: PartitionSchema<V>,
{
    graph: Graph<V>,
    partitions: Vec<HashSet<V>>,
    membership: HashMap<V, PartitionId>,
    values: S::Stores,
}

impl<V, S> PartitionedGraph<V, S>
where
    V: Hash + Eq + Clone + fmt::Debug,
    S: PartitionSchema<V>,
{
    /// Creates an empty graph with one empty store per partition.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a graph with adjacency storage pre-allocated for `vertices`.
    #[must_use]
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            graph: Graph::with_capacity(vertices),
            partitions: (0..S::COUNT).map(|_| HashSet::new()).collect(),
            membership: HashMap::with_capacity(vertices),
            values: Default::default(),
        }
    }

    /// Creates a graph sized from a [`GraphConfig`].
    #[must_use]
    pub fn with_config(config: &GraphConfig) -> Self {
        Self::with_capacity(config.vertex_capacity)
    }

    // ── Mutation ───────────────────────────────────────────────────────

    /// Assigns `vertex` to partition `P` with the given value.
    ///
    /// Assigning a vertex to the partition it already belongs to is a no-op:
    /// the stored value is kept and `value` is dropped. Use
    /// [`get_value_mut`](Self::get_value_mut) to update a stored value.
    ///
    /// # Errors
    ///
    /// Returns `Error::PartitionConflict` if the vertex belongs to another partition.
    pub fn add_vertex<P>(&mut self, vertex: V, value: P::Value) -> Result<()>
    where
        P: Partition<V, S>,
    {
        let requested = P::ID;
        match self.membership.get(&vertex).copied() {
            Some(existing) if existing == requested => Ok(()),
            Some(existing) => {
                let err = Error::partition_conflict(&vertex, existing, requested);
                tracing::debug!(error = %err, "Rejected vertex assignment");
                Err(err)
            }
            None => {
                tracing::trace!(vertex = ?vertex, partition = %requested, "Assigned vertex");
                self.partitions[requested.index()].insert(vertex.clone());
                self.membership.insert(vertex.clone(), requested);
                P::values_mut(&mut self.values).insert(vertex.clone(), value);
                self.graph.add_vertex(vertex);
                Ok(())
            }
        }
    }

    /// Adds an edge between two vertices of different partitions.
    ///
    /// # Errors
    ///
    /// - `Error::UnassignedVertex` if either endpoint has no partition (`from` is checked first).
    /// - `Error::SamePartition` if both endpoints share a partition.
    pub fn add_edge(&mut self, from: V, to: V) -> Result<()> {
        let checked = self.check_edge(&from, &to);
        if let Err(err) = checked {
            tracing::debug!(error = %err, "Rejected edge");
            return Err(err);
        }
        tracing::trace!(from = ?from, to = ?to, "Added cross-partition edge");
        self.graph.add_edge(from, to);
        Ok(())
    }

    /// Merges `that` into this graph.
    ///
    /// Memberships and value stores are unioned partition by partition (values
    /// already present here are kept), then edges are merged.
    ///
    /// # Errors
    ///
    /// Returns `Error::PartitionConflict` if a vertex belongs to different
    /// partitions in the two graphs. Nothing is merged in that case.
    pub fn merge(&mut self, that: Self) -> Result<()> {
        for (vertex, &theirs) in &that.membership {
            if let Some(&ours) = self.membership.get(vertex) {
                if ours != theirs {
                    let err = Error::partition_conflict(vertex, ours, theirs);
                    tracing::debug!(error = %err, "Rejected graph merge");
                    return Err(err);
                }
            }
        }

        let Self {
            graph,
            partitions,
            membership,
            values,
        } = that;

        self.graph.merge(&graph);
        for (ours, theirs) in self.partitions.iter_mut().zip(partitions) {
            ours.extend(theirs);
        }
        for (vertex, partition) in membership {
            self.membership.entry(vertex).or_insert(partition);
        }
        S::merge_stores(&mut self.values, values);
        Ok(())
    }

    // ── Partition queries ──────────────────────────────────────────────

    /// Returns the partition `vertex` belongs to.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if the vertex is in no partition.
    pub fn get_partition_of(&self, vertex: &V) -> Result<PartitionId> {
        self.membership
            .get(vertex)
            .copied()
            .ok_or_else(|| Error::not_found(vertex))
    }

    /// Returns true if `vertex` belongs to some partition.
    #[must_use]
    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.membership.contains_key(vertex)
    }

    /// Returns the members of a partition, `None` if `id` is out of range.
    #[must_use]
    pub fn partition(&self, id: PartitionId) -> Option<&HashSet<V>> {
        self.partitions.get(id.index())
    }

    /// Returns every vertex of partition `P` with its value.
    #[must_use]
    pub fn get_partition_values<P>(&self) -> &HashMap<V, P::Value>
    where
        P: Partition<V, S>,
    {
        P::values(&self.values)
    }

    /// Returns the value of `vertex` in partition `P`.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if the vertex is not a member of `P`.
    pub fn get_value<P>(&self, vertex: &V) -> Result<&P::Value>
    where
        P: Partition<V, S>,
    {
        P::values(&self.values)
            .get(vertex)
            .ok_or_else(|| Error::not_found(vertex))
    }

    /// Returns the value of `vertex` in partition `P` mutably.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if the vertex is not a member of `P`.
    pub fn get_value_mut<P>(&mut self, vertex: &V) -> Result<&mut P::Value>
    where
        P: Partition<V, S>,
    {
        P::values_mut(&mut self.values)
            .get_mut(vertex)
            .ok_or_else(|| Error::not_found(vertex))
    }

    /// Returns the number of partitions in the schema.
    #[must_use]
    pub fn partition_count(&self) -> usize {
        S::COUNT
    }

    /// Returns the number of assigned vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.membership.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    // ── Adjacency queries (delegated) ──────────────────────────────────

    /// Returns the underlying adjacency graph.
    #[must_use]
    pub fn graph(&self) -> &Graph<V> {
        &self.graph
    }

    /// Returns the direct children of `vertex`.
    #[must_use]
    pub fn get_children(&self, vertex: &V) -> HashSet<V> {
        self.graph.get_children(vertex)
    }

    /// Returns the direct parents of `vertex`.
    #[must_use]
    pub fn get_parents(&self, vertex: &V) -> HashSet<V> {
        self.graph.get_parents(vertex)
    }

    /// Returns parents and children of `vertex`.
    #[must_use]
    pub fn get_neighbours(&self, vertex: &V) -> HashSet<V> {
        self.graph.get_neighbours(vertex)
    }

    /// Returns every vertex reachable from `vertex` along child edges.
    #[must_use]
    pub fn get_descendants(&self, vertex: &V) -> HashSet<V> {
        self.graph.get_descendants(vertex)
    }

    /// Returns every vertex reachable from `vertex` along parent edges.
    #[must_use]
    pub fn get_ancestors(&self, vertex: &V) -> HashSet<V> {
        self.graph.get_ancestors(vertex)
    }

    /// Returns true if the edge `from -> to` exists.
    #[must_use]
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.graph.has_edge(from, to)
    }

    fn check_edge(&self, from: &V, to: &V) -> Result<()> {
        let from_partition = self
            .membership
            .get(from)
            .ok_or_else(|| Error::unassigned(from))?;
        let to_partition = self
            .membership
            .get(to)
            .ok_or_else(|| Error::unassigned(to))?;
        if from_partition == to_partition {
            return Err(Error::same_partition(from, to, *from_partition));
        }
        Ok(())
    }
}

impl<V, S> Default for PartitionedGraph<V, S>
where
    V: Hash + Eq + Clone + fmt::Debug,
    S: PartitionSchema<V>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, S> Clone for PartitionedGraph<V, S>
where
    V: Hash + Eq + Clone,
    S: PartitionSchema<V>,
    S::Stores: Clone,
{
    fn clone(&self) -> Self {
        Self {
            graph: self.graph.clone(),
            partitions: self.partitions.clone(),
            membership: self.membership.clone(),
            values: self.values.clone(),
        }
    }
}

impl<V, S> fmt::Debug for PartitionedGraph<V, S>
where
    V: Hash + Eq + fmt::Debug,
    S: PartitionSchema<V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sizes: Vec<usize> = self.partitions.iter().map(HashSet::len).collect();
        f.debug_struct("PartitionedGraph")
            .field("graph", &self.graph)
            .field("partition_sizes", &sizes)
            .finish_non_exhaustive()
    }
}

impl<V, S> GraphTraversal<V> for PartitionedGraph<V, S>
where
    V: Hash + Eq + Clone,
    S: PartitionSchema<V>,
{
    fn children_of(&self, vertex: &V) -> Option<&HashSet<V>> {
        self.graph.children_of(vertex)
    }

    fn parents_of(&self, vertex: &V) -> Option<&HashSet<V>> {
        self.graph.parents_of(vertex)
    }
}
