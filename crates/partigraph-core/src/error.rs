//! Error types for partitioned graph operations.
//!
//! The base [`Graph`](crate::graph::Graph) never fails: absent vertices degrade
//! to empty query results. Only the partition-aware operations of
//! [`PartitionedGraph`](crate::partitioned::PartitionedGraph) return errors.

use thiserror::Error;

use crate::partitioned::PartitionId;

/// Errors reported by partition-aware graph operations.
///
/// Every error is returned at the point of the offending call, and a call that
/// fails leaves the graph unchanged. Vertices are rendered with their `Debug`
/// representation so the error type stays independent of the vertex type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The vertex is already assigned to a different partition.
    #[error("Vertex {vertex} already belongs to partition {existing}, cannot assign it to partition {requested}")]
    PartitionConflict {
        /// The vertex being (re)assigned.
        vertex: String,
        /// The partition the vertex currently belongs to.
        existing: PartitionId,
        /// The partition the caller asked for.
        requested: PartitionId,
    },

    /// An edge endpoint has not been assigned to any partition.
    #[error("Vertex {vertex} is not assigned to any partition")]
    UnassignedVertex {
        /// The unassigned endpoint.
        vertex: String,
    },

    /// Both edge endpoints belong to the same partition.
    #[error("Cannot connect {from} and {to}: both belong to partition {partition}")]
    SamePartition {
        /// Edge source.
        from: String,
        /// Edge target.
        to: String,
        /// The partition shared by both endpoints.
        partition: PartitionId,
    },

    /// The vertex is absent from the queried partition (or from every partition).
    #[error("Vertex {vertex} not found")]
    VertexNotFound {
        /// The vertex that was looked up.
        vertex: String,
    },
}

impl Error {
    pub(crate) fn partition_conflict(
        vertex: &impl std::fmt::Debug,
        existing: PartitionId,
        requested: PartitionId,
    ) -> Self {
        Self::PartitionConflict {
            vertex: format!("{vertex:?}"),
            existing,
            requested,
        }
    }

    pub(crate) fn unassigned(vertex: &impl std::fmt::Debug) -> Self {
        Self::UnassignedVertex {
            vertex: format!("{vertex:?}"),
        }
    }

    pub(crate) fn same_partition(
        from: &impl std::fmt::Debug,
        to: &impl std::fmt::Debug,
        partition: PartitionId,
    ) -> Self {
        Self::SamePartition {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            partition,
        }
    }

    pub(crate) fn not_found(vertex: &impl std::fmt::Debug) -> Self {
        Self::VertexNotFound {
            vertex: format!("{vertex:?}"),
        }
    }
}

/// Result type alias for partitioned graph operations.
pub type Result<T> = std::result::Result<T, Error>;
