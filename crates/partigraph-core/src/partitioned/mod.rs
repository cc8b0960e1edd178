//! Partitioned graphs with typed per-partition values.
//!
//! Vertices are assigned once to one of the partitions named by a
//! [`PartitionSchema`], and edges may only join vertices of different
//! partitions.
//!
//! # Example
//!
//! ```rust
//! use partigraph_core::{partition_schema, Error, PartitionedGraph};
//!
//! partition_schema! {
//!     pub struct Bipartite {
//!         0 => Left(&'static str),
//!         1 => Right(u32),
//!     }
//! }
//!
//! let mut graph: PartitionedGraph<u64, Bipartite> = PartitionedGraph::new();
//! graph.add_vertex::<Left>(0, "zero").unwrap();
//! graph.add_vertex::<Left>(1, "one").unwrap();
//! graph.add_vertex::<Right>(2, 2).unwrap();
//!
//! assert!(matches!(graph.add_edge(0, 1), Err(Error::SamePartition { .. })));
//! graph.add_edge(0, 2).unwrap();
//! graph.add_edge(2, 1).unwrap();
//! assert!(graph.get_parents(&1).contains(&2));
//! ```

mod graph;
mod schema;


pub use graph::PartitionedGraph;
pub use schema::{Partition, PartitionId, PartitionSchema};
