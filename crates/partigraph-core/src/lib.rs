//! # partigraph Core
//!
//! In-memory graph containers with closure queries and typed partitions.
//!
//! - [`Graph`]: directed adjacency with parents, children, neighbours,
//!   cycle-safe ancestor/descendant closures and merging.
//! - [`PartitionedGraph`]: a [`Graph`] whose vertices belong to disjoint,
//!   typed partitions, with edges allowed only across partitions.
//!
//! ## Quick Start
//!
//! ```rust
//! use partigraph_core::{partition_schema, Graph, PartitionedGraph};
//!
//! let mut graph = Graph::new();
//! graph.add_edge(0, 1);
//! graph.add_edge(1, 0);
//! assert_eq!(graph.get_descendants(&0).len(), 1);
//!
//! partition_schema! {
//!     pub struct Citations {
//!         0 => Papers(String),
//!         1 => Authors(String),
//!     }
//! }
//!
//! let mut citations: PartitionedGraph<u32, Citations> = PartitionedGraph::new();
//! citations.add_vertex::<Papers>(1, "On Graphs".to_string())?;
//! citations.add_vertex::<Authors>(2, "Euler".to_string())?;
//! citations.add_edge(2, 1)?;
//! assert!(citations.add_edge(1, 3).is_err());
//! # Ok::<(), partigraph_core::Error>(())
//! ```

#![warn(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::doc_markdown,
        clippy::uninlined_format_args,
        clippy::float_cmp,
        dead_code
    )
)]

pub mod config;
pub mod error;
pub mod graph;
pub mod partitioned;

pub use config::{ConfigError, GraphConfig, TraversalDefaults};
pub use error::{Error, Result};
pub use graph::{Direction, Graph, GraphTraversal, TraversalConfig, TraversalStep};
pub use partitioned::{Partition, PartitionId, PartitionSchema, PartitionedGraph};
