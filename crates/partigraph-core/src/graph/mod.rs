//! In-memory directed graph with closure queries.
//!
//! Provides the adjacency store and the traversal algorithms shared by every
//! graph in this crate.
//!
//! # Example
//!
//! ```rust
//! use partigraph_core::graph::{Graph, TraversalConfig};
//! use partigraph_core::graph::traversal::bfs;
//!
//! let mut graph = Graph::new();
//! graph.add_edge("a", "b");
//! graph.add_edge("b", "c");
//!
//! let steps = bfs(&graph, &"a", &TraversalConfig::new(1, 10));
//! assert_eq!(steps.len(), 1);
//! assert_eq!(steps[0].vertex, "b");
//! ```

mod store;
pub mod traversal;

#[cfg(test)]
mod store_tests;

pub use store::Graph;
pub use traversal::{Direction, GraphTraversal, TraversalConfig, TraversalStep};
