//! Directed graph store and structural algorithms.
//!
//! This module provides the graph side of the crate: a mutable adjacency-set
//! store over dense node ids, its weighted variant, random generation, and the
//! traversal, cycle, SCC and flow algorithms that operate on them.
//!
//! # Architecture
//!
//! - [`NodeId`] / [`Edge`] - Strongly-typed identifiers; an edge is an ordered node pair
//! - [`GraphBase`] / [`Successors`] - The traits algorithms are written against
//! - [`DirectedGraph`] - Adjacency sets plus a cached edge counter
//! - [`WeightedGraph`] - A `DirectedGraph` composed with a weight map
//! - [`algorithms`] - DFS, cycle detection, topological sort, SCC, simple cycles, max flow
//! - [`generate`] - Random graphs with an injected randomness source
//!
//! # Data Flow
//!
//! A graph is built from edges, adjacency lists or a 0/1 matrix, analysed in
//! place, and, when it is cyclic, condensed to its acyclic meta-graph. The signed
//! incidence matrix of an acyclic graph is what the
//! [`canonical`](crate::canonical) engine consumes.
//!
//! # Examples
//!
//! ```rust
//! use canongraph::graph::{DirectedGraph, NodeId, NodeRole};
//!
//! let mut graph = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3)]);
//!
//! assert!(graph.has_cycle());
//! assert_eq!(graph.simple_cycles().len(), 1);
//!
//! let meta = graph.meta_graph();
//! assert_eq!(meta.node_count(), 2);
//! assert!(meta.topological_sort().is_some());
//!
//! graph.remove_node(NodeId::new(1));
//! assert_eq!(graph.node_roles()[1], NodeRole::Isolated);
//! graph.compact();
//! assert_eq!(graph.node_count(), 3);
//! ```

pub mod algorithms;
mod directed;
mod edge;
pub mod generate;
mod node;
mod traits;
mod weighted;

pub use directed::DirectedGraph;
pub use edge::{Edge, EdgeSet};
pub use node::{NodeId, NodeRole};
pub use traits::{GraphBase, Successors};
pub use weighted::WeightedGraph;
