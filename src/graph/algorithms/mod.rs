//! Graph algorithms for structural analysis.
//!
//! Every algorithm here is a free function generic over the
//! [`Successors`] trait and runs on an explicit work stack, so traversal depth
//! is bounded by heap memory rather than the call stack.
//! [`DirectedGraph`](crate::graph::DirectedGraph) exposes convenience methods that
//! delegate to these functions.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`dfs`] - Depth-first pre-order from a single start node
//! - [`dfs_forest`] - Depth-first pre-order covering every node
//!
//! ## Cycle Detection and Ordering
//!
//! - [`has_cycle`] - Three-state back-edge detection
//! - [`topological_sort`] - Finish-order topological sort, `None` on cycles
//!
//! ## Strongly Connected Components
//!
//! - [`strongly_connected_components`] - Representative labeling via Tarjan's algorithm
//! - [`condensation`] - Collapse components into an acyclic meta-graph
//! - [`simple_cycles`] - Enumerate every simple cycle once
//!
//! ## Flow
//!
//! - [`max_flow`] - Augmenting-path maximum flow over a [`WeightedGraph`](crate::graph::WeightedGraph)
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS | O(V + E) | Coverage, reachability |
//! | Cycle detection / topological sort | O(V + E) | Dependency ordering |
//! | SCC / condensation | O(V + E) | Preparing cyclic graphs for coloring |
//! | Simple cycles | Exponential in the worst case | Small, densely cyclic graphs |
//! | Max flow | O(E · f) | Capacity queries |
//!
//! # Examples
//!
//! ```rust
//! use canongraph::graph::{algorithms, DirectedGraph, NodeId};
//!
//! let graph = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3)]);
//!
//! let labels = algorithms::strongly_connected_components(&graph);
//! assert!(labels.is_cyclic());
//! assert!(labels.same_component(NodeId::new(0), NodeId::new(2)));
//! assert!(!labels.same_component(NodeId::new(0), NodeId::new(3)));
//!
//! let meta = algorithms::condensation(&graph, &labels);
//! assert_eq!(meta.graph.node_count(), 2);
//! assert!(!algorithms::has_cycle(&meta.graph));
//! ```

mod cycles;
mod flow;
mod scc;
mod simple_cycles;
mod topological;
mod traversal;

pub use cycles::has_cycle;
pub use flow::max_flow;
pub use scc::{condensation, strongly_connected_components, Condensation, SccLabels};
pub use simple_cycles::simple_cycles;
pub use topological::topological_sort;
pub use traversal::{dfs, dfs_forest, DfsIterator};

use crate::graph::{NodeId, Successors};

/// One level of an explicit depth-first work stack.
///
/// Holds the successors of `node` captured when the node was entered, and a
/// cursor to the next one still to be explored.
pub(crate) struct Frame {
    pub(crate) node: NodeId,
    successors: Vec<NodeId>,
    next: usize,
}

impl Frame {
    pub(crate) fn new<G: Successors>(graph: &G, node: NodeId) -> Self {
        Frame {
            node,
            successors: graph.successors(node).collect(),
            next: 0,
        }
    }

    /// Advances the cursor, returning the next unexplored successor.
    pub(crate) fn next_successor(&mut self) -> Option<NodeId> {
        let succ = self.successors.get(self.next).copied()?;
        self.next += 1;
        Some(succ)
    }
}

/// Per-node marking used by the three-state walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VisitState {
    /// Not reached yet
    Unvisited,
    /// Entered, successors still being explored
    InProgress,
    /// Entered and every successor resolved
    Done,
}
