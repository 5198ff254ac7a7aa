//! Trait definitions for graph abstractions.
//!
//! The algorithms in [`crate::graph::algorithms`] are written against these
//! traits rather than against [`DirectedGraph`](crate::graph::DirectedGraph)
//! directly, so they also run over wrappers such as
//! [`WeightedGraph`](crate::graph::WeightedGraph) or over ad-hoc test graphs.
//!
//! - [`GraphBase`] - Core properties: node count and node iteration
//! - [`Successors`] - Forward edge traversal (outgoing edges)

use crate::graph::NodeId;

/// Base trait providing core graph properties.
///
/// Implementors use dense ids: every graph with `node_count() == n` addresses its
/// nodes as `NodeId::new(0)..NodeId::new(n)`. Algorithms rely on this to size
/// their per-node state vectors.
pub trait GraphBase {
    /// Returns the number of nodes in the graph, isolated placeholders included.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node identifiers in ascending order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.node_count()).map(NodeId::new)
    }
}

/// Trait for graphs that support forward edge traversal.
///
/// # Examples
///
/// ```rust
/// use canongraph::graph::{DirectedGraph, NodeId, Successors};
///
/// let graph = DirectedGraph::from_edges([(0, 1), (0, 2)]);
///
/// let successors: Vec<NodeId> = graph.successors(NodeId::new(0)).collect();
/// assert_eq!(successors, vec![NodeId::new(1), NodeId::new(2)]);
/// ```
pub trait Successors: GraphBase {
    /// Returns an iterator over the successor nodes of the given node.
    ///
    /// For a directed edge `(u, v)`, node `v` is a successor of `u`. Algorithms
    /// visit successors in the order yielded here, so implementations should
    /// yield them in ascending id order to keep traversal results deterministic.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}
