//! Topological sorting.
//!
//! Nodes are pushed onto a stack as the three-state walk finishes them; popping
//! that stack yields an order in which every edge points forward. A back-edge
//! aborts the sort with no partial result.

use crate::graph::{algorithms::cycles::finish_order, NodeId, Successors};

/// Computes a topological ordering of all nodes.
///
/// For every edge `u -> v`, `u` appears before `v` in the returned order.
/// Isolated nodes are included.
///
/// # Returns
///
/// `Some(order)` for an acyclic graph, `None` if the graph contains a cycle
/// (self-loops included).
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use canongraph::graph::{algorithms::topological_sort, DirectedGraph, NodeId};
///
/// let graph = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 3)]);
/// let order = topological_sort(&graph).unwrap();
/// assert_eq!(order, (0..4).map(NodeId::new).collect::<Vec<_>>());
///
/// let cyclic = DirectedGraph::from_edges([(0, 1), (1, 0)]);
/// assert!(topological_sort(&cyclic).is_none());
/// ```
pub fn topological_sort<G: Successors>(graph: &G) -> Option<Vec<NodeId>> {
    let mut finished = Vec::with_capacity(graph.node_count());
    if !finish_order(graph, |node| finished.push(node)) {
        return None;
    }

    finished.reverse();
    Some(finished)
}
