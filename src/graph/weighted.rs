//! Weighted directed graph.
//!
//! [`WeightedGraph`] composes a plain [`DirectedGraph`] with a weight map keyed by
//! [`Edge`]. Every structural mutation is delegated to the inner graph and the
//! weight map is updated alongside it, so the two always describe the same edge
//! set.

use std::collections::HashMap;

use crate::{
    graph::{algorithms, DirectedGraph, Edge, GraphBase, NodeId, Successors},
    Result,
};

/// A directed graph with an integer weight on every edge.
///
/// # Invariants
///
/// Every edge of the inner graph has exactly one weight entry, and every weight
/// entry names an edge of the inner graph.
///
/// # Examples
///
/// ```rust
/// use canongraph::graph::{NodeId, WeightedGraph};
///
/// let mut graph = WeightedGraph::new();
/// assert!(graph.add_edge(NodeId::new(0), NodeId::new(1), 5));
/// assert!(!graph.add_edge(NodeId::new(0), NodeId::new(1), 9));
/// assert_eq!(graph.weight(NodeId::new(0), NodeId::new(1)), Some(5));
///
/// graph.remove_node(NodeId::new(1));
/// assert_eq!(graph.edge_count(), 0);
/// assert_eq!(graph.weight(NodeId::new(0), NodeId::new(1)), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightedGraph {
    graph: DirectedGraph,
    weights: HashMap<Edge, i64>,
}

impl WeightedGraph {
    /// Creates an empty weighted graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a weighted graph from `(source, target, weight)` triples.
    ///
    /// When the same ordered pair appears more than once, the first weight wins.
    pub fn from_weighted_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        let mut graph = WeightedGraph::new();
        for (source, target, weight) in edges {
            graph.add_edge(NodeId::new(source), NodeId::new(target), weight);
        }
        graph
    }

    /// Returns the unweighted structure.
    #[must_use]
    pub fn graph(&self) -> &DirectedGraph {
        &self.graph
    }

    /// Returns the number of node ids.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the weight of `source -> target`, if that edge exists.
    #[must_use]
    pub fn weight(&self, source: NodeId, target: NodeId) -> Option<i64> {
        self.weights.get(&Edge::new(source, target)).copied()
    }

    /// Iterates over every edge with its weight, in no particular order.
    pub fn weighted_edges(&self) -> impl Iterator<Item = (Edge, i64)> + '_ {
        self.weights.iter().map(|(&edge, &weight)| (edge, weight))
    }

    /// Adds a weighted edge.
    ///
    /// # Returns
    ///
    /// `true` if the edge was inserted. An existing edge is left untouched,
    /// weight included, and `false` is returned.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, weight: i64) -> bool {
        if !self.graph.add_edge(source, target) {
            return false;
        }
        self.weights.insert(Edge::new(source, target), weight);
        self.debug_check_lockstep();
        true
    }

    /// Replaces the weight of an existing edge.
    ///
    /// # Returns
    ///
    /// The previous weight, or `None` if the edge does not exist (nothing is inserted).
    pub fn set_weight(&mut self, source: NodeId, target: NodeId, weight: i64) -> Option<i64> {
        self.weights
            .get_mut(&Edge::new(source, target))
            .map(|slot| std::mem::replace(slot, weight))
    }

    /// Removes a node with every incident edge and its weight.
    ///
    /// Follows [`DirectedGraph::remove_node`]: `false` if out of range.
    pub fn remove_node(&mut self, node: NodeId) -> bool {
        if !self.graph.remove_node(node) {
            return false;
        }
        self.weights
            .retain(|edge, _| edge.source != node && edge.target != node);
        self.debug_check_lockstep();
        true
    }

    /// Removes an edge and its weight.
    ///
    /// Follows [`DirectedGraph::remove_edge`]: `false` if the edge does not exist.
    pub fn remove_edge(&mut self, source: NodeId, target: NodeId) -> bool {
        if !self.graph.remove_edge(source, target) {
            return false;
        }
        self.weights.remove(&Edge::new(source, target));
        self.debug_check_lockstep();
        true
    }

    /// Computes the maximum flow from `source` to `sink`.
    ///
    /// See [`algorithms::max_flow`].
    ///
    /// # Errors
    ///
    /// Returns an error for out-of-range or identical endpoints, or when the
    /// flow overflows `i64`.
    pub fn max_flow(&self, source: NodeId, sink: NodeId) -> Result<i64> {
        algorithms::max_flow(self, source, sink)
    }

    #[inline]
    fn debug_check_lockstep(&self) {
        debug_assert_eq!(self.weights.len(), self.graph.edge_count());
        debug_assert!(self
            .weights
            .keys()
            .all(|edge| self.graph.contains_edge(edge.source, edge.target)));
    }
}

impl GraphBase for WeightedGraph {
    fn node_count(&self) -> usize {
        self.graph.node_count()
    }
}

impl Successors for WeightedGraph {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.successors(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(index: usize) -> NodeId {
        NodeId::new(index)
    }

    #[test]
    fn test_from_weighted_edges_first_weight_wins() {
        let graph = WeightedGraph::from_weighted_edges([(0, 1, 4), (0, 1, 9), (1, 2, -3)]);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.weight(n(0), n(1)), Some(4));
        assert_eq!(graph.weight(n(1), n(2)), Some(-3));
    }

    #[test]
    fn test_set_weight() {
        let mut graph = WeightedGraph::from_weighted_edges([(0, 1, 4)]);
        assert_eq!(graph.set_weight(n(0), n(1), 6), Some(4));
        assert_eq!(graph.weight(n(0), n(1)), Some(6));
        assert_eq!(graph.set_weight(n(1), n(0), 6), None);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_remove_inner_node_drops_weights() {
        let mut graph = WeightedGraph::from_weighted_edges([(0, 1, 1), (1, 2, 2), (2, 0, 3)]);
        assert!(graph.remove_node(n(1)));
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.weighted_edges().count(), 1);
        assert_eq!(graph.weight(n(2), n(0)), Some(3));
    }

    #[test]
    fn test_remove_node_out_of_range() {
        let mut graph = WeightedGraph::from_weighted_edges([(0, 1, 1)]);
        assert!(!graph.remove_node(n(3)));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = WeightedGraph::from_weighted_edges([(0, 1, 1), (1, 0, 2)]);
        assert!(graph.remove_edge(n(1), n(0)));
        assert!(!graph.remove_edge(n(1), n(0)));
        assert_eq!(graph.weight(n(1), n(0)), None);
        assert_eq!(graph.weight(n(0), n(1)), Some(1));
    }

    #[test]
    fn test_algorithms_run_on_weighted_graph() {
        let graph = WeightedGraph::from_weighted_edges([(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
        assert!(algorithms::has_cycle(&graph));
        assert_eq!(graph.max_flow(n(0), n(2)), Ok(1));
    }
}
