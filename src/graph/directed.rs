//! Core directed graph store.
//!
//! This module provides [`DirectedGraph`], an adjacency-set graph over dense
//! integer node ids. It owns the adjacency relation and an incrementally
//! maintained edge counter, offers the mutations needed to edit a graph in place
//! (including id compaction), and exports the matrix representations consumed by
//! the canonical coloring engine.
//!
//! The analysis algorithms live in [`crate::graph::algorithms`]; the methods at the
//! bottom of this file are thin conveniences that delegate to them.

use std::collections::BTreeSet;

use tracing::debug;

use crate::{
    graph::{
        algorithms::{self, Condensation, SccLabels},
        edge::{Edge, EdgeSet},
        node::{NodeId, NodeRole},
        traits::{GraphBase, Successors},
    },
    utils::Matrix,
    Error, Result,
};

/// A directed graph stored as one ordered adjacency set per node.
///
/// `adjacency[i]` holds every `j` such that the edge `i -> j` exists. Sets give the
/// store its two structural guarantees: at most one edge per ordered pair, and
/// successors are always visited in ascending id order.
///
/// # Node ids
///
/// Ids are dense in `[0, node_count)`. Adding an edge grows the id space to cover
/// both endpoints. Removing the last id shrinks it; removing any other id leaves an
/// isolated placeholder behind until [`compact`](Self::compact) renumbers the graph.
///
/// # Edge counter
///
/// [`edge_count`](Self::edge_count) is a cache updated by every mutation.
/// [`count_edges`](Self::count_edges) recomputes it from the adjacency sets and is
/// used to audit the cache in debug builds.
///
/// # Thread Safety
///
/// `DirectedGraph` is [`Send`] and [`Sync`]. It has no interior mutability, so
/// concurrent mutation requires external synchronization (one exclusive guard per
/// graph, held for the whole operation). Values returned from queries are
/// independent snapshots.
///
/// # Examples
///
/// ```rust
/// use canongraph::graph::{DirectedGraph, NodeId};
///
/// let mut graph = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 0)]);
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert!(graph.has_cycle());
///
/// assert!(graph.remove_edge(NodeId::new(2), NodeId::new(0)));
/// assert!(!graph.has_cycle());
/// assert_eq!(
///     graph.topological_sort(),
///     Some(vec![NodeId::new(0), NodeId::new(1), NodeId::new(2)])
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    /// Outgoing neighbours per node
    adjacency: Vec<BTreeSet<NodeId>>,
    /// Cached number of edges, always equal to the sum of adjacency set sizes
    edge_count: usize,
}

impl DirectedGraph {
    /// Creates an empty graph with no nodes.
    #[must_use]
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a graph with `node_count` isolated nodes.
    #[must_use]
    pub fn with_nodes(node_count: usize) -> Self {
        DirectedGraph {
            adjacency: vec![BTreeSet::new(); node_count],
            edge_count: 0,
        }
    }

    /// Creates a graph from a collection of edges.
    ///
    /// The node count becomes one more than the largest endpoint. Duplicate edges
    /// collapse into one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use canongraph::graph::DirectedGraph;
    ///
    /// let graph = DirectedGraph::from_edges([(0, 1), (0, 1), (3, 2)]);
    /// assert_eq!(graph.node_count(), 4);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = DirectedGraph::new();
        for edge in edges {
            let edge = edge.into();
            graph.add_edge(edge.source, edge.target);
        }
        graph
    }

    /// Creates a graph from a dense adjacency representation.
    ///
    /// Entry `i` lists the targets of node `i`. The node count is the larger of the
    /// number of lists and one more than the largest target.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use canongraph::graph::{DirectedGraph, NodeId};
    ///
    /// let graph = DirectedGraph::from_adjacency(vec![vec![1, 2], vec![2], vec![]]);
    /// assert_eq!(graph.edge_count(), 3);
    /// assert!(graph.contains_edge(NodeId::new(1), NodeId::new(2)));
    /// ```
    pub fn from_adjacency<I, S>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = usize>,
    {
        let mut graph = DirectedGraph::new();
        for (source, targets) in adjacency.into_iter().enumerate() {
            graph.ensure_node(source);
            for target in targets {
                graph.add_edge(NodeId::new(source), NodeId::new(target));
            }
        }
        graph
    }

    /// Creates a graph from a square 0/1 adjacency matrix.
    ///
    /// A `1` at `(i, j)` becomes the edge `i -> j`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the matrix is not square, and
    /// [`Error::InvalidMatrixEntry`] if any entry is neither 0 nor 1.
    pub fn from_matrix(matrix: &Matrix<u8>) -> Result<Self> {
        if !matrix.is_square() {
            return Err(Error::InvalidDimensions {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }

        let mut graph = DirectedGraph::with_nodes(matrix.rows());
        for (row, values) in matrix.iter_rows().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                match value {
                    0 => {}
                    1 => {
                        graph.add_edge(NodeId::new(row), NodeId::new(col));
                    }
                    _ => return Err(Error::InvalidMatrixEntry { row, col }),
                }
            }
        }
        Ok(graph)
    }

    /// Returns the number of node ids, isolated placeholders included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the cached number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Recomputes the number of edges from the adjacency sets.
    ///
    /// Always equal to [`edge_count`](Self::edge_count); provided for auditing.
    #[must_use]
    pub fn count_edges(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns `true` if the edge `source -> target` exists.
    #[must_use]
    pub fn contains_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.adjacency
            .get(source.index())
            .is_some_and(|targets| targets.contains(&target))
    }

    /// Returns the successors of `node` in ascending id order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency[node.index()].iter().copied()
    }

    /// Returns the number of outgoing edges of `node`, or `None` if it is out of range.
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> Option<usize> {
        self.adjacency.get(node.index()).map(BTreeSet::len)
    }

    /// Adds the edge `source -> target`.
    ///
    /// Grows the id space if either endpoint is beyond the current node count.
    ///
    /// # Returns
    ///
    /// `true` if the edge was newly inserted, `false` if it already existed.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> bool {
        self.ensure_node(source.index().max(target.index()));

        let inserted = self.adjacency[source.index()].insert(target);
        if inserted {
            self.edge_count += 1;
        }
        self.debug_check_edge_count();
        inserted
    }

    /// Removes a node and every edge touching it.
    ///
    /// Removing the highest id shrinks the graph by one. Removing any other id
    /// keeps the id in place as an isolated placeholder so that other ids stay
    /// valid; call [`compact`](Self::compact) to renumber afterwards.
    ///
    /// # Returns
    ///
    /// `false` if `node` is out of range, `true` otherwise.
    pub fn remove_node(&mut self, node: NodeId) -> bool {
        let idx = node.index();
        if idx >= self.adjacency.len() {
            return false;
        }

        let mut removed = if idx + 1 == self.adjacency.len() {
            self.adjacency.pop().map_or(0, |targets| targets.len())
        } else {
            std::mem::take(&mut self.adjacency[idx]).len()
        };

        for targets in &mut self.adjacency {
            if targets.remove(&node) {
                removed += 1;
            }
        }

        self.edge_count -= removed;
        self.debug_check_edge_count();
        true
    }

    /// Removes the edge `source -> target`.
    ///
    /// # Returns
    ///
    /// `false` if `source` is out of range or the edge does not exist.
    pub fn remove_edge(&mut self, source: NodeId, target: NodeId) -> bool {
        let Some(targets) = self.adjacency.get_mut(source.index()) else {
            return false;
        };

        if targets.remove(&target) {
            self.edge_count -= 1;
            self.debug_check_edge_count();
            true
        } else {
            false
        }
    }

    /// Exchanges the identities of two nodes.
    ///
    /// The outgoing sets of `a` and `b` trade places and every reference to `a`
    /// anywhere in the graph becomes `b` and vice versa. The result is isomorphic to
    /// the input with the two labels swapped.
    ///
    /// # Returns
    ///
    /// `false` if either id is out of range.
    pub fn swap_nodes(&mut self, a: NodeId, b: NodeId) -> bool {
        let len = self.adjacency.len();
        if a.index() >= len || b.index() >= len {
            return false;
        }
        if a == b {
            return true;
        }

        self.adjacency.swap(a.index(), b.index());
        for targets in &mut self.adjacency {
            let has_a = targets.contains(&a);
            let has_b = targets.contains(&b);
            if has_a && !has_b {
                targets.remove(&a);
                targets.insert(b);
            } else if has_b && !has_a {
                targets.remove(&b);
                targets.insert(a);
            }
        }

        self.debug_check_edge_count();
        true
    }

    /// Removes every isolated node and renumbers the survivors densely.
    ///
    /// Each isolated id below the new node count is exchanged with a surviving id
    /// from the tail of the id space, after which the tail (now holding only
    /// isolated nodes) is truncated. Ids of nodes that were not relocated are left
    /// unchanged. Calling this on a graph without isolated nodes is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use canongraph::graph::{DirectedGraph, NodeId};
    ///
    /// let mut graph = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 3)]);
    /// graph.remove_edge(NodeId::new(0), NodeId::new(1));
    /// graph.compact();
    ///
    /// // Node 0 became isolated and its slot was taken over by node 3
    /// assert_eq!(graph.node_count(), 3);
    /// assert!(graph.contains_edge(NodeId::new(2), NodeId::new(0)));
    /// ```
    pub fn compact(&mut self) {
        let roles = self.node_roles();
        let isolated: Vec<usize> = roles
            .iter()
            .enumerate()
            .filter(|(_, role)| **role == NodeRole::Isolated)
            .map(|(idx, _)| idx)
            .collect();
        if isolated.is_empty() {
            return;
        }

        let old_len = self.adjacency.len();
        let new_len = old_len - isolated.len();

        let holes: Vec<usize> = isolated.iter().copied().filter(|&i| i < new_len).collect();
        let movers: Vec<usize> = (new_len..old_len)
            .rev()
            .filter(|&i| roles[i] != NodeRole::Isolated)
            .collect();
        debug_assert_eq!(holes.len(), movers.len());

        for (&hole, &mover) in holes.iter().zip(&movers) {
            self.swap_nodes(NodeId::new(hole), NodeId::new(mover));
        }
        self.adjacency.truncate(new_len);

        debug!(
            removed = isolated.len(),
            relocated = holes.len(),
            node_count = new_len,
            "compacted graph"
        );
        self.debug_check_edge_count();
    }

    /// Returns every edge, ordered by `(source, target)`.
    #[must_use]
    pub fn edges(&self) -> EdgeSet {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(source, targets)| {
                targets
                    .iter()
                    .map(move |&target| Edge::new(NodeId::new(source), target))
            })
            .collect()
    }

    /// Exports the plain adjacency matrix: `M[i][j] = 1` iff `i -> j`.
    #[must_use]
    pub fn adjacency_matrix(&self) -> Matrix<u8> {
        let n = self.adjacency.len();
        let mut matrix = Matrix::zeroed(n, n);
        for edge in self.edges() {
            matrix[(edge.source.index(), edge.target.index())] = 1;
        }
        matrix
    }

    /// Exports the signed incidence matrix.
    ///
    /// For every edge `i -> j`, `M[i][j] = +1` and `M[j][i] = -1`; all other cells are 0.
    /// Both cells of a pair are used to encode one arrow, so the matrix cannot represent
    /// a 2-cycle (`i -> j` together with `j -> i`) or a self-loop: the later edge in
    /// `(source, target)` order overwrites the shared cell. Feed it acyclic graphs, such
    /// as a [`meta_graph`](Self::meta_graph), or go through
    /// [`describe`](crate::canonical::describe), which condenses cyclic graphs itself.
    #[must_use]
    pub fn incidence_matrix(&self) -> Matrix<i32> {
        let n = self.adjacency.len();
        let mut matrix = Matrix::zeroed(n, n);
        for edge in self.edges() {
            matrix[(edge.source.index(), edge.target.index())] = 1;
            matrix[(edge.target.index(), edge.source.index())] = -1;
        }
        matrix
    }

    /// Derives the [`NodeRole`] of every node.
    #[must_use]
    pub fn node_roles(&self) -> Vec<NodeRole> {
        let mut has_incoming = vec![false; self.adjacency.len()];
        for targets in &self.adjacency {
            for target in targets {
                has_incoming[target.index()] = true;
            }
        }

        self.adjacency
            .iter()
            .zip(has_incoming)
            .map(|(targets, incoming)| NodeRole::from_degrees(incoming, !targets.is_empty()))
            .collect()
    }

    /// Returns a new graph with every edge direction flipped.
    #[must_use]
    pub fn reversed(&self) -> DirectedGraph {
        let mut graph = DirectedGraph::with_nodes(self.adjacency.len());
        for edge in self.edges() {
            graph.add_edge(edge.target, edge.source);
        }
        graph
    }

    /// Turns every edge into a node of its own.
    ///
    /// The result keeps the original `node_count` nodes and appends one node per
    /// edge, in `(source, target)` order. The node created for `u -> v` gets the
    /// edges `n -> u` and `n -> v`, so the result is always a DAG of depth one.
    /// Coloring this form makes the refinement see edges as first-class entities.
    #[must_use]
    pub fn to_bipartite_dag(&self) -> DirectedGraph {
        let node_count = self.adjacency.len();
        let mut graph = DirectedGraph::with_nodes(node_count + self.edge_count);

        for (offset, edge) in self.edges().into_iter().enumerate() {
            let edge_node = NodeId::new(node_count + offset);
            graph.add_edge(edge_node, edge.source);
            graph.add_edge(edge_node, edge.target);
        }
        graph
    }

    /// Grows the id space so that `idx` is a valid node.
    fn ensure_node(&mut self, idx: usize) {
        if idx >= self.adjacency.len() {
            self.adjacency.resize_with(idx + 1, BTreeSet::new);
        }
    }

    #[inline]
    fn debug_check_edge_count(&self) {
        debug_assert_eq!(
            self.edge_count,
            self.count_edges(),
            "edge counter diverged from adjacency"
        );
    }
}

// Algorithm convenience methods
impl DirectedGraph {
    /// Depth-first pre-order over the whole graph.
    ///
    /// A new traversal starts at each not-yet-visited id in ascending order, so
    /// every node appears exactly once.
    #[must_use]
    pub fn dfs(&self) -> Vec<NodeId> {
        algorithms::dfs_forest(self)
    }

    /// Returns `true` if the graph contains a cycle (self-loops included).
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        algorithms::has_cycle(self)
    }

    /// Computes a topological ordering.
    ///
    /// Returns `None` if the graph contains a cycle.
    #[must_use]
    pub fn topological_sort(&self) -> Option<Vec<NodeId>> {
        algorithms::topological_sort(self)
    }

    /// Labels every node with the representative of its strongly connected component.
    #[must_use]
    pub fn scc(&self) -> SccLabels {
        algorithms::strongly_connected_components(self)
    }

    /// Collapses every strongly connected component into a single node.
    ///
    /// Meta-node ids are dense, one per component, and follow the order of the
    /// components' representative ids, so they do not line up with the original
    /// ids once anything was collapsed. Use [`condensation`](Self::condensation)
    /// to get the original-to-meta mapping as a [`Condensation`]. An acyclic graph
    /// is returned as an identical copy.
    #[must_use]
    pub fn meta_graph(&self) -> DirectedGraph {
        self.condensation().graph
    }

    /// Collapses every strongly connected component and reports the node mapping.
    #[must_use]
    pub fn condensation(&self) -> Condensation {
        algorithms::condensation(self, &self.scc())
    }

    /// Enumerates every simple cycle, each reported once starting from its smallest id.
    #[must_use]
    pub fn simple_cycles(&self) -> Vec<Vec<NodeId>> {
        algorithms::simple_cycles(self, &self.scc())
    }
}

impl GraphBase for DirectedGraph {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }
}

impl Successors for DirectedGraph {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.adjacency[node.index()].iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(index: usize) -> NodeId {
        NodeId::new(index)
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph = DirectedGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_with_nodes() {
        let graph = DirectedGraph::with_nodes(4);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.node_roles().iter().all(|r| *r == NodeRole::Isolated));
    }

    #[test]
    fn test_add_edge_grows_and_deduplicates() {
        let mut graph = DirectedGraph::new();
        assert!(graph.add_edge(n(0), n(2)));
        assert_eq!(graph.node_count(), 3);
        assert!(!graph.add_edge(n(0), n(2)));
        assert_eq!(graph.edge_count(), 1);

        assert!(graph.add_edge(n(5), n(1)));
        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_self_loop_permitted() {
        let mut graph = DirectedGraph::new();
        assert!(graph.add_edge(n(1), n(1)));
        assert_eq!(graph.node_count(), 2);
        assert!(graph.contains_edge(n(1), n(1)));
        assert_eq!(graph.node_roles()[1], NodeRole::SourceSink);
    }

    #[test]
    fn test_from_adjacency() {
        let graph = DirectedGraph::from_adjacency(vec![vec![1], vec![], vec![4]]);
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.contains_edge(n(2), n(4)));
    }

    #[test]
    fn test_from_adjacency_trailing_isolated() {
        let graph = DirectedGraph::from_adjacency(vec![vec![1], vec![], vec![]]);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_from_matrix() {
        let matrix =
            Matrix::from_rows(vec![vec![0, 1, 1], vec![0, 0, 1], vec![0, 0, 0]]).unwrap();
        let graph = DirectedGraph::from_matrix(&matrix).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.adjacency_matrix(), matrix);
    }

    #[test]
    fn test_from_matrix_not_square() {
        let matrix = Matrix::<u8>::zeroed(2, 3);
        assert_eq!(
            DirectedGraph::from_matrix(&matrix),
            Err(Error::InvalidDimensions { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn test_from_matrix_invalid_entry() {
        let matrix = Matrix::from_rows(vec![vec![0, 2], vec![0, 0]]).unwrap();
        assert_eq!(
            DirectedGraph::from_matrix(&matrix),
            Err(Error::InvalidMatrixEntry { row: 0, col: 1 })
        );
    }

    #[test]
    fn test_remove_node_out_of_range() {
        let mut graph = DirectedGraph::from_edges([(0, 1)]);
        assert!(!graph.remove_node(n(2)));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_remove_last_node_shrinks() {
        let mut graph = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 0), (2, 1)]);
        assert!(graph.remove_node(n(2)));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_edge(n(0), n(1)));
    }

    #[test]
    fn test_remove_inner_node_leaves_placeholder() {
        let mut graph = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 1), (1, 1)]);
        assert!(graph.remove_node(n(1)));
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.node_roles()[1], NodeRole::Isolated);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = DirectedGraph::from_edges([(0, 1), (1, 2)]);
        assert!(graph.remove_edge(n(0), n(1)));
        assert!(!graph.remove_edge(n(0), n(1)));
        assert!(!graph.remove_edge(n(7), n(1)));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_swap_nodes() {
        let mut graph = DirectedGraph::from_edges([(0, 1), (1, 2), (3, 0)]);
        assert!(graph.swap_nodes(n(0), n(2)));

        let expected = DirectedGraph::from_edges([(2, 1), (1, 0), (3, 2)]);
        assert_eq!(graph.edges(), expected.edges());
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_swap_nodes_shared_neighbour_and_self_loop() {
        let mut graph = DirectedGraph::from_edges([(2, 0), (2, 1), (0, 0)]);
        assert!(graph.swap_nodes(n(0), n(1)));

        let expected = DirectedGraph::from_edges([(2, 1), (2, 0), (1, 1)]);
        assert_eq!(graph.edges(), expected.edges());
    }

    #[test]
    fn test_swap_nodes_out_of_range() {
        let mut graph = DirectedGraph::from_edges([(0, 1)]);
        assert!(!graph.swap_nodes(n(0), n(5)));
        assert!(graph.swap_nodes(n(1), n(1)));
    }

    #[test]
    fn test_compact_removes_placeholder() {
        let mut graph = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
        graph.add_edge(n(0), n(2));
        graph.add_edge(n(2), n(4));
        assert!(graph.remove_node(n(1)));
        assert_eq!(graph.node_count(), 5);

        graph.compact();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 5);
        assert!(graph.node_roles().iter().all(|r| *r != NodeRole::Isolated));
        // Node 4 took over slot 1
        assert!(graph.contains_edge(n(1), n(0)));
        assert!(graph.contains_edge(n(3), n(1)));
    }

    #[test]
    fn test_compact_multiple_holes() {
        let mut graph = DirectedGraph::with_nodes(6);
        graph.add_edge(n(1), n(4));
        graph.add_edge(n(4), n(5));
        graph.compact();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.node_roles().iter().all(|r| *r != NodeRole::Isolated));
        assert!(!graph.has_cycle());
    }

    #[test]
    fn test_compact_is_idempotent() {
        let mut graph = DirectedGraph::with_nodes(4);
        graph.add_edge(n(3), n(0));
        graph.compact();
        let once = graph.clone();
        graph.compact();
        assert_eq!(graph, once);
    }

    #[test]
    fn test_edges_and_matrix_round_trip() {
        let graph = DirectedGraph::from_edges([(0, 3), (2, 1), (1, 0)]);
        let rebuilt = DirectedGraph::from_matrix(&graph.adjacency_matrix()).unwrap();
        assert_eq!(rebuilt.edges(), graph.edges());
    }

    #[test]
    fn test_incidence_matrix() {
        let graph = DirectedGraph::from_edges([(0, 1), (0, 2)]);
        let m = graph.incidence_matrix();
        assert_eq!(m.row(0), &[0, 1, 1]);
        assert_eq!(m.row(1), &[-1, 0, 0]);
        assert_eq!(m.row(2), &[-1, 0, 0]);
    }

    #[test]
    fn test_incidence_matrix_two_cycle_collides() {
        let two_cycle = DirectedGraph::from_edges([(0, 1), (1, 0)]);
        let back_edge = DirectedGraph::from_edges([(1, 0)]);
        assert_eq!(two_cycle.incidence_matrix(), back_edge.incidence_matrix());
    }

    #[test]
    fn test_meta_graph_ids_are_dense() {
        let graph = DirectedGraph::from_edges([(0, 2), (2, 3), (3, 2), (3, 1)]);
        let condensed = graph.condensation();
        assert_eq!(condensed.component_of, vec![n(0), n(1), n(2), n(2)]);

        let meta = graph.meta_graph();
        assert_eq!(meta, condensed.graph);
        assert_eq!(meta.node_count(), 3);
        assert_eq!(
            meta.edges(),
            EdgeSet::from([Edge::new(n(0), n(2)), Edge::new(n(2), n(1))])
        );
    }

    #[test]
    fn test_meta_graph_of_dag_is_a_copy() {
        let graph = DirectedGraph::from_edges([(2, 0), (0, 1)]);
        assert_eq!(graph.meta_graph(), graph);
        assert_eq!(graph.condensation().component_of, vec![n(0), n(1), n(2)]);
    }

    #[test]
    fn test_node_roles() {
        let mut graph = DirectedGraph::from_edges([(0, 1), (1, 2)]);
        graph.add_edge(n(4), n(4));
        let roles = graph.node_roles();
        assert_eq!(
            roles,
            vec![
                NodeRole::Source,
                NodeRole::SourceSink,
                NodeRole::Sink,
                NodeRole::Isolated,
                NodeRole::SourceSink,
            ]
        );
    }

    #[test]
    fn test_reversed() {
        let graph = DirectedGraph::from_edges([(0, 1), (1, 2)]);
        let reversed = graph.reversed();
        assert_eq!(reversed.node_count(), 3);
        assert!(reversed.contains_edge(n(1), n(0)));
        assert!(reversed.contains_edge(n(2), n(1)));
        assert_eq!(reversed.reversed(), graph);
    }

    #[test]
    fn test_to_bipartite_dag() {
        let graph = DirectedGraph::from_edges([(0, 1), (1, 0)]);
        let bipartite = graph.to_bipartite_dag();
        assert_eq!(bipartite.node_count(), 4);
        assert_eq!(bipartite.edge_count(), 4);
        assert!(bipartite.contains_edge(n(2), n(0)));
        assert!(bipartite.contains_edge(n(2), n(1)));
        assert!(bipartite.contains_edge(n(3), n(0)));
        assert!(bipartite.contains_edge(n(3), n(1)));
        assert!(!bipartite.has_cycle());
    }

    #[test]
    fn test_edge_count_matches_recount_after_mixed_edits() {
        let mut graph = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 1), (0, 3)]);
        graph.remove_node(n(1));
        graph.add_edge(n(3), n(0));
        graph.swap_nodes(n(0), n(3));
        graph.remove_edge(n(0), n(3));
        graph.compact();
        assert_eq!(graph.edge_count(), graph.count_edges());
    }
}
