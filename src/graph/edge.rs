//! Directed edge value type.
//!
//! An [`Edge`] is an ordered pair `(source, target)` meaning an arrow from
//! `source` to `target`. The graph store holds at most one edge per ordered
//! pair, so an edge is fully identified by its endpoints and needs no separate
//! id. [`EdgeSet`] is the ordered collection returned by
//! [`DirectedGraph::edges`](crate::graph::DirectedGraph::edges).

use std::{collections::BTreeSet, fmt};

use crate::graph::NodeId;

/// An ordered set of edges, sorted by `(source, target)`.
pub type EdgeSet = BTreeSet<Edge>;

/// A directed edge from `source` to `target`.
///
/// Edges order lexicographically by `(source, target)`, which gives
/// [`EdgeSet`] a deterministic iteration order.
///
/// # Examples
///
/// ```rust
/// use canongraph::graph::{Edge, NodeId};
///
/// let edge = Edge::from((0, 1));
/// assert_eq!(edge.source, NodeId::new(0));
/// assert_eq!(edge.target, NodeId::new(1));
/// assert_eq!(edge.reversed(), Edge::from((1, 0)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    /// Node the arrow leaves
    pub source: NodeId,
    /// Node the arrow enters
    pub target: NodeId,
}

impl Edge {
    /// Creates an edge from `source` to `target`.
    #[must_use]
    #[inline]
    pub const fn new(source: NodeId, target: NodeId) -> Self {
        Edge { source, target }
    }

    /// Returns the same edge with its direction flipped.
    #[must_use]
    #[inline]
    pub const fn reversed(self) -> Self {
        Edge {
            source: self.target,
            target: self.source,
        }
    }

    /// Returns `true` if the edge starts and ends at the same node.
    #[must_use]
    #[inline]
    pub fn is_self_loop(self) -> bool {
        self.source == self.target
    }
}

impl From<(usize, usize)> for Edge {
    #[inline]
    fn from((source, target): (usize, usize)) -> Self {
        Edge::new(NodeId::new(source), NodeId::new(target))
    }
}

impl From<(NodeId, NodeId)> for Edge {
    #[inline]
    fn from((source, target): (NodeId, NodeId)) -> Self {
        Edge::new(source, target)
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({} -> {})", self.source.index(), self.target.index())
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.target)
    }
}
