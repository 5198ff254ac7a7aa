//! Node identifier and derived node roles.
//!
//! This module provides the [`NodeId`] type, a strongly-typed identifier for nodes
//! within a directed graph, and [`NodeRole`], the role a node plays given its
//! incoming and outgoing edges. Node ids are dense: a graph with `n` nodes uses
//! exactly the ids `0..n`.

use std::fmt;

use strum::{Display, EnumIter};

/// A strongly-typed identifier for nodes within a directed graph.
///
/// `NodeId` wraps a `usize` index, providing type safety to prevent accidental
/// mixing of node ids with counts, colors or matrix values. Ids are dense and
/// double as row/column indices into the matrices exported by
/// [`DirectedGraph`](crate::graph::DirectedGraph).
///
/// # Examples
///
/// ```rust
/// use canongraph::graph::{DirectedGraph, NodeId};
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge(NodeId::new(0), NodeId::new(3));
///
/// // Adding an edge grows the id space up to the largest endpoint
/// assert_eq!(graph.node_count(), 4);
/// assert!(graph.contains_edge(NodeId::new(0), NodeId::new(3)));
/// ```
///
/// # Thread Safety
///
/// `NodeId` is [`Copy`], [`Send`], and [`Sync`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw index value.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw node index (0-based)
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw index value of this node identifier.
    ///
    /// The index can be used directly to index per-node vectors and matrix rows.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

/// The structural role of a node, derived from its degree.
///
/// Roles are computed on demand by
/// [`DirectedGraph::node_roles`](crate::graph::DirectedGraph::node_roles) and are never
/// stored on the graph. A self-loop counts as both an incoming and an outgoing edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum NodeRole {
    /// Has outgoing edges and no incoming edges
    #[strum(serialize = "source")]
    Source,
    /// Has incoming edges and no outgoing edges
    #[strum(serialize = "sink")]
    Sink,
    /// Has both incoming and outgoing edges
    #[strum(serialize = "source-sink")]
    SourceSink,
    /// Has no edges at all
    #[strum(serialize = "isolated")]
    Isolated,
}

impl NodeRole {
    /// Classifies a node by whether it has incoming and outgoing edges.
    #[must_use]
    pub const fn from_degrees(has_incoming: bool, has_outgoing: bool) -> Self {
        match (has_incoming, has_outgoing) {
            (false, true) => NodeRole::Source,
            (true, false) => NodeRole::Sink,
            (true, true) => NodeRole::SourceSink,
            (false, false) => NodeRole::Isolated,
        }
    }
}
