use thiserror::Error;

use crate::graph::NodeId;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Mutations on a [`crate::graph::DirectedGraph`] report failure through their boolean return
/// value and never produce an `Error`. The variants below cover caller-triggerable precondition
/// violations: malformed matrices handed to a constructor, random edits that ask for more than
/// the graph holds, flow queries on ids the graph does not know, and a coloring run that fails
/// to settle.
///
/// # Error Categories
///
/// ## Matrix Errors
/// - [`Error::InvalidDimensions`] - A square matrix was required
/// - [`Error::RaggedMatrix`] - Rows of a matrix have different widths
/// - [`Error::InvalidMatrixEntry`] - An adjacency matrix contains something other than 0 or 1
///
/// ## Graph Errors
/// - [`Error::InsufficientEdges`] - More edges requested for removal than the graph contains
/// - [`Error::NodeOutOfRange`] - A node id outside `[0, node_count)`
/// - [`Error::InvalidFlowEndpoints`] - Flow source and sink are the same node
/// - [`Error::FlowOverflow`] - A flow total or residual capacity exceeds `i64`
///
/// ## Coloring Errors
/// - [`Error::CyclicIncidence`] - The incidence matrix does not describe an acyclic graph
/// - [`Error::ColoringDiverged`] - Color refinement hit the configured pass limit
///
/// # Examples
///
/// ```rust
/// use canongraph::{Error, graph::DirectedGraph, utils::Matrix};
///
/// let matrix = Matrix::<u8>::zeroed(2, 3);
/// match DirectedGraph::from_matrix(&matrix) {
///     Err(Error::InvalidDimensions { rows, cols }) => {
///         assert_eq!((rows, cols), (2, 3));
///     }
///     _ => unreachable!(),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The matrix is not square.
    ///
    /// Adjacency and incidence matrices describe a relation over a single node set, so both
    /// dimensions must agree.
    #[error("Matrix must be square, got {rows}x{cols}")]
    InvalidDimensions {
        /// Number of rows in the offending matrix
        rows: usize,
        /// Number of columns in the offending matrix
        cols: usize,
    },

    /// A matrix was built from rows of unequal length.
    #[error("Row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        /// Index of the first row whose width differs
        row: usize,
        /// Width of the first row
        expected: usize,
        /// Width of the offending row
        found: usize,
    },

    /// An adjacency matrix contains an entry other than 0 or 1.
    #[error("Adjacency matrix entry ({row}, {col}) is neither 0 nor 1")]
    InvalidMatrixEntry {
        /// Row of the offending entry
        row: usize,
        /// Column of the offending entry
        col: usize,
    },

    /// Random edge removal requested more edges than the graph holds.
    #[error("Cannot remove {requested} edges from a graph with {available} edges")]
    InsufficientEdges {
        /// Number of edges the caller asked to remove
        requested: usize,
        /// Number of edges present in the graph
        available: usize,
    },

    /// A node id is outside the graph's id range.
    #[error("Node {node} does not exist in graph with {node_count} nodes")]
    NodeOutOfRange {
        /// The offending node id
        node: NodeId,
        /// Number of nodes in the graph
        node_count: usize,
    },

    /// A flow query named the same node as source and sink.
    #[error("Flow source and sink must be distinct nodes")]
    InvalidFlowEndpoints,

    /// The flow value or a residual capacity no longer fits in an `i64`.
    #[error("Flow value overflows i64")]
    FlowOverflow,

    /// Color refinement ran out of source nodes while edges remained.
    ///
    /// Only acyclic graphs can be peeled source by source. Condense a cyclic graph with
    /// [`crate::graph::DirectedGraph::meta_graph`] before painting it.
    #[error("Incidence matrix is not acyclic: no source among {remaining} remaining nodes")]
    CyclicIncidence {
        /// Number of nodes still holding edges when peeling stalled
        remaining: usize,
    },

    /// Color refinement did not reach a fixed point.
    ///
    /// The associated value is the pass limit that was exhausted. Raise
    /// [`crate::canonical::ColoringConfig::max_passes`] if the input is legitimately large.
    #[error("Color refinement did not converge within {0} passes")]
    ColoringDiverged(usize),
}
