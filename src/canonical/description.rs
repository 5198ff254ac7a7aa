//! Canonical per-node description produced by color refinement.

use std::fmt;

use sha1::{Digest, Sha1};

use crate::{canonical::refine::node_descriptor, utils::Matrix};

/// The description matrix of a colored graph.
///
/// Row `i` holds the sorted non-zero edge colors incident to node `i`, negative
/// for incoming and positive for outgoing edges, padded with zeros to the width of
/// the longest row.
///
/// Row order follows node ids and is therefore not itself canonical. Two
/// descriptions are compared through [`canonical_form`](Self::canonical_form),
/// which sorts the rows; rows are already sorted internally, so no column
/// normalization is needed.
///
/// # Examples
///
/// ```rust
/// use canongraph::canonical::paint_graph;
/// use canongraph::graph::DirectedGraph;
///
/// let a = DirectedGraph::from_edges([(0, 1), (0, 2)]);
/// let b = DirectedGraph::from_edges([(2, 0), (2, 1)]);
///
/// let da = paint_graph(&a.incidence_matrix())?;
/// let db = paint_graph(&b.incidence_matrix())?;
/// assert_ne!(da, db);
/// assert!(da.is_equivalent(&db));
/// assert_eq!(da.digest(), db.digest());
/// # Ok::<(), canongraph::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalDescription {
    matrix: Matrix<i32>,
}

impl CanonicalDescription {
    /// Builds the description from an edge-color matrix.
    pub(crate) fn from_colors(colors: &Matrix<i32>) -> Self {
        let mut rows: Vec<Vec<i32>> = (0..colors.rows())
            .map(|node| node_descriptor(colors, node))
            .collect();

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, 0);
        }

        let mut matrix = Matrix::zeroed(rows.len(), width);
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                matrix[(r, c)] = value;
            }
        }
        CanonicalDescription { matrix }
    }

    /// Returns the raw description matrix, rows in node id order.
    #[must_use]
    pub fn matrix(&self) -> &Matrix<i32> {
        &self.matrix
    }

    /// Consumes the description and returns the raw matrix.
    #[must_use]
    pub fn into_matrix(self) -> Matrix<i32> {
        self.matrix
    }

    /// Returns the number of described nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.matrix.rows()
    }

    /// Returns the description of a single node, padding included.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    #[must_use]
    pub fn node(&self, node: usize) -> &[i32] {
        self.matrix.row(node)
    }

    /// Returns the description with its rows sorted lexicographically.
    ///
    /// This form no longer depends on how the nodes were numbered.
    #[must_use]
    pub fn canonical_form(&self) -> Matrix<i32> {
        self.matrix.row_sorted_with_indices().1
    }

    /// Returns `true` if both descriptions have the same canonical form.
    ///
    /// Equal canonical forms are necessary for two graphs to be isomorphic, not
    /// sufficient.
    #[must_use]
    pub fn is_equivalent(&self, other: &CanonicalDescription) -> bool {
        self.canonical_form() == other.canonical_form()
    }

    /// Returns the SHA-1 fingerprint of the canonical form.
    ///
    /// The dimensions are hashed ahead of the little-endian values, so forms that
    /// only differ in shape never collide trivially.
    #[must_use]
    pub fn digest(&self) -> [u8; 20] {
        let form = self.canonical_form();

        let mut hasher = Sha1::new();
        hasher.update((form.rows() as u64).to_le_bytes());
        hasher.update((form.cols() as u64).to_le_bytes());
        for row in form.iter_rows() {
            for value in row {
                hasher.update(value.to_le_bytes());
            }
        }
        hasher.finalize().into()
    }
}

impl fmt::Display for CanonicalDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.matrix)
    }
}
