//! Canonical edge coloring for structural comparison.
//!
//! This module turns the signed incidence matrix of a directed acyclic graph into
//! a [`CanonicalDescription`]: a per-node summary of edge colors that does not
//! depend on how nodes are numbered. Two graphs whose descriptions differ cannot
//! be isomorphic; equal descriptions mean no cheap structural difference was found.
//!
//! # Key Components
//!
//! - [`paint_graph`] / [`paint_graph_with`] - Single entry point: incidence matrix in, description out
//! - [`EdgeColoring`] - The refinement state machine, one pass at a time
//! - [`ColoringConfig`] - Pass limit and direction alternation
//! - [`CanonicalDescription`] - Row-canonical form, equivalence and SHA-1 digest
//! - [`describe`] - Convenience path from a [`DirectedGraph`], condensing cycles first
//! - [`are_equivalent`] - Paints two matrices in parallel and compares the results
//!
//! The engine only ever sees a [`Matrix`]; it has no dependency on the graph
//! store beyond the incidence matrix it exports.
//!
//! # Examples
//!
//! ```rust
//! use canongraph::canonical::{are_equivalent, paint_graph};
//! use canongraph::graph::{DirectedGraph, NodeId};
//!
//! let graph = DirectedGraph::from_edges([(0, 1), (0, 2)]);
//! let description = paint_graph(&graph.incidence_matrix())?;
//!
//! // Both children are structurally identical and get the same row
//! assert_eq!(description.node(1), description.node(2));
//!
//! let mut swapped = graph.clone();
//! swapped.swap_nodes(NodeId::new(1), NodeId::new(2));
//! assert!(are_equivalent(&graph.incidence_matrix(), &swapped.incidence_matrix())?);
//! # Ok::<(), canongraph::Error>(())
//! ```

mod config;
mod description;
mod refine;

pub use config::ColoringConfig;
pub use description::CanonicalDescription;
pub use refine::EdgeColoring;

use crate::{graph::DirectedGraph, utils::Matrix, Result};

/// Paints a signed incidence matrix with the default configuration.
///
/// The matrix must come from an acyclic graph. A 2-cycle or a self-loop shares
/// cells with another arrow in [`DirectedGraph::incidence_matrix`], so the
/// exported matrix silently describes a different graph and no error is raised.
/// Use [`describe`] for graphs that may contain cycles.
///
/// # Errors
///
/// Returns an error if the matrix is not square, does not describe an acyclic
/// graph, or fails to converge within the default pass limit.
pub fn paint_graph(incidence: &Matrix<i32>) -> Result<CanonicalDescription> {
    paint_graph_with(incidence, &ColoringConfig::default())
}

/// Paints a signed incidence matrix with an explicit configuration.
///
/// # Errors
///
/// See [`paint_graph`].
pub fn paint_graph_with(
    incidence: &Matrix<i32>,
    config: &ColoringConfig,
) -> Result<CanonicalDescription> {
    EdgeColoring::new(incidence)?.run(config)
}

/// Describes a graph, condensing it to its meta-graph first if it is cyclic.
///
/// Self-loops and strongly connected components cannot be expressed in an
/// incidence matrix, so a cyclic graph is described through its condensation.
///
/// # Errors
///
/// Returns [`Error::ColoringDiverged`](crate::Error::ColoringDiverged) if
/// refinement does not settle within the default pass limit.
pub fn describe(graph: &DirectedGraph) -> Result<CanonicalDescription> {
    if graph.has_cycle() {
        paint_graph(&graph.meta_graph().incidence_matrix())
    } else {
        paint_graph(&graph.incidence_matrix())
    }
}

/// Paints two incidence matrices concurrently and compares their canonical forms.
///
/// # Errors
///
/// Returns the first error either painting produced.
pub fn are_equivalent(a: &Matrix<i32>, b: &Matrix<i32>) -> Result<bool> {
    let (da, db) = rayon::join(|| paint_graph(a), || paint_graph(b));
    Ok(da?.is_equivalent(&db?))
}
