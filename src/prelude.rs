//! # canongraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and
//! functions. Import it to get quick access to the graph store, the structural
//! algorithms and the canonical coloring entry points.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all canongraph operations
pub use crate::Error;

/// The result type used throughout canongraph
pub use crate::Result;

/// Dense matrix exchanged between the store and the coloring engine
pub use crate::utils::Matrix;

// ================================================================================================
// Graph Store
// ================================================================================================

/// Graph stores and identifiers
pub use crate::graph::{DirectedGraph, Edge, EdgeSet, NodeId, NodeRole, WeightedGraph};

/// Traits the algorithms are generic over
pub use crate::graph::{GraphBase, Successors};

// ================================================================================================
// Structural Algorithms
// ================================================================================================

/// Traversal, ordering and component analysis
pub use crate::graph::algorithms::{
    condensation, dfs, dfs_forest, has_cycle, max_flow, simple_cycles,
    strongly_connected_components, topological_sort, Condensation, SccLabels,
};

/// Random generation with an injected randomness source
pub use crate::graph::generate::{random_dag, random_graph};

// ================================================================================================
// Canonical Coloring
// ================================================================================================

/// Coloring engine, configuration and result
pub use crate::canonical::{
    are_equivalent, describe, paint_graph, paint_graph_with, CanonicalDescription,
    ColoringConfig, EdgeColoring,
};
