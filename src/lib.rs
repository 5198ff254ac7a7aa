// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # canongraph
//!
//! A directed-graph analysis engine with a canonical edge-coloring procedure for
//! structural comparison of acyclic graphs.
//!
//! ## Features
//!
//! - **Mutable graph store** - Dense node ids, adjacency sets, a cached edge counter and compaction
//! - **Structural analysis** - DFS, cycle detection, topological sort and Tarjan SCC
//! - **Condensation** - Collapses strongly connected components into an acyclic meta-graph
//! - **Simple cycles** - Enumerates elementary cycles restricted to their component
//! - **Canonical coloring** - Iterative edge-color refinement over the signed incidence matrix
//! - **Max flow** - Augmenting-path flow over a weighted variant of the store
//! - **Random generation** - Seeded graphs and DAGs for testing and benchmarking
//!
//! ## Quick Start
//!
//! ```rust
//! use canongraph::prelude::*;
//!
//! let graph = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3)]);
//!
//! // One three-node component and a tail
//! let labels = graph.scc();
//! assert!(labels.is_cyclic());
//! assert!(labels.same_component(NodeId::new(0), NodeId::new(2)));
//! assert_eq!(labels.component_count(), 2);
//!
//! // The meta-graph is acyclic and can be painted
//! let meta = graph.meta_graph();
//! let description = paint_graph(&meta.incidence_matrix())?;
//! assert_eq!(description.node_count(), 2);
//! # Ok::<(), canongraph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! The crate is split into a graph side and a coloring side that meet at a matrix:
//!
//! - [`graph`] - The store, its weighted variant, traversal and component algorithms
//! - [`canonical`] - The refinement engine and the description it produces
//! - [`utils`] - The dense [`Matrix`](utils::Matrix) both sides exchange
//!
//! Algorithms are generic over the [`graph::Successors`] trait, so the same SCC or
//! topological sort code runs on a [`graph::DirectedGraph`], a
//! [`graph::WeightedGraph`], or any other adjacency structure.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and installs no subscriber. Compaction, each
//! coloring pass and max-flow totals log at `debug`, individual refinement rounds
//! and augmenting paths at `trace`, and a coloring run that hits its pass limit at
//! `warn`.
//!
//! ## Error Handling
//!
//! Graph mutations report success through their boolean return value. Everything
//! a caller can get wrong up front, such as a ragged matrix or an unknown flow
//! endpoint, is reported as an [`Error`]:
//!
//! ```rust
//! use canongraph::{graph::DirectedGraph, utils::Matrix, Error};
//!
//! let ragged = Matrix::<u8>::from_rows(vec![vec![0, 1], vec![0]]);
//! assert!(matches!(ragged, Err(Error::RaggedMatrix { row: 1, .. })));
//!
//! let square = Matrix::<u8>::from_rows(vec![vec![0, 1], vec![0, 0]])?;
//! assert_eq!(DirectedGraph::from_matrix(&square)?.edge_count(), 1);
//! # Ok::<(), canongraph::Error>(())
//! ```
//!
//! ## Development and Testing
//!
//! ### Fuzzing
//!
//! ```bash
//! # Run fuzzer
//! cargo +nightly fuzz run graph_ops --release
//!
//! # Multi-core fuzzing
//! cargo +nightly fuzz run graph_ops --release -- -jobs=4 -fork=1
//! ```
//!
//! ### Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! ```

mod error;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use canongraph::prelude::*;
///
/// let graph = DirectedGraph::from_edges([(0, 1)]);
/// assert_eq!(topological_sort(&graph), Some(vec![NodeId::new(0), NodeId::new(1)]));
/// ```
pub mod prelude;

/// Canonical edge coloring of acyclic graphs
///
/// # Key Types
///
/// - [`canonical::EdgeColoring`] - The refinement state
/// - [`canonical::CanonicalDescription`] - The per-node result and its canonical form
/// - [`canonical::ColoringConfig`] - Pass limit and direction alternation
///
/// # Main Functions
///
/// - [`canonical::paint_graph`] - Paint an incidence matrix with defaults
/// - [`canonical::describe`] - Paint a graph, condensing it first when cyclic
/// - [`canonical::are_equivalent`] - Compare two incidence matrices
pub mod canonical;

/// Directed graph store and structural algorithms
pub mod graph;

/// Shared data structures
pub mod utils;

/// `canongraph` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `canongraph` Error type
///
/// # Examples
///
/// ```rust
/// use canongraph::{graph::WeightedGraph, graph::NodeId, Error};
///
/// let graph = WeightedGraph::from_weighted_edges([(0, 1, 5)]);
/// match graph.max_flow(NodeId::new(0), NodeId::new(7)) {
///     Ok(flow) => println!("flow: {}", flow),
///     Err(Error::NodeOutOfRange { node, .. }) => println!("unknown node {}", node),
///     Err(e) => println!("error: {}", e),
/// }
/// ```
pub use error::Error;
