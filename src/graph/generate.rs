//! Random graph generation and perturbation.
//!
//! Every function takes the randomness source as an argument, so a seeded
//! generator (for example `rand::rngs::StdRng::seed_from_u64`) reproduces the
//! same graphs run after run.
//!
//! Density is expressed as `density / node_count`: each candidate ordered pair
//! is kept when a uniform draw from `0..node_count` falls below `density`, so a
//! density of `d` gives every node roughly `d` outgoing edges.
//!
//! # Examples
//!
//! ```rust
//! use canongraph::graph::generate;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let dag = generate::random_dag(&mut rng, 20, 3);
//! assert_eq!(dag.node_count(), 20);
//! assert!(!dag.has_cycle());
//! ```

use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use crate::{
    graph::{DirectedGraph, NodeId},
    Error, Result,
};

/// Generates a random directed graph without self-loops.
///
/// Each ordered pair `(i, j)` with `i != j` is present with probability
/// `density / node_count` (capped at 1).
pub fn random_graph<R: Rng + ?Sized>(
    rng: &mut R,
    node_count: usize,
    density: usize,
) -> DirectedGraph {
    let mut graph = DirectedGraph::with_nodes(node_count);
    for i in 0..node_count {
        for j in 0..node_count {
            if i != j && rng.gen_range(0..node_count) < density {
                graph.add_edge(NodeId::new(i), NodeId::new(j));
            }
        }
    }

    debug!(
        node_count,
        density,
        edge_count = graph.edge_count(),
        "generated random graph"
    );
    graph
}

/// Generates a random directed acyclic graph.
///
/// Nodes are ranked by a random permutation and only pairs that point from a
/// lower rank to a higher rank are candidates, each kept with probability
/// `density / node_count`. The result is acyclic by construction while the
/// topological order stays hidden behind the permutation.
pub fn random_dag<R: Rng + ?Sized>(
    rng: &mut R,
    node_count: usize,
    density: usize,
) -> DirectedGraph {
    let mut rank: Vec<usize> = (0..node_count).collect();
    rank.shuffle(rng);

    let mut graph = DirectedGraph::with_nodes(node_count);
    for i in 0..node_count {
        for j in 0..node_count {
            if rank[i] < rank[j] && rng.gen_range(0..node_count) < density {
                graph.add_edge(NodeId::new(i), NodeId::new(j));
            }
        }
    }

    debug!(
        node_count,
        density,
        edge_count = graph.edge_count(),
        "generated random dag"
    );
    graph
}

impl DirectedGraph {
    /// Returns an isomorphic copy with node `i` renamed to `permutation[i]`.
    ///
    /// # Panics
    ///
    /// Panics if `permutation` is shorter than the node count or maps a node
    /// outside the id range. Passing a non-bijective map merges nodes.
    #[must_use]
    pub fn relabeled(&self, permutation: &[NodeId]) -> DirectedGraph {
        let mut graph = DirectedGraph::with_nodes(self.node_count());
        for edge in self.edges() {
            graph.add_edge(
                permutation[edge.source.index()],
                permutation[edge.target.index()],
            );
        }
        graph
    }

    /// Returns an isomorphic copy under a uniformly random relabeling.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> DirectedGraph {
        let mut permutation: Vec<NodeId> = (0..self.node_count()).map(NodeId::new).collect();
        permutation.shuffle(rng);
        self.relabeled(&permutation)
    }

    /// Removes `count` distinct edges chosen uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientEdges`] if `count` exceeds the edge count; the
    /// graph is left unchanged.
    pub fn remove_random_edges<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
    ) -> Result<()> {
        let available = self.edge_count();
        if count > available {
            return Err(Error::InsufficientEdges {
                requested: count,
                available,
            });
        }

        let edges: Vec<_> = self.edges().into_iter().collect();
        for edge in edges.choose_multiple(rng, count) {
            self.remove_edge(edge.source, edge.target);
        }

        debug!(removed = count, remaining = self.edge_count(), "removed random edges");
        Ok(())
    }
}
