//! Maximum flow by augmenting paths.
//!
//! The solver keeps a residual capacity per ordered pair, seeded from the edge
//! weights of a [`WeightedGraph`]. It repeatedly takes the first path a
//! depth-first search finds from source to sink over positive residual
//! capacities, pushes the path's bottleneck along it, and stops once the sink
//! is unreachable. Paths are not shortest, so the running time depends on the
//! flow value rather than only on the graph size.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, trace};

use crate::{
    graph::{Edge, NodeId, WeightedGraph},
    Error, Result,
};

/// Computes the maximum flow from `source` to `sink`.
///
/// Edge weights are capacities; non-positive weights carry no flow.
///
/// # Errors
///
/// Returns [`Error::NodeOutOfRange`] if either endpoint is not a node of the
/// graph, [`Error::InvalidFlowEndpoints`] if `source == sink`, and
/// [`Error::FlowOverflow`] if the flow value or a residual capacity exceeds
/// `i64::MAX`.
///
/// # Examples
///
/// ```rust
/// use canongraph::graph::{algorithms::max_flow, NodeId, WeightedGraph};
///
/// let graph = WeightedGraph::from_weighted_edges([(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 3)]);
/// let flow = max_flow(&graph, NodeId::new(0), NodeId::new(3))?;
/// assert_eq!(flow, 4);
/// # Ok::<(), canongraph::Error>(())
/// ```
pub fn max_flow(graph: &WeightedGraph, source: NodeId, sink: NodeId) -> Result<i64> {
    let node_count = graph.node_count();
    for node in [source, sink] {
        if node.index() >= node_count {
            return Err(Error::NodeOutOfRange { node, node_count });
        }
    }
    if source == sink {
        return Err(Error::InvalidFlowEndpoints);
    }

    let mut residual: HashMap<Edge, i64> = graph.weighted_edges().collect();

    // Residual neighbours in both directions so flow can be cancelled
    let mut neighbours = vec![BTreeSet::new(); node_count];
    for edge in residual.keys() {
        neighbours[edge.source.index()].insert(edge.target);
        neighbours[edge.target.index()].insert(edge.source);
    }

    let mut total = 0;
    let mut augmentations = 0usize;
    while let Some(path) = find_path(&neighbours, &residual, source, sink) {
        let bottleneck = path
            .windows(2)
            .map(|pair| capacity(&residual, pair[0], pair[1]))
            .min()
            .unwrap_or(0);
        if bottleneck <= 0 {
            break;
        }

        total = checked_sum(total, bottleneck)?;
        for pair in path.windows(2) {
            *residual.entry(Edge::new(pair[0], pair[1])).or_insert(0) -= bottleneck;
            let back = residual.entry(Edge::new(pair[1], pair[0])).or_insert(0);
            *back = checked_sum(*back, bottleneck)?;
        }

        augmentations += 1;
        trace!(bottleneck, path_len = path.len(), "augmented flow");
    }

    debug!(
        source = source.index(),
        sink = sink.index(),
        flow = total,
        augmentations,
        "computed max flow"
    );
    Ok(total)
}

fn checked_sum(a: i64, b: i64) -> Result<i64> {
    a.checked_add(b).ok_or(Error::FlowOverflow)
}

fn capacity(residual: &HashMap<Edge, i64>, from: NodeId, to: NodeId) -> i64 {
    residual.get(&Edge::new(from, to)).copied().unwrap_or(0)
}

/// Finds any source-to-sink path over positive residual capacities.
fn find_path(
    neighbours: &[BTreeSet<NodeId>],
    residual: &HashMap<Edge, i64>,
    source: NodeId,
    sink: NodeId,
) -> Option<Vec<NodeId>> {
    let mut parent: Vec<Option<NodeId>> = vec![None; neighbours.len()];
    let mut visited = vec![false; neighbours.len()];
    let mut stack = vec![source];
    visited[source.index()] = true;

    while let Some(node) = stack.pop() {
        if node == sink {
            let mut path = vec![sink];
            let mut current = sink;
            while let Some(prev) = parent[current.index()] {
                path.push(prev);
                current = prev;
            }
            path.reverse();
            return Some(path);
        }

        for &next in neighbours[node.index()].iter().rev() {
            if !visited[next.index()] && capacity(residual, node, next) > 0 {
                visited[next.index()] = true;
                parent[next.index()] = Some(node);
                stack.push(next);
            }
        }
    }

    None
}
