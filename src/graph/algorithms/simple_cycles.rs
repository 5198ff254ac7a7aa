//! Simple-cycle enumeration.
//!
//! For each start node `s` the search explores simple paths that stay inside the
//! component of `s` and only use ids greater than `s`. Every path that can step
//! back to `s` closes one cycle. Restricting to larger ids means each cycle is
//! found exactly once, from its smallest node, so rotations are never reported.

use crate::graph::{
    algorithms::{Frame, SccLabels},
    NodeId, Successors,
};

/// Enumerates every simple cycle of the graph.
///
/// Each cycle is reported as its node sequence starting and ending at its
/// smallest id, e.g. `[1, 3, 2, 1]`. A self-loop on `n` is reported as `[n, n]`.
/// Cycles are ordered by start node, then by the order the depth-first search
/// discovers them (successors in ascending id order).
///
/// `labels` must be the SCC labeling of `graph`. An acyclic labeling yields no
/// cycles without searching.
///
/// # Complexity
///
/// Output-sensitive and exponential in the worst case, since a dense component
/// has exponentially many simple paths.
///
/// # Examples
///
/// ```rust
/// use canongraph::graph::{DirectedGraph, NodeId};
///
/// let graph = DirectedGraph::from_edges([(0, 1), (1, 0), (1, 2), (2, 1)]);
/// let cycles: Vec<Vec<usize>> = graph
///     .simple_cycles()
///     .into_iter()
///     .map(|c| c.into_iter().map(NodeId::index).collect())
///     .collect();
/// assert_eq!(cycles, vec![vec![0, 1, 0], vec![1, 2, 1]]);
/// ```
pub fn simple_cycles<G: Successors>(graph: &G, labels: &SccLabels) -> Vec<Vec<NodeId>> {
    let mut cycles = Vec::new();
    if !labels.is_cyclic() {
        return cycles;
    }

    let mut on_path = vec![false; graph.node_count()];
    let mut frames: Vec<Frame> = Vec::new();

    for start in graph.node_ids() {
        let component = labels.representative(start);
        on_path[start.index()] = true;
        frames.push(Frame::new(graph, start));

        while let Some(frame) = frames.last_mut() {
            let Some(succ) = frame.next_successor() else {
                // Backtrack so the node can be reached again along another path
                on_path[frame.node.index()] = false;
                frames.pop();
                continue;
            };

            if succ == start {
                let mut cycle: Vec<NodeId> = frames.iter().map(|f| f.node).collect();
                cycle.push(start);
                cycles.push(cycle);
            } else if succ > start
                && !on_path[succ.index()]
                && labels.representative(succ) == component
            {
                on_path[succ.index()] = true;
                frames.push(Frame::new(graph, succ));
            }
        }
    }

    cycles
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::graph::{algorithms::strongly_connected_components, DirectedGraph};

    fn cycles_of(edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
        let graph = DirectedGraph::from_edges(edges.iter().copied());
        let labels = strongly_connected_components(&graph);
        simple_cycles(&graph, &labels)
            .into_iter()
            .map(|c| c.into_iter().map(NodeId::index).collect())
            .collect()
    }

    #[test]
    fn test_acyclic_has_no_cycles() {
        assert!(cycles_of(&[(0, 1), (1, 2), (2, 3)]).is_empty());
    }

    #[test]
    fn test_triangle() {
        assert_eq!(cycles_of(&[(0, 1), (1, 2), (2, 0)]), vec![vec![0, 1, 2, 0]]);
    }

    #[test]
    fn test_triangle_from_later_start() {
        // The cycle is still reported from its smallest id
        assert_eq!(cycles_of(&[(2, 1), (1, 3), (3, 2), (0, 1)]), vec![vec![1, 3, 2, 1]]);
    }

    #[test]
    fn test_self_loop() {
        assert_eq!(cycles_of(&[(0, 1), (1, 1)]), vec![vec![1, 1]]);
    }

    #[test]
    fn test_shared_node_revisited_after_backtrack() {
        // Two cycles through 0 that share node 3 via different paths
        let cycles = cycles_of(&[(0, 1), (0, 2), (1, 3), (2, 3), (3, 0)]);
        assert_eq!(cycles, vec![vec![0, 1, 3, 0], vec![0, 2, 3, 0]]);
    }

    #[test]
    fn test_complete_digraph_on_three_nodes() {
        let edges = [(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)];
        let cycles = cycles_of(&edges);
        // 3 two-cycles and 2 three-cycles
        assert_eq!(cycles.len(), 5);

        let unique: HashSet<Vec<usize>> = cycles.iter().cloned().collect();
        assert_eq!(unique.len(), 5);
        for cycle in &cycles {
            assert_eq!(cycle.first(), cycle.last());
            let start = cycle[0];
            assert!(cycle[1..cycle.len() - 1].iter().all(|&v| v > start));
        }
    }

    #[test]
    fn test_cycles_stay_within_component() {
        // 0 -> 1 crosses between two separate cycles
        let cycles = cycles_of(&[(0, 2), (2, 0), (0, 1), (1, 3), (3, 1)]);
        assert_eq!(cycles, vec![vec![0, 2, 0], vec![1, 3, 1]]);
    }
}
