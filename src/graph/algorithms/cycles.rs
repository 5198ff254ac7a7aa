//! Cycle detection.
//!
//! Uses the classic three-state walk: a node is marked in-progress when entered
//! and done once every successor has resolved. Reaching an in-progress node again
//! means a back-edge, and therefore a cycle. Self-loops count as cycles.

use crate::graph::{
    algorithms::{Frame, VisitState},
    NodeId, Successors,
};

/// Returns `true` if the graph contains at least one cycle.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use canongraph::graph::{algorithms::has_cycle, DirectedGraph};
///
/// assert!(!has_cycle(&DirectedGraph::from_edges([(0, 1), (1, 2)])));
/// assert!(has_cycle(&DirectedGraph::from_edges([(0, 1), (1, 0)])));
/// assert!(has_cycle(&DirectedGraph::from_edges([(3, 3)])));
/// ```
pub fn has_cycle<G: Successors>(graph: &G) -> bool {
    !finish_order(graph, |_| {})
}

/// Runs the three-state walk over every node, reporting nodes as they finish.
///
/// Walks start at each unvisited id in ascending order. `on_finish` is called
/// once per node after all of its successors are done. Returns `false` as soon
/// as a back-edge is found, leaving the walk incomplete.
pub(crate) fn finish_order<G, F>(graph: &G, mut on_finish: F) -> bool
where
    G: Successors,
    F: FnMut(NodeId),
{
    let mut state = vec![VisitState::Unvisited; graph.node_count()];
    let mut stack: Vec<Frame> = Vec::new();

    for root in graph.node_ids() {
        if state[root.index()] != VisitState::Unvisited {
            continue;
        }
        state[root.index()] = VisitState::InProgress;
        stack.push(Frame::new(graph, root));

        while let Some(frame) = stack.last_mut() {
            if let Some(succ) = frame.next_successor() {
                match state[succ.index()] {
                    VisitState::InProgress => return false,
                    VisitState::Done => {}
                    VisitState::Unvisited => {
                        state[succ.index()] = VisitState::InProgress;
                        stack.push(Frame::new(graph, succ));
                    }
                }
            } else {
                let node = frame.node;
                stack.pop();
                state[node.index()] = VisitState::Done;
                on_finish(node);
            }
        }
    }

    true
}
