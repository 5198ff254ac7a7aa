//! Depth-first traversal.
//!
//! [`dfs`] returns a lazy iterator over the nodes reachable from one start node;
//! [`dfs_forest`] restarts the traversal at every not-yet-visited id in ascending
//! order so that every node is reported exactly once.
//!
//! Both produce the same pre-order a recursive walk would: a node is reported
//! when it is first popped, and its successors are explored in ascending id order.

use crate::graph::{NodeId, Successors};

/// Depth-first search iterator over graph nodes.
///
/// Performs an iterative pre-order traversal. Nodes are marked visited when they
/// are popped rather than when they are pushed, which keeps the order identical
/// to the recursive formulation even when several paths reach the same node.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph reference
/// * `G` - Graph type implementing [`Successors`]
pub struct DfsIterator<'g, G: Successors> {
    graph: &'g G,
    stack: Vec<NodeId>,
    visited: Vec<bool>,
}

impl<'g, G: Successors> DfsIterator<'g, G> {
    fn new(graph: &'g G, start: NodeId) -> Self {
        let mut iter = DfsIterator::unseeded(graph);
        if start.index() < graph.node_count() {
            iter.stack.push(start);
        }
        iter
    }

    fn unseeded(graph: &'g G) -> Self {
        DfsIterator {
            graph,
            stack: Vec::new(),
            visited: vec![false; graph.node_count()],
        }
    }

    /// Seeds a new traversal tree, keeping the visited set of earlier ones.
    fn restart(&mut self, start: NodeId) -> bool {
        if self.visited[start.index()] {
            return false;
        }
        self.stack.push(start);
        true
    }
}

impl<G: Successors> Iterator for DfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.stack.pop()?;
            if self.visited[node.index()] {
                continue;
            }
            self.visited[node.index()] = true;

            // Reverse so the smallest successor is popped first
            let successors: Vec<NodeId> = self.graph.successors(node).collect();
            for &succ in successors.iter().rev() {
                if !self.visited[succ.index()] {
                    self.stack.push(succ);
                }
            }

            return Some(node);
        }
    }
}

/// Returns a depth-first search iterator starting from the given node.
///
/// Nodes not reachable from `start` are not visited. An out-of-range start
/// yields an empty iterator.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E) for the visited set and the stack
///
/// # Examples
///
/// ```rust
/// use canongraph::graph::{algorithms::dfs, DirectedGraph, NodeId};
///
/// let graph = DirectedGraph::from_edges([(0, 1), (0, 2), (1, 3)]);
/// let order: Vec<usize> = dfs(&graph, NodeId::new(0)).map(NodeId::index).collect();
/// assert_eq!(order, vec![0, 1, 3, 2]);
/// ```
pub fn dfs<G: Successors>(graph: &G, start: NodeId) -> DfsIterator<'_, G> {
    DfsIterator::new(graph, start)
}

/// Depth-first pre-order over every node of the graph.
///
/// A new traversal tree is started at each unvisited id in increasing order, so
/// the result is a permutation of all node ids.
pub fn dfs_forest<G: Successors>(graph: &G) -> Vec<NodeId> {
    let mut order = Vec::with_capacity(graph.node_count());
    let mut iter = DfsIterator::unseeded(graph);

    for root in graph.node_ids() {
        if iter.restart(root) {
            order.extend(&mut iter);
        }
    }
    order
}
