//! Strongly Connected Components (SCC) and condensation.
//!
//! A strongly connected component is a maximal set of nodes in which every node
//! can reach every other node. This module labels each node with a
//! *representative* id that identifies its component, and collapses components
//! into an acyclic meta-graph.
//!
//! # Representatives
//!
//! Labeling runs Tarjan's algorithm on an explicit stack. When a node finishes it
//! records as its provisional representative the node whose discovery index equals
//! its lowlink. That node always lies in the same component, and discovery
//! indices strictly decrease along the chain, so a second pass that follows
//! `representative[representative[x]]` to a fixed point (with path compression)
//! lands every member of a component on the same id: the component's first
//! discovered node.

use crate::graph::{algorithms::Frame, DirectedGraph, NodeId, Successors};

/// Result of SCC labeling.
///
/// Built once per query and independent of the graph it came from.
///
/// # Examples
///
/// ```rust
/// use canongraph::graph::{DirectedGraph, NodeId};
///
/// let graph = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 0)]);
/// let labels = graph.scc();
///
/// assert!(labels.is_cyclic());
/// assert_eq!(labels.component_count(), 1);
/// assert!(labels.representatives().iter().all(|&r| r == NodeId::new(0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccLabels {
    cyclic: bool,
    representatives: Vec<NodeId>,
}

impl SccLabels {
    /// Returns `true` if any component has more than one node or any node has a self-loop.
    #[must_use]
    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    /// Returns the resolved representative of every node, indexed by node id.
    #[must_use]
    pub fn representatives(&self) -> &[NodeId] {
        &self.representatives
    }

    /// Returns the representative of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    #[must_use]
    pub fn representative(&self, node: NodeId) -> NodeId {
        self.representatives[node.index()]
    }

    /// Returns `true` if `a` and `b` are mutually reachable.
    #[must_use]
    pub fn same_component(&self, a: NodeId, b: NodeId) -> bool {
        self.representative(a) == self.representative(b)
    }

    /// Returns the number of distinct components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.representatives
            .iter()
            .enumerate()
            .filter(|(idx, rep)| rep.index() == *idx)
            .count()
    }

    /// Groups nodes by component.
    ///
    /// Components are ordered by representative id and members by node id.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<NodeId>> {
        let mut slot = vec![usize::MAX; self.representatives.len()];
        let mut components: Vec<Vec<NodeId>> = Vec::new();

        for (idx, rep) in self.representatives.iter().enumerate() {
            if rep.index() == idx {
                slot[idx] = components.len();
                components.push(Vec::new());
            }
        }
        for (idx, rep) in self.representatives.iter().enumerate() {
            components[slot[rep.index()]].push(NodeId::new(idx));
        }
        components
    }

    /// Splits the labels into the `(is_cyclic, representatives)` pair.
    #[must_use]
    pub fn into_parts(self) -> (bool, Vec<NodeId>) {
        (self.cyclic, self.representatives)
    }
}

/// Labels every node with the representative of its strongly connected component.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
pub fn strongly_connected_components<G: Successors>(graph: &G) -> SccLabels {
    let node_count = graph.node_count();
    let mut state = TarjanState::new(node_count);

    for root in graph.node_ids() {
        if state.index[root.index()].is_none() {
            state.walk(graph, root);
        }
    }

    let TarjanState {
        mut representatives,
        cyclic,
        ..
    } = state;
    resolve_representatives(&mut representatives);

    SccLabels {
        cyclic,
        representatives,
    }
}

/// Internal state for Tarjan's algorithm.
struct TarjanState {
    /// Discovery index for each node (None if not yet visited)
    index: Vec<Option<usize>>,
    /// Lowlink value for each node
    lowlink: Vec<usize>,
    /// Whether a node is currently on the component stack
    on_stack: Vec<bool>,
    /// Nodes in discovery order, so `discovered[index[v]] == v`
    discovered: Vec<NodeId>,
    /// Component stack
    stack: Vec<NodeId>,
    /// Provisional representatives, resolved after the walk
    representatives: Vec<NodeId>,
    /// Whether a cycle has been seen anywhere
    cyclic: bool,
}

impl TarjanState {
    fn new(n: usize) -> Self {
        TarjanState {
            index: vec![None; n],
            lowlink: vec![0; n],
            on_stack: vec![false; n],
            discovered: Vec::with_capacity(n),
            stack: Vec::new(),
            representatives: (0..n).map(NodeId::new).collect(),
            cyclic: false,
        }
    }

    fn enter(&mut self, v: NodeId) {
        let v_idx = v.index();
        self.index[v_idx] = Some(self.discovered.len());
        self.lowlink[v_idx] = self.discovered.len();
        self.discovered.push(v);
        self.stack.push(v);
        self.on_stack[v_idx] = true;
    }

    fn walk<G: Successors>(&mut self, graph: &G, root: NodeId) {
        let mut frames = vec![Frame::new(graph, root)];
        self.enter(root);

        while let Some(frame) = frames.last_mut() {
            let v = frame.node;
            if let Some(w) = frame.next_successor() {
                if w == v {
                    self.cyclic = true;
                }
                match self.index[w.index()] {
                    None => {
                        self.enter(w);
                        frames.push(Frame::new(graph, w));
                    }
                    Some(w_index) if self.on_stack[w.index()] => {
                        self.lowlink[v.index()] = self.lowlink[v.index()].min(w_index);
                    }
                    Some(_) => {}
                }
                continue;
            }

            frames.pop();
            let v_low = self.lowlink[v.index()];
            if let Some(parent) = frames.last() {
                let p_idx = parent.node.index();
                self.lowlink[p_idx] = self.lowlink[p_idx].min(v_low);
            }
            self.representatives[v.index()] = self.discovered[v_low];

            if self.index[v.index()] == Some(v_low) {
                let mut size = 0;
                while let Some(w) = self.stack.pop() {
                    self.on_stack[w.index()] = false;
                    size += 1;
                    if w == v {
                        break;
                    }
                }
                if size > 1 {
                    self.cyclic = true;
                }
            }
        }
    }
}

/// Follows every representative chain to its fixed point, compressing paths.
fn resolve_representatives(representatives: &mut [NodeId]) {
    for idx in 0..representatives.len() {
        let mut root = representatives[idx];
        while representatives[root.index()] != root {
            root = representatives[root.index()];
        }

        let mut current = NodeId::new(idx);
        while representatives[current.index()] != root {
            let next = representatives[current.index()];
            representatives[current.index()] = root;
            current = next;
        }
    }
}

/// A graph with every strongly connected component collapsed to one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condensation {
    /// The acyclic meta-graph
    pub graph: DirectedGraph,
    /// Meta-graph node of every original node, indexed by original id
    pub component_of: Vec<NodeId>,
}

impl Condensation {
    /// Returns the meta-graph node that `node` was collapsed into.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range for the original graph.
    #[must_use]
    pub fn meta_node(&self, node: NodeId) -> NodeId {
        self.component_of[node.index()]
    }
}

/// Builds the condensation of `graph` from its SCC labels.
///
/// An acyclic graph condenses to a copy of itself with the identity mapping.
/// Otherwise every component becomes one meta-node; meta-node ids are dense and
/// follow the order of the components' representative ids. Every edge `u -> v`
/// whose endpoints lie in different components becomes a meta-edge, and
/// duplicates collapse. The result is always acyclic.
pub fn condensation<G: Successors>(graph: &G, labels: &SccLabels) -> Condensation {
    let node_count = graph.node_count();

    let component_of: Vec<NodeId> = if labels.is_cyclic() {
        let mut meta_id = vec![NodeId::new(0); node_count];
        let mut next = 0;
        for (idx, rep) in labels.representatives().iter().enumerate() {
            if rep.index() == idx {
                meta_id[idx] = NodeId::new(next);
                next += 1;
            }
        }
        labels
            .representatives()
            .iter()
            .map(|rep| meta_id[rep.index()])
            .collect()
    } else {
        graph.node_ids().collect()
    };

    let meta_count = component_of.iter().map(|m| m.index() + 1).max().unwrap_or(0);
    let mut meta = DirectedGraph::with_nodes(meta_count);
    for source in graph.node_ids() {
        let from = component_of[source.index()];
        for target in graph.successors(source) {
            let to = component_of[target.index()];
            if from != to {
                meta.add_edge(from, to);
            }
        }
    }

    Condensation {
        graph: meta,
        component_of,
    }
}
