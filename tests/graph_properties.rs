//! Property tests for the graph store and its structural algorithms.
//!
//! Every test draws a batch of random graphs from a fixed seed and checks an
//! invariant that must hold for all of them:
//! 1. The cached edge counter matches a recount after arbitrary edits
//! 2. Cycle detection agrees with topological sorting
//! 3. SCC membership agrees with mutual reachability
//! 4. The meta-graph is acyclic and has one node per component
//! 5. Every enumerated simple cycle is a real, elementary, closed walk
//! 6. Compaction and relabeling preserve the edge structure

use std::collections::HashSet;

use canongraph::{
    graph::{
        algorithms::{dfs, dfs_forest},
        generate::{random_dag, random_graph},
        DirectedGraph, NodeId, NodeRole, WeightedGraph,
    },
    Error,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const ROUNDS: usize = 64;

/// Returns the set of nodes reachable from `start`, `start` included.
fn reachable(graph: &DirectedGraph, start: NodeId) -> HashSet<NodeId> {
    dfs(graph, start).collect()
}

/// Draws a graph with a random size and density.
fn sample(rng: &mut StdRng) -> DirectedGraph {
    let nodes = rng.gen_range(1..12);
    let density = rng.gen_range(0..4);
    random_graph(rng, nodes, density)
}

#[test]
fn edge_counter_survives_random_edits() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..ROUNDS {
        let mut graph = sample(&mut rng);
        let n = graph.node_count();

        for _ in 0..32 {
            let a = NodeId::new(rng.gen_range(0..n));
            let b = NodeId::new(rng.gen_range(0..n));
            match rng.gen_range(0..4) {
                0 | 1 => {
                    graph.add_edge(a, b);
                }
                2 => {
                    graph.remove_edge(a, b);
                }
                _ => {
                    graph.swap_nodes(a, b);
                }
            }
            assert_eq!(graph.edge_count(), graph.count_edges());
            assert_eq!(graph.edge_count(), graph.edges().len());
        }

        // Removing a non-final id leaves an isolated placeholder behind
        if n > 1 {
            graph.remove_node(NodeId::new(0));
            assert_eq!(graph.node_count(), n);
            assert_eq!(graph.edge_count(), graph.count_edges());
            assert_eq!(graph.node_roles()[0], NodeRole::Isolated);
        }
    }
}

#[test]
fn cycle_detection_agrees_with_topological_sort() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..ROUNDS {
        let graph = sample(&mut rng);
        let order = graph.topological_sort();
        assert_eq!(graph.has_cycle(), order.is_none());

        if let Some(order) = order {
            let mut position = vec![0; graph.node_count()];
            for (idx, node) in order.iter().enumerate() {
                position[node.index()] = idx;
            }
            for edge in graph.edges() {
                assert!(position[edge.source.index()] < position[edge.target.index()]);
            }
        }
    }
}

#[test]
fn random_dags_are_acyclic() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..ROUNDS {
        let nodes = rng.gen_range(1..16);
        let graph = random_dag(&mut rng, nodes, 4);
        assert!(!graph.has_cycle());
        assert!(!graph.scc().is_cyclic());
        assert!(graph.simple_cycles().is_empty());
    }
}

#[test]
fn dfs_forest_visits_every_node_once() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..ROUNDS {
        let graph = sample(&mut rng);
        let order = dfs_forest(&graph);
        let unique: HashSet<_> = order.iter().copied().collect();
        assert_eq!(order.len(), graph.node_count());
        assert_eq!(unique.len(), graph.node_count());
    }
}

#[test]
fn scc_matches_mutual_reachability() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..ROUNDS {
        let graph = sample(&mut rng);
        let labels = graph.scc();
        let reach: Vec<_> = (0..graph.node_count())
            .map(|n| reachable(&graph, NodeId::new(n)))
            .collect();

        for a in 0..graph.node_count() {
            for b in 0..graph.node_count() {
                let (na, nb) = (NodeId::new(a), NodeId::new(b));
                let mutual = reach[a].contains(&nb) && reach[b].contains(&na);
                assert_eq!(labels.same_component(na, nb), mutual, "{na} / {nb}");
            }
            let rep = labels.representative(NodeId::new(a));
            assert_eq!(labels.representative(rep), rep);
            assert!(labels.same_component(NodeId::new(a), rep));
        }
        assert_eq!(labels.is_cyclic(), graph.has_cycle());
    }
}

#[test]
fn meta_graph_is_acyclic_condensation() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..ROUNDS {
        let graph = sample(&mut rng);
        let labels = graph.scc();
        let condensed = graph.condensation();

        assert!(!condensed.graph.has_cycle());
        assert_eq!(condensed.graph.node_count(), labels.component_count());

        for edge in graph.edges() {
            let (ms, mt) = (
                condensed.meta_node(edge.source),
                condensed.meta_node(edge.target),
            );
            if labels.same_component(edge.source, edge.target) {
                assert_eq!(ms, mt);
            } else {
                assert!(condensed.graph.contains_edge(ms, mt));
            }
        }
        assert_eq!(graph.meta_graph(), condensed.graph);
    }
}

#[test]
fn simple_cycles_are_closed_elementary_walks() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..ROUNDS {
        let nodes = rng.gen_range(1..7);
        let graph = random_graph(&mut rng, nodes, 2);
        let labels = graph.scc();
        let cycles = graph.simple_cycles();

        assert_eq!(cycles.is_empty(), !graph.has_cycle());

        let mut seen = HashSet::new();
        for cycle in &cycles {
            assert!(cycle.len() >= 2);
            assert_eq!(cycle.first(), cycle.last());
            for pair in cycle.windows(2) {
                assert!(graph.contains_edge(pair[0], pair[1]));
                assert!(labels.same_component(pair[0], pair[1]));
            }

            let body = &cycle[..cycle.len() - 1];
            let distinct: HashSet<_> = body.iter().collect();
            assert_eq!(distinct.len(), body.len());

            // The start is the smallest id on the cycle
            assert_eq!(body.iter().min(), body.first());
            assert!(seen.insert(cycle.clone()));
        }
    }
}

#[test]
fn compact_drops_only_isolated_nodes() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..ROUNDS {
        let mut graph = sample(&mut rng);
        let victim = NodeId::new(rng.gen_range(0..graph.node_count()));
        graph.remove_node(victim);

        let edges = graph.edge_count();
        let isolated = graph
            .node_roles()
            .into_iter()
            .filter(|role| *role == NodeRole::Isolated)
            .count();
        let expected_nodes = graph.node_count() - isolated;
        let was_cyclic = graph.has_cycle();

        graph.compact();
        assert_eq!(graph.node_count(), expected_nodes);
        assert_eq!(graph.edge_count(), edges);
        assert_eq!(graph.has_cycle(), was_cyclic);
        assert!(graph
            .node_roles()
            .iter()
            .all(|role| *role != NodeRole::Isolated));
    }
}

#[test]
fn shuffling_preserves_structure() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..ROUNDS {
        let graph = sample(&mut rng);
        let shuffled = graph.shuffled(&mut rng);

        assert_eq!(shuffled.node_count(), graph.node_count());
        assert_eq!(shuffled.edge_count(), graph.edge_count());
        assert_eq!(shuffled.has_cycle(), graph.has_cycle());
        assert_eq!(shuffled.scc().component_count(), graph.scc().component_count());
        assert_eq!(shuffled.simple_cycles().len(), graph.simple_cycles().len());
    }
}

#[test]
fn random_edge_removal_respects_availability() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..ROUNDS {
        let mut graph = sample(&mut rng);
        let available = graph.edge_count();

        assert_eq!(
            graph.remove_random_edges(&mut rng, available + 1),
            Err(Error::InsufficientEdges {
                requested: available + 1,
                available,
            })
        );
        assert_eq!(graph.edge_count(), available);

        let count = available / 2;
        graph.remove_random_edges(&mut rng, count).unwrap();
        assert_eq!(graph.edge_count(), available - count);
        assert_eq!(graph.edge_count(), graph.count_edges());
    }
}

#[test]
fn max_flow_is_bounded_by_cuts() {
    let mut rng = StdRng::seed_from_u64(10);
    for _ in 0..ROUNDS {
        let base = random_graph(&mut rng, 8, 3);
        let graph = WeightedGraph::from_weighted_edges(
            base.edges()
                .into_iter()
                .map(|e| (e.source.index(), e.target.index(), rng.gen_range(0..10)))
                .collect::<Vec<_>>(),
        );
        let n = graph.node_count();
        if n < 2 {
            continue;
        }

        let (s, t) = (NodeId::new(0), NodeId::new(n - 1));
        let flow = graph.max_flow(s, t).unwrap();

        let out_of_source: i64 = graph
            .weighted_edges()
            .filter(|(e, _)| e.source == s)
            .map(|(_, w)| w)
            .sum();
        let into_sink: i64 = graph
            .weighted_edges()
            .filter(|(e, _)| e.target == t)
            .map(|(_, w)| w)
            .sum();

        assert!(flow >= 0);
        assert!(flow <= out_of_source);
        assert!(flow <= into_sink);
        if !reachable(graph.graph(), s).contains(&t) {
            assert_eq!(flow, 0);
        }
    }
}

#[test]
fn matrix_export_round_trips() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..ROUNDS {
        let graph = sample(&mut rng);
        let rebuilt = DirectedGraph::from_matrix(&graph.adjacency_matrix()).unwrap();
        assert_eq!(rebuilt.edges(), graph.edges());
        assert_eq!(rebuilt, graph);
    }
}

#[test]
fn compact_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..ROUNDS {
        let mut graph = sample(&mut rng);
        graph.compact();
        let once = graph.clone();
        graph.compact();
        assert_eq!(graph, once);
    }
}

#[test]
fn triangle_collapses_to_one_meta_node() {
    let graph = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 0)]);
    assert!(graph.has_cycle());

    let labels = graph.scc();
    let rep = labels.representative(NodeId::new(0));
    assert!(labels.representatives().iter().all(|&r| r == rep));

    let meta = graph.meta_graph();
    assert_eq!(meta.node_count(), 1);
    assert_eq!(meta.edge_count(), 0);
}

#[test]
fn chain_sorts_in_order() {
    let graph = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 3)]);
    assert!(!graph.has_cycle());
    assert_eq!(
        graph.topological_sort(),
        Some((0..4).map(NodeId::new).collect())
    );
    assert!(graph.simple_cycles().is_empty());
}

#[test]
fn removed_node_is_compacted_away() {
    let mut graph = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0), (1, 3)]);
    let before = graph.node_count();

    assert!(graph.remove_node(NodeId::new(1)));
    graph.compact();

    assert_eq!(graph.node_count(), before - 1);
    assert!(graph
        .node_roles()
        .iter()
        .all(|role| *role != NodeRole::Isolated));
}
