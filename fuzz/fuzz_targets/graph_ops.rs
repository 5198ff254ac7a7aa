#![no_main]

use libfuzzer_sys::fuzz_target;
use canongraph::{canonical::describe, graph::{DirectedGraph, NodeId}};

// Byte pairs become edges over at most 16 nodes; the low bit of the first
// byte picks between adding and removing.
fuzz_target!(|data: &[u8]| {
    let mut graph = DirectedGraph::with_nodes(16);
    for pair in data.chunks_exact(2) {
        let source = NodeId::new(usize::from(pair[0] >> 4));
        let target = NodeId::new(usize::from(pair[1] & 0x0f));
        if pair[0] & 1 == 0 {
            graph.add_edge(source, target);
        } else {
            graph.remove_edge(source, target);
        }
    }

    assert_eq!(graph.edge_count(), graph.count_edges());
    assert_eq!(graph.has_cycle(), graph.topological_sort().is_none());
    assert!(!graph.meta_graph().has_cycle());

    let _ = describe(&graph);

    graph.compact();
    assert_eq!(graph.edge_count(), graph.count_edges());
});
