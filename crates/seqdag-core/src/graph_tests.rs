//! Tests for the read-only query surface.

use std::collections::HashSet;

use crate::{NodeId, SequenceGraph};

fn build(words: &[&str]) -> SequenceGraph<char> {
    SequenceGraph::from_sorted(words.iter().map(|w| w.chars().collect::<Vec<_>>()))
}

fn only(graph: &SequenceGraph<char>, value: char) -> NodeId {
    let nodes = graph.all_nodes_with_value(&value);
    assert_eq!(nodes.len(), 1, "expected a single {value:?} node");
    nodes[0]
}

#[test]
fn contains_only_stored_sequences() {
    let words = ["ant", "ants", "bee", "bees", "beet"];
    let graph = build(&words);

    for word in words {
        assert!(graph.contains(word.chars()), "{word} should be stored");
    }
    for probe in ["", "a", "an", "antsy", "be", "beets", "cat"] {
        assert!(!graph.contains(probe.chars()), "{probe} should not be stored");
    }
}

#[test]
fn children_include_sink_last() {
    let graph = build(&["car", "care", "cars"]);
    let r = only(&graph, 'r');
    let e = only(&graph, 'e');
    let s = only(&graph, 's');

    let all: Vec<_> = graph.children(r, None).collect();
    assert_eq!(all, [e, s, NodeId::SINK]);
}

#[test]
fn children_filter_by_value() {
    let graph = build(&["car", "care", "cars"]);
    let r = only(&graph, 'r');
    let s = only(&graph, 's');
    let filter: HashSet<char> = ['s', 'x'].into_iter().collect();

    let filtered: Vec<_> = graph.children(r, Some(&filter)).collect();
    assert_eq!(filtered, [s, NodeId::SINK]);
}

#[test]
fn parents_include_source_last() {
    let graph = build(&["ab", "b"]);
    let a = only(&graph, 'a');
    let b = only(&graph, 'b');

    let parents: Vec<_> = graph.parents(b, None).collect();
    assert_eq!(parents, [a, NodeId::SOURCE]);

    let filter: HashSet<char> = ['z'].into_iter().collect();
    let parents: Vec<_> = graph.parents(b, Some(&filter)).collect();
    assert_eq!(parents, [NodeId::SOURCE]);
}

#[test]
fn value_index() {
    let graph = build(&["tap", "top"]);

    assert_eq!(graph.all_nodes_with_value(&'t').len(), 1);
    assert_eq!(graph.all_nodes_with_value(&'p').len(), 1);
    assert!(graph.all_nodes_with_value(&'x').is_empty());
    assert_eq!(graph.valueless_nodes(), &[NodeId::SOURCE, NodeId::SINK]);

    let values: HashSet<char> = graph.values().copied().collect();
    assert_eq!(values, ['t', 'a', 'o', 'p'].into_iter().collect());
}

#[test]
fn boundaries() {
    let graph = build(&["a"]);
    let a = only(&graph, 'a');

    assert!(graph.is_boundary(graph.source()));
    assert!(graph.is_boundary(graph.sink()));
    assert!(!graph.is_boundary(a));
}

#[test]
fn start_and_end_nodes() {
    let graph = build(&["ab", "b", "cd"]);
    let a = only(&graph, 'a');
    let b = only(&graph, 'b');
    let c = only(&graph, 'c');
    let d = only(&graph, 'd');

    let starts: Vec<_> = graph.valid_start_nodes().collect();
    assert_eq!(starts, [a, b, c]);

    let ends: HashSet<_> = graph.valid_end_nodes().collect();
    assert_eq!(ends, [b, d].into_iter().collect());
}

#[test]
fn counts_match_enumeration() {
    let words = ["blizzard", "blizzards", "gizzard", "gizzards", "izzard", "izzards"];
    let graph = build(&words);

    assert_eq!(graph.sequence_count(), words.len() as u64);
    assert_eq!(graph.all_sequences().len(), words.len());

    let stats = graph.stats();
    assert_eq!(stats.nodes, graph.len());
    assert_eq!(stats.sequences, 6);
    assert_eq!(stats.edges, graph.edge_count());
}

#[test]
fn edge_count_includes_sentinel_edges() {
    let graph = build(&["a", "b"]);

    // source→a, source→b, a→sink, b→sink
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn concurrent_readers() {
    let words = ["bee", "bees", "beet", "beets", "feet"];
    let graph = build(&words);

    std::thread::scope(|scope| {
        for word in words {
            let graph = &graph;
            scope.spawn(move || {
                assert!(graph.contains(word.chars()));
                assert!(!graph.contains(word.chars().skip(1)));
            });
        }
    });
}
