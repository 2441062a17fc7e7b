use seqdag_core::{NodeId, SequenceGraph};

use crate::{NoopTracer, Pattern, SearchState};

use super::walk::Walk;

fn graph(words: &[&str]) -> SequenceGraph<char> {
    SequenceGraph::from_sorted(words.iter().map(|w| w.chars().collect::<Vec<_>>()))
}

fn node_with(graph: &SequenceGraph<char>, value: char) -> NodeId {
    graph.all_nodes_with_value(&value)[0]
}

fn drain(mut walk: Walk<'_, '_, char>) -> Vec<SearchState<char>> {
    let mut out = Vec::new();
    while let Some(state) = walk.next_with(&mut NoopTracer) {
        out.push(state);
    }
    out
}

#[test]
fn backward_yields_every_legal_start() {
    // All three final b's share one node.
    let graph = graph(&["ab", "b", "cb"]);
    let pattern: Pattern<char> = "..b".parse().unwrap();
    let b = node_with(&graph, 'b');
    let root = SearchState::new(b, 2, vec!['a', 'c'], 0);

    let starts = drain(Walk::backward(&graph, &pattern, 0, root));

    let summary: Vec<_> = starts
        .iter()
        .map(|s| (s.index(), s.used().get(&1).copied()))
        .collect();
    assert_eq!(summary, [(2, None), (1, Some('a')), (1, Some('c'))]);
}

#[test]
fn backward_respects_floor() {
    let graph = graph(&["ab", "b", "cb"]);
    let pattern: Pattern<char> = "..b".parse().unwrap();
    let root = SearchState::new(node_with(&graph, 'b'), 2, vec!['a', 'c'], 0);

    let starts = drain(Walk::backward(&graph, &pattern, 2, root));

    assert_eq!(starts.len(), 1);
    assert_eq!(starts[0].index(), 2);
}

#[test]
fn pinned_only_checks_root() {
    let graph = graph(&["ab", "b", "cb"]);
    let pattern: Pattern<char> = "..b".parse().unwrap();
    let b = node_with(&graph, 'b');

    let root = SearchState::new(b, 2, vec!['a'], 1);
    let starts = drain(Walk::pinned(&graph, &pattern, 0, root));
    assert_eq!(starts.len(), 1);

    let only_ab = self::graph(&["ab"]);
    let b = node_with(&only_ab, 'b');
    let root = SearchState::new(b, 2, vec!['a'], 1);
    let starts = drain(Walk::pinned(&only_ab, &pattern, 0, root));
    assert!(starts.is_empty());
}

#[test]
fn forward_respects_min_end() {
    let graph = graph(&["car", "care", "cars"]);
    let pattern: Pattern<char> = "car.".parse().unwrap();
    let root = SearchState::new(node_with(&graph, 'c'), 0, vec!['e', 's'], 0);

    let ends = drain(Walk::forward(&graph, &pattern, 3, root));

    let placed: Vec<_> = ends.iter().map(|s| s.used()[&3]).collect();
    assert_eq!(placed, ['e', 's']);
}

#[test]
fn forward_yields_before_expanding() {
    let graph = graph(&["car", "care", "cars"]);
    let pattern: Pattern<char> = "car.".parse().unwrap();
    let root = SearchState::new(node_with(&graph, 'c'), 0, vec!['e', 's'], 0);
    let mut walk = Walk::forward(&graph, &pattern, 0, root);

    let first = walk.next_with(&mut NoopTracer).unwrap();
    assert_eq!(first.index(), 2);
    assert!(first.used().is_empty());
    assert_eq!(walk.next_with(&mut NoopTracer).unwrap().index(), 3);
}
