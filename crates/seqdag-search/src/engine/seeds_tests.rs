use seqdag_core::SequenceGraph;

use crate::Pattern;

use super::seeds::{Seed, SeedPlanner, Target};

fn graph(words: &[&str]) -> SequenceGraph<char> {
    SequenceGraph::from_sorted(words.iter().map(|w| w.chars().collect::<Vec<_>>()))
}

fn plan(
    graph: &SequenceGraph<char>,
    pattern: &str,
    pool: &[char],
    wildcards: usize,
    index: usize,
    floor: usize,
) -> Vec<Seed<char>> {
    let pattern: Pattern<char> = pattern.parse().unwrap();
    let planner = SeedPlanner {
        graph,
        pattern: &pattern,
        pool,
        wildcards,
    };
    planner.plan(Target { index, floor })
}

/// `(value, index, pinned)` per seed.
fn describe(graph: &SequenceGraph<char>, seeds: &[Seed<char>]) -> Vec<(char, usize, bool)> {
    seeds
        .iter()
        .map(|seed| {
            let value = *graph.node(seed.state.node()).value().unwrap();
            (value, seed.state.index(), seed.pinned)
        })
        .collect()
}

#[test]
fn hard_anchor_pins_source_children() {
    let graph = graph(&["car", "care", "cars"]);
    let seeds = plan(&graph, "car.", &['e'], 0, 0, 0);

    assert_eq!(describe(&graph, &seeds), [('c', 0, true)]);
}

#[test]
fn soft_anchor_pins_anchor_and_target() {
    let graph = graph(&["at", "c", "cat", "ct", "t"]);

    let seeds = plan(&graph, "c.t", &[], 0, 2, 0);
    assert_eq!(describe(&graph, &seeds), [('c', 0, true), ('t', 2, true)]);

    let seeds = plan(&graph, "c.t", &[], 0, 2, 1);
    assert_eq!(describe(&graph, &seeds), [('t', 2, true)]);
}

#[test]
fn concrete_target_seeds_every_node_with_value() {
    let graph = graph(&["blizzard", "gizzard", "izzard"]);
    let seeds = plan(&graph, "..[lg_]izzar...", &[], 6, 3, 0);

    // The three words share one "izzard" tail.
    assert_eq!(graph.all_nodes_with_value(&'i').len(), 1);
    assert_eq!(seeds.len(), 1);
    assert!(seeds.iter().all(|s| !s.pinned && s.state.used().is_empty()));
}

#[test]
fn open_target_forks_pool_and_wildcard() {
    let graph = graph(&["ab", "b", "cb"]);

    let seeds = plan(&graph, "..b", &['a'], 0, 1, 0);
    assert_eq!(describe(&graph, &seeds), [('a', 1, false)]);
    assert_eq!(seeds[0].state.pool(), [] as [char; 0]);
    assert_eq!(seeds[0].state.used().get(&1), Some(&'a'));

    let seeds = plan(&graph, "..b", &['a'], 1, 1, 0);
    let pooled = seeds.iter().filter(|s| s.state.wildcards() == 1).count();
    let wild = seeds.iter().filter(|s| s.state.wildcards() == 0).count();
    assert_eq!(pooled, 1);
    assert_eq!(wild, graph.len() - 2);
}

#[test]
fn nothing_to_seed() {
    let graph = graph(&["ab", "b", "cb"]);

    assert!(plan(&graph, "a_b", &['a'], 1, 1, 0).is_empty());
    assert!(plan(&graph, "ab", &['a'], 1, 2, 0).is_empty());
}
