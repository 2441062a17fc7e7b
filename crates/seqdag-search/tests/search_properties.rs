//! Search results checked against a brute-force placement of every stored
//! sequence at every offset.

use std::collections::{BTreeSet, HashMap};

use seqdag_core::SequenceGraph;
use seqdag_search::{MatchResult, Pattern, Searcher};

const LEXICON: &[&str] = &[
    "at", "blizzard", "blizzardly", "blizzards", "blizzardy", "c", "car", "care", "cars",
    "cat", "ct", "gizzard", "gizzards", "izzard", "izzards", "t", "tap", "taps", "top", "tops",
];

const PATTERNS: &[&str] = &[
    "car.",
    "..[lg_]izzar...",
    "..[lg]izzar...",
    "c.t",
    ".a..",
    "_.a.._",
    "t.p.",
    "..z.....",
    "[ct]...",
    "...",
    "_",
];

const POOLS: &[&str] = &["", "es", "aeiou", "st", "blgdsy", "tops"];

type Placement = (String, usize);

fn lexicon() -> SequenceGraph<char> {
    let mut words = LEXICON.to_vec();
    words.sort_unstable();
    SequenceGraph::from_sorted(words.iter().map(|w| w.chars().collect::<Vec<_>>()))
}

fn counts<'a>(values: impl IntoIterator<Item = &'a char>) -> HashMap<char, usize> {
    let mut out = HashMap::new();
    for value in values {
        *out.entry(*value).or_insert(0) += 1;
    }
    out
}

/// Whether `word` fits `pattern` starting at `start` with the given
/// resources. `must_cover` is the index the placement has to span, if any.
fn fits(
    pattern: &Pattern<char>,
    word: &[char],
    start: usize,
    pool: &HashMap<char, usize>,
    wildcards: usize,
    must_cover: Option<usize>,
) -> bool {
    let end = start + word.len() - 1;
    if end >= pattern.len() || !pattern.can_start_at(start) || !pattern.can_end_at(end) {
        return false;
    }
    match must_cover {
        Some(index) if !(start..=end).contains(&index) => return false,
        None if (start..=end).all(|i| pattern.is_potentially_empty(i)) => return false,
        _ => {}
    }

    let mut open = Vec::new();
    for (offset, value) in word.iter().enumerate() {
        let index = start + offset;
        match pattern.concrete_value(index) {
            Some(fixed) if fixed == value => {}
            Some(_) => return false,
            None if pattern.permits(index, value) => open.push(value),
            None => return false,
        }
    }

    let deficit: usize = counts(open)
        .into_iter()
        .map(|(value, need)| need.saturating_sub(pool.get(&value).copied().unwrap_or(0)))
        .sum();
    deficit <= wildcards
}

fn oracle(
    graph: &SequenceGraph<char>,
    pattern: &Pattern<char>,
    pool: &str,
    wildcards: usize,
    must_cover: Option<usize>,
) -> BTreeSet<Placement> {
    let pool: Vec<char> = pool.chars().collect();
    let pool = counts(&pool);
    let mut out = BTreeSet::new();
    for word in graph.all_sequences() {
        for start in 0..pattern.len() {
            if fits(pattern, &word, start, &pool, wildcards, must_cover) {
                out.insert((word.iter().collect(), start));
            }
        }
    }
    out
}

fn check_result(
    graph: &SequenceGraph<char>,
    pattern: &Pattern<char>,
    pool: &str,
    wildcards: usize,
    result: &MatchResult<char>,
) {
    let label = format!("{pattern} / {pool:?} / {wildcards}");

    assert!(graph.contains(&result.sequence), "{label}: not stored");
    assert_eq!(result.sequence.len(), result.end - result.start + 1, "{label}");
    assert!(result.wildcard_positions.len() <= wildcards, "{label}: over budget");

    for (offset, value) in result.sequence.iter().enumerate() {
        let index = result.start + offset;
        match pattern.concrete_value(index) {
            Some(fixed) => assert_eq!(fixed, value, "{label} @ {index}"),
            None => assert_eq!(result.placements.get(&index), Some(value), "{label} @ {index}"),
        }
    }
    for index in &result.wildcard_positions {
        assert!(result.placements.contains_key(index), "{label}: stray wildcard");
    }

    let available = counts(pool.chars().collect::<Vec<_>>().iter());
    for (value, used) in counts(result.pool_values()) {
        let limit = available.get(&value).copied().unwrap_or(0);
        assert!(used <= limit, "{label}: {value:?} used {used} times, pool has {limit}");
    }
}

#[test]
fn find_matches_agrees_with_brute_force() {
    let graph = lexicon();
    let searcher = Searcher::new(&graph);

    for text in PATTERNS {
        let pattern: Pattern<char> = text.parse().unwrap();
        for pool in POOLS {
            for wildcards in 0..=2 {
                let results: Vec<_> = searcher
                    .find_matches(pool.chars(), &pattern, wildcards)
                    .collect();
                for result in &results {
                    check_result(&graph, &pattern, pool, wildcards, result);
                }

                let found: BTreeSet<Placement> = results
                    .iter()
                    .map(|m| (m.sequence.iter().collect(), m.start))
                    .collect();
                let expected = oracle(&graph, &pattern, pool, wildcards, None);
                assert_eq!(found, expected, "{text} / {pool:?} / {wildcards}");
            }
        }
    }
}

#[test]
fn find_matches_containing_agrees_with_brute_force() {
    let graph = lexicon();
    let searcher = Searcher::new(&graph);

    for text in PATTERNS {
        let pattern: Pattern<char> = text.parse().unwrap();
        for index in 0..pattern.len() {
            for pool in ["", "aes", "blgd"] {
                for wildcards in 0..=1 {
                    let results: Vec<_> = searcher
                        .find_matches_containing(pool.chars(), &pattern, wildcards, index)
                        .collect();
                    for result in &results {
                        check_result(&graph, &pattern, pool, wildcards, result);
                    }

                    let found: BTreeSet<Placement> = results
                        .iter()
                        .map(|m| (m.sequence.iter().collect(), m.start))
                        .collect();
                    let expected = oracle(&graph, &pattern, pool, wildcards, Some(index));
                    assert_eq!(found, expected, "{text} @ {index} / {pool:?} / {wildcards}");
                }
            }
        }
    }
}

#[test]
fn runs_are_not_reported_twice() {
    let graph = lexicon();
    let pattern: Pattern<char> = "c.t".parse().unwrap();

    let results: Vec<_> = Searcher::new(&graph)
        .find_matches("a".chars(), &pattern, 0)
        .collect();
    let distinct: BTreeSet<Placement> = results
        .iter()
        .map(|m| (m.sequence.iter().collect(), m.start))
        .collect();

    assert_eq!(results.len(), distinct.len());
}
