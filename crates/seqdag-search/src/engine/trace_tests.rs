use indoc::indoc;
use seqdag_core::{Colors, SequenceGraph};

use crate::{Pattern, PrintTracer, Searcher, Verbosity};

fn graph(words: &[&str]) -> SequenceGraph<char> {
    SequenceGraph::from_sorted(words.iter().map(|w| w.chars().collect::<Vec<_>>()))
}

fn trace(
    words: &[&str],
    pattern: &str,
    pool: &str,
    wildcards: usize,
    verbosity: Verbosity,
) -> String {
    let graph = graph(words);
    let pattern: Pattern<char> = pattern.parse().unwrap();
    let mut tracer = PrintTracer::new(&graph, verbosity, Colors::OFF);

    let count = Searcher::new(&graph)
        .find_matches_with(pool.chars(), &pattern, wildcards, &mut tracer)
        .count();
    assert!(count > 0);

    tracer.dump()
}

#[test]
fn default_shows_phases() {
    let out = trace(&["car", "care", "cars"], "car.", "es", 0, Verbosity::Default);

    insta::assert_snapshot!(out, @r"
    target @0 floor 0
      seed N2 @0 c pinned
      prefix @0
      match c a r @0..2
      match c a r e @0..3
      match c a r s @0..3
    ");
}

#[test]
fn verbose_shows_steps() {
    let out = trace(&["car", "care", "cars"], "car.", "es", 0, Verbosity::Verbose);

    insta::assert_snapshot!(out, @r"
    target @0 floor 0
      seed N2 @0 c pinned
      prefix @0
        → N3 @1 a
        → N4 @2 r
      match c a r @0..2
        → N5 @3 e+
        → N6 @3 s+
      match c a r e @0..3
      match c a r s @0..3
    ");
}

#[test]
fn very_verbose_shows_resources() {
    let out = trace(&["ab"], "a.", "", 1, Verbosity::VeryVerbose);

    assert_eq!(
        out,
        indoc! {"
            target @0 floor 0
              seed N2 @0 a pool [] wc 1 pinned
              prefix @0
                → N3 @1 b* pool [] wc 0
              match a b @0..1 *1
        "}
    );
}

#[test]
fn backward_steps_use_left_arrow() {
    let out = trace(&["ab", "b", "cb"], "..b", "a", 0, Verbosity::Verbose);

    insta::assert_snapshot!(out, @r"
    target @2 floor 0
      seed N3 @2 b
      prefix @2
      match b @2..2
        ← N2 @1 a+
      prefix @1
      match a b @1..2
    ");
}

#[test]
fn colors_wrap_handles_and_values() {
    let graph = graph(&["ab"]);
    let pattern: Pattern<char> = "a.".parse().unwrap();
    let mut tracer = PrintTracer::new(&graph, Verbosity::Default, Colors::ON);

    Searcher::new(&graph)
        .find_matches_with([], &pattern, 1, &mut tracer)
        .for_each(drop);

    let seed = &tracer.lines()[1];
    assert!(seed.contains("\x1b[34mN2\x1b[0m"));
    assert!(seed.contains("\x1b[32ma\x1b[0m"));
}
