use crate::{Colors, GraphBuilder, GraphPrinter, SequenceGraph};

fn build(words: &[&str]) -> SequenceGraph<char> {
    SequenceGraph::from_sorted(words.iter().map(|w| w.chars().collect::<Vec<_>>()))
}

#[test]
fn merged_suffixes() {
    let g = build(&["tap", "taps", "top", "tops"]);

    insta::assert_snapshot!(g.dump(), @r"
    N0: ⊤ → t:N2
    N1: ⊥
    N2: t → a:N3 o:N6
    N3: a → p:N4
    N4: p → s:N5 ⊥
    N5: s → ⊥
    N6: o → p:N4
    ");
}

#[test]
fn with_parents() {
    let g = build(&["tap", "taps", "top", "tops"]);

    insta::assert_snapshot!(GraphPrinter::new(&g).show_parents(true).dump(), @r"
    N0: ⊤ → t:N2
    N1: ⊥ ← p:N4 s:N5
    N2: t → a:N3 o:N6 ← ⊤
    N3: a → p:N4 ← t:N2
    N4: p → s:N5 ⊥ ← a:N3 o:N6
    N5: s → ⊥ ← p:N4
    N6: o → p:N4 ← t:N2
    ");
}

#[test]
fn empty_sequence_only() {
    let mut builder = GraphBuilder::<char>::new();
    builder.insert(&[]);
    let g = builder.finish();

    insta::assert_snapshot!(GraphPrinter::new(&g).show_parents(true).dump(), @r"
    N0: ⊤ → ⊥
    N1: ⊥ ← ⊤
    ");
}

#[test]
fn colored() {
    let g = build(&["a"]);
    let out = GraphPrinter::new(&g).with_colors(Colors::ON).dump();

    assert!(out.contains("\x1b[32ma\x1b[0m"));
    assert!(out.contains("\x1b[34mN2\x1b[0m"));
}
