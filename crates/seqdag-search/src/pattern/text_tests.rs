use super::{EMPTY_CHAR, Pattern, PatternError};

fn parse(text: &str) -> Result<Pattern<char>, PatternError> {
    text.parse()
}

#[test]
fn items_map_to_slots() {
    let pattern = parse("a._[bc][d_]").unwrap();

    assert_eq!(pattern.len(), 5);
    assert_eq!(pattern.empty_value(), &EMPTY_CHAR);
    assert_eq!(pattern.concrete_value(0), Some(&'a'));
    assert_eq!(pattern.slot(1), None);
    assert!(pattern.is_forced_empty(2));
    assert!(pattern.permits(3, &'c'));
    assert!(pattern.permits(4, &'d'));
    assert!(pattern.is_potentially_empty(4));
}

#[test]
fn single_member_set_is_concrete() {
    let pattern = parse("[x]").unwrap();

    assert_eq!(pattern.concrete_value(0), Some(&'x'));
}

#[test]
fn renders_back_to_text() {
    let pattern = parse("..[lg_]izzar...").unwrap();

    insta::assert_snapshot!(pattern.to_string(), @"..[gl_]izzar...");
}

#[test]
fn renders_collapsed_sets() {
    let pattern = parse("[a][_]b").unwrap();

    assert_eq!(pattern.to_string(), "a_b");
}

#[test]
fn unclosed_set() {
    assert_eq!(
        parse("ab[").unwrap_err(),
        PatternError::UnclosedSet { offset: 2 }
    );
    assert_eq!(
        parse("é[x").unwrap_err(),
        PatternError::UnclosedSet { offset: 2 }
    );
}

#[test]
fn empty_set() {
    assert_eq!(
        parse("a[]").unwrap_err(),
        PatternError::EmptySet { offset: 1 }
    );
}

#[test]
fn stray_characters() {
    assert_eq!(
        parse("a]").unwrap_err(),
        PatternError::Unexpected { ch: ']', offset: 1 }
    );
    assert_eq!(
        parse("[a.]").unwrap_err(),
        PatternError::Unexpected { ch: '.', offset: 2 }
    );
    assert_eq!(
        parse("[a[b]]").unwrap_err(),
        PatternError::Unexpected { ch: '[', offset: 2 }
    );
    assert_eq!(
        parse("a\0").unwrap_err(),
        PatternError::Unexpected { ch: '\0', offset: 1 }
    );
}

#[test]
fn error_messages() {
    insta::assert_snapshot!(
        PatternError::Unexpected { ch: ']', offset: 1 }.to_string(),
        @"unexpected ']' at offset 1"
    );
    insta::assert_snapshot!(
        PatternError::UnclosedSet { offset: 4 }.to_string(),
        @"unclosed `[` at offset 4"
    );
}
