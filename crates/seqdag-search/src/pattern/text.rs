//! Compact text syntax for character patterns.
//!
//! One item per position:
//!
//! | item    | meaning                                  |
//! |---------|------------------------------------------|
//! | `c`     | exactly `c`                              |
//! | `.`     | anything, or nothing                     |
//! | `_`     | nothing                                  |
//! | `[ab]`  | `a` or `b`                               |
//! | `[ab_]` | `a`, `b`, or nothing                     |
//!
//! So `..[lg_]izzar...` is the "izzar" row with a choice of `l`, `g` or a
//! gap two cells to the left.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use super::{Pattern, Slot};

/// Empty marker used by parsed character patterns.
pub const EMPTY_CHAR: char = '\0';

/// Errors raised while parsing the text syntax. Offsets are in bytes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("unclosed `[` at offset {offset}")]
    UnclosedSet { offset: usize },

    #[error("empty set at offset {offset}")]
    EmptySet { offset: usize },

    #[error("unexpected {ch:?} at offset {offset}")]
    Unexpected { ch: char, offset: usize },
}

impl FromStr for Pattern<char> {
    type Err = PatternError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut slots: Vec<Slot<char>> = Vec::new();
        let mut chars = text.char_indices();

        while let Some((offset, ch)) = chars.next() {
            let slot = match ch {
                '.' => None,
                '_' => Some(HashSet::from([EMPTY_CHAR])),
                '[' => Some(parse_set(offset, &mut chars)?),
                ']' | EMPTY_CHAR => return Err(PatternError::Unexpected { ch, offset }),
                _ => Some(HashSet::from([ch])),
            };
            slots.push(slot);
        }

        Ok(Pattern::new(slots, EMPTY_CHAR))
    }
}

fn parse_set(
    open: usize,
    chars: &mut impl Iterator<Item = (usize, char)>,
) -> Result<HashSet<char>, PatternError> {
    let mut set = HashSet::new();
    for (offset, ch) in chars {
        match ch {
            ']' if set.is_empty() => return Err(PatternError::EmptySet { offset: open }),
            ']' => return Ok(set),
            '_' => {
                set.insert(EMPTY_CHAR);
            }
            '[' | '.' | EMPTY_CHAR => return Err(PatternError::Unexpected { ch, offset }),
            _ => {
                set.insert(ch);
            }
        }
    }
    Err(PatternError::UnclosedSet { offset: open })
}

impl fmt::Display for Pattern<char> {
    /// Renders the text syntax; set members come out sorted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let empty = *self.empty_value();
        for (index, slot) in self.slots().iter().enumerate() {
            let Some(set) = slot else {
                write!(f, ".")?;
                continue;
            };
            if self.is_forced_empty(index) {
                write!(f, "_")?;
            } else if let Some(value) = self.concrete_value(index) {
                write!(f, "{value}")?;
            } else {
                let mut members: Vec<char> =
                    set.iter().copied().filter(|c| *c != empty).collect();
                members.sort_unstable();
                write!(f, "[")?;
                for member in members {
                    write!(f, "{member}")?;
                }
                if set.contains(&empty) {
                    write!(f, "_")?;
                }
                write!(f, "]")?;
            }
        }
        Ok(())
    }
}
