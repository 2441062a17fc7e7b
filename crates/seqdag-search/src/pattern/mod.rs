//! Compiled per-position constraints for graph search.
//!
//! A pattern lays a fixed coordinate space over candidate sequences (a row
//! of board cells, a template word). Each position either accepts anything,
//! accepts one of a listed set of values, or must stay empty. The designated
//! empty value marks emptiness inside a set:
//!
//! - `{E}` forces the position empty
//! - `{a, b, E}` lets the position stay empty or take `a` or `b`, and
//!   nothing else; listing the marker does not reopen the slot to every value
//! - `None` is unrestricted, which includes staying empty
//!
//! Everything the searcher asks per step (boundary runs, anchors, where a
//! match may open or close) is derived once in `Pattern::new`.

mod text;

#[cfg(test)]
mod text_tests;

use std::collections::HashSet;
use std::hash::Hash;

use serde::Serialize;

pub use text::{EMPTY_CHAR, PatternError};

/// Legal values at one position; `None` places no restriction.
pub type Slot<T> = Option<HashSet<T>>;

/// Inclusive index range of a maximal run of positions that cannot be empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Boundary {
    pub start: usize,
    pub end: usize,
}

impl Boundary {
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }
}

/// Immutable compiled constraint array.
#[derive(Debug, Clone)]
pub struct Pattern<T> {
    slots: Vec<Slot<T>>,
    empty: T,
    boundaries: Vec<Boundary>,
    /// Earliest position each index is rigidly tied to, if any.
    anchors: Vec<Option<usize>>,
    can_start: Vec<bool>,
    can_end: Vec<bool>,
}

impl<T: Clone + Eq + Hash> Pattern<T> {
    /// Compile a pattern from explicit slots.
    pub fn new(slots: Vec<Slot<T>>, empty: T) -> Self {
        let len = slots.len();
        let mut pattern = Self {
            slots,
            empty,
            boundaries: Vec::new(),
            anchors: vec![None; len],
            can_start: vec![false; len],
            can_end: vec![false; len],
        };
        pattern.compile();
        pattern
    }

    /// Compile from one value per position.
    ///
    /// Positions holding `empty` are unrestricted; every other position is
    /// pinned to its value.
    pub fn from_values(values: &[T], empty: T) -> Self {
        let slots = values
            .iter()
            .map(|value| (*value != empty).then(|| HashSet::from([value.clone()])))
            .collect();
        Self::new(slots, empty)
    }

    /// Compile from `(index, value)` pins over `len` otherwise unrestricted
    /// positions. Pins outside `0..len` are ignored; a later pin at the same
    /// index replaces an earlier one.
    pub fn sparse<I>(len: usize, pins: I, empty: T) -> Self
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        let mut slots: Vec<Slot<T>> = vec![None; len];
        for (index, value) in pins {
            if let Some(slot) = slots.get_mut(index) {
                *slot = Some(HashSet::from([value]));
            }
        }
        Self::new(slots, empty)
    }

    fn compile(&mut self) {
        let len = self.slots.len();
        let mut open: Option<usize> = None;

        for i in 0..len {
            if self.is_potentially_empty(i) {
                if let Some(start) = open.take() {
                    self.boundaries.push(Boundary { start, end: i - 1 });
                }
            } else if open.is_none() {
                open = Some(i);
            }

            if !self.is_forced_empty(i) {
                let opens_run = i == 0 || self.is_forced_empty(i - 1);
                if opens_run && !self.is_potentially_empty(i) {
                    self.anchors[i] = Some(i);
                } else if i > 0 && !self.is_potentially_empty(i - 1) {
                    self.anchors[i] = self.anchors[i - 1];
                }
            }

            self.can_start[i] = i == 0 || self.is_potentially_empty(i - 1);
            self.can_end[i] = i + 1 == len || self.is_potentially_empty(i + 1);
        }

        if let Some(start) = open {
            self.boundaries.push(Boundary { start, end: len - 1 });
        }
    }

    /// Number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The marker standing for "no value here".
    #[inline]
    pub fn empty_value(&self) -> &T {
        &self.empty
    }

    /// Legal values at `index`; `None` when unrestricted or out of range.
    #[inline]
    pub fn slot(&self, index: usize) -> Option<&HashSet<T>> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }

    /// Exactly one legal value, and it is not the empty marker.
    pub fn is_concrete(&self, index: usize) -> bool {
        self.concrete_value(index).is_some()
    }

    pub fn concrete_value(&self, index: usize) -> Option<&T> {
        let set = self.slot(index)?;
        if set.len() != 1 {
            return None;
        }
        set.iter().next().filter(|value| **value != self.empty)
    }

    /// The position only admits the empty marker.
    pub fn is_forced_empty(&self, index: usize) -> bool {
        self.slot(index)
            .is_some_and(|set| set.len() == 1 && set.contains(&self.empty))
    }

    /// The position may be left empty: unrestricted, or lists the marker.
    ///
    /// Out-of-range positions count as empty.
    pub fn is_potentially_empty(&self, index: usize) -> bool {
        match self.slots.get(index) {
            Some(Some(set)) => set.contains(&self.empty),
            Some(None) | None => true,
        }
    }

    /// Whether `value` may fill `index`. The empty marker never may.
    pub fn permits(&self, index: usize, value: &T) -> bool {
        if *value == self.empty || index >= self.len() {
            return false;
        }
        self.slot(index).is_none_or(|set| set.contains(value))
    }

    /// Maximal runs of positions that cannot be empty, in index order.
    pub fn sequence_boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    /// Earliest position `index` is rigidly tied to, when the run leading
    /// to it starts at the pattern edge or right after a forced-empty slot.
    pub fn hard_prefix_limit(&self, index: usize) -> Option<usize> {
        self.anchors.get(index).copied().flatten()
    }

    /// A match may begin at `index`.
    pub fn can_start_at(&self, index: usize) -> bool {
        self.can_start.get(index).copied().unwrap_or(false)
    }

    /// A match may end at `index`.
    pub fn can_end_at(&self, index: usize) -> bool {
        self.can_end.get(index).copied().unwrap_or(false)
    }
}
