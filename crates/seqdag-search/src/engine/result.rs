//! Completed matches.

use std::collections::BTreeMap;
use std::hash::Hash;

use serde::Serialize;

use crate::pattern::Pattern;
use crate::state::SearchState;

/// A stored sequence laid over the pattern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchResult<T> {
    /// The matched sequence, left to right.
    pub sequence: Vec<T>,
    /// Pattern positions filled by a wildcard, ascending.
    pub wildcard_positions: Vec<usize>,
    /// Pattern position of the first element.
    pub start: usize,
    /// Pattern position of the last element.
    pub end: usize,
    /// Every position the pattern left open, with the value placed there.
    pub placements: BTreeMap<usize, T>,
}

impl<T: Clone + Eq + Hash> MatchResult<T> {
    pub(crate) fn assemble(pattern: &Pattern<T>, state: SearchState<T>, start: usize) -> Self {
        let end = state.index();
        let sequence = (start..=end)
            .map_while(|i| pattern.concrete_value(i).or_else(|| state.used().get(&i)))
            .cloned()
            .collect();

        let mut wildcard_positions = state.wildcard_indices().to_vec();
        wildcard_positions.sort_unstable();

        Self {
            sequence,
            wildcard_positions,
            start,
            end,
            placements: state.used().clone(),
        }
    }

    /// Values drawn from the pool, i.e. placements not covered by a wildcard.
    pub fn pool_values(&self) -> impl Iterator<Item = &T> {
        self.placements
            .iter()
            .filter(|(index, _)| self.wildcard_positions.binary_search(*index).is_err())
            .map(|(_, value)| value)
    }
}
