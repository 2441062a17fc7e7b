//! Seed generation.
//!
//! A target index is where a search starts walking. Before walking, the
//! pattern's anchors decide whether the start can be pinned:
//!
//! - **hard**: the run holding the target is tied to the pattern edge or to
//!   a forced-empty slot, so any match starts exactly at the anchor and only
//!   the source's children need trying there
//! - **soft**: the slot before the target may be empty but is itself
//!   anchored, so a match starts either at that anchor or at the target
//! - otherwise every node carrying a legal value at the target is a seed,
//!   and the backward walk finds the starts

use std::hash::Hash;

use seqdag_core::{NodeId, SequenceGraph};

use crate::pattern::Pattern;
use crate::state::SearchState;

/// Index a search must cover, and the lowest index a match may start at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Target {
    pub(crate) index: usize,
    pub(crate) floor: usize,
}

#[derive(Clone, Debug)]
pub(crate) struct Seed<T> {
    pub(crate) state: SearchState<T>,
    /// Placed at a known start: the backward walk is skipped.
    pub(crate) pinned: bool,
}

pub(crate) struct SeedPlanner<'a, T> {
    pub(crate) graph: &'a SequenceGraph<T>,
    pub(crate) pattern: &'a Pattern<T>,
    pub(crate) pool: &'a [T],
    pub(crate) wildcards: usize,
}

impl<T: Clone + Eq + Hash> SeedPlanner<'_, T> {
    pub(crate) fn plan(&self, target: Target) -> Vec<Seed<T>> {
        let index = target.index;
        if index >= self.pattern.len() || self.pattern.is_forced_empty(index) {
            return Vec::new();
        }

        if let Some(anchor) = self.pattern.hard_prefix_limit(index) {
            let mut seeds = Vec::new();
            if anchor >= target.floor {
                self.place(self.graph.valid_start_nodes(), anchor, true, &mut seeds);
            }
            return seeds;
        }

        if index > 0
            && self.pattern.is_potentially_empty(index - 1)
            && let Some(anchor) = self.pattern.hard_prefix_limit(index - 1)
        {
            let mut seeds = Vec::new();
            if anchor >= target.floor {
                self.place(self.graph.valid_start_nodes(), anchor, true, &mut seeds);
            }
            self.place(self.graph.valid_start_nodes(), index, true, &mut seeds);
            return seeds;
        }

        let mut seeds = Vec::new();
        if let Some(value) = self.pattern.concrete_value(index) {
            let nodes = self.graph.all_nodes_with_value(value).iter().copied();
            self.place(nodes, index, false, &mut seeds);
            return seeds;
        }

        for value in self.graph.values() {
            if !self.pattern.permits(index, value) {
                continue;
            }
            if self.wildcards == 0 && !self.pool.contains(value) {
                continue;
            }
            let nodes = self.graph.all_nodes_with_value(value).iter().copied();
            self.place(nodes, index, false, &mut seeds);
        }
        seeds
    }

    /// Seed states for `nodes` placed at `index`.
    ///
    /// A fixed position costs nothing. An open one forks into a pool
    /// variant and a wildcard variant, each only when affordable.
    fn place(
        &self,
        nodes: impl Iterator<Item = NodeId>,
        index: usize,
        pinned: bool,
        seeds: &mut Vec<Seed<T>>,
    ) {
        let fixed = self.pattern.concrete_value(index);
        for node in nodes {
            let Some(value) = self.graph.node(node).value() else {
                continue;
            };
            let blank = SearchState::new(node, index, self.pool.to_vec(), self.wildcards);

            if let Some(fixed) = fixed {
                if value == fixed {
                    seeds.push(Seed {
                        state: blank,
                        pinned,
                    });
                }
                continue;
            }

            if !self.pattern.permits(index, value) {
                continue;
            }
            let variants = [
                blank.step_with_pool(node, index, value),
                blank.step_with_wildcard(node, index, value),
            ];
            seeds.extend(
                variants
                    .into_iter()
                    .flatten()
                    .map(|state| Seed { state, pinned }),
            );
        }
    }
}
