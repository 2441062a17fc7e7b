//! Search entry points.

use std::borrow::Borrow;
use std::hash::Hash;

use seqdag_core::SequenceGraph;
use tracing::debug;

use crate::pattern::Pattern;

use super::matches::Matches;
use super::seeds::Target;
use super::trace::{NoopTracer, Tracer};

/// Read-only search handle over a graph.
///
/// Holds nothing but the borrow, so it is `Copy` and any number of
/// searches may run against one graph at once, from any thread.
pub struct Searcher<'g, T> {
    graph: &'g SequenceGraph<T>,
}

impl<T> Clone for Searcher<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Searcher<'_, T> {}

impl<'g, T: Clone + Eq + Hash> Searcher<'g, T> {
    pub fn new(graph: &'g SequenceGraph<T>) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g SequenceGraph<T> {
        self.graph
    }

    /// Whether `sequence` is stored in the graph.
    pub fn contains<I>(&self, sequence: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        self.graph.contains(sequence)
    }

    /// All stored sequences that fit `pattern` and touch at least one of
    /// its runs, filling open positions from `pool` (each element at most
    /// once) or with up to `wildcards` wildcards.
    ///
    /// A match spanning several runs is reported once.
    pub fn find_matches<'p, P>(
        &self,
        pool: P,
        pattern: &'p Pattern<T>,
        wildcards: usize,
    ) -> Matches<'g, 'p, T>
    where
        P: IntoIterator<Item = T>,
    {
        self.find_matches_with(pool, pattern, wildcards, NoopTracer)
    }

    pub fn find_matches_with<'p, P, Tr>(
        &self,
        pool: P,
        pattern: &'p Pattern<T>,
        wildcards: usize,
        tracer: Tr,
    ) -> Matches<'g, 'p, T, Tr>
    where
        P: IntoIterator<Item = T>,
        Tr: Tracer<T>,
    {
        let mut targets = Vec::new();
        let mut floor = 0;
        for boundary in pattern.sequence_boundaries() {
            targets.push(Target {
                index: boundary.start,
                floor,
            });
            floor = boundary.end + 1;
        }
        self.start(pool.into_iter().collect(), pattern, wildcards, targets, tracer)
    }

    /// Like `find_matches`, but only matches that cover `index`.
    pub fn find_matches_containing<'p, P>(
        &self,
        pool: P,
        pattern: &'p Pattern<T>,
        wildcards: usize,
        index: usize,
    ) -> Matches<'g, 'p, T>
    where
        P: IntoIterator<Item = T>,
    {
        self.find_matches_containing_with(pool, pattern, wildcards, index, NoopTracer)
    }

    pub fn find_matches_containing_with<'p, P, Tr>(
        &self,
        pool: P,
        pattern: &'p Pattern<T>,
        wildcards: usize,
        index: usize,
        tracer: Tr,
    ) -> Matches<'g, 'p, T, Tr>
    where
        P: IntoIterator<Item = T>,
        Tr: Tracer<T>,
    {
        let targets = if index < pattern.len() {
            vec![Target { index, floor: 0 }]
        } else {
            Vec::new()
        };
        self.start(pool.into_iter().collect(), pattern, wildcards, targets, tracer)
    }

    fn start<'p, Tr: Tracer<T>>(
        &self,
        pool: Vec<T>,
        pattern: &'p Pattern<T>,
        wildcards: usize,
        targets: Vec<Target>,
        tracer: Tr,
    ) -> Matches<'g, 'p, T, Tr> {
        debug!(
            positions = pattern.len(),
            targets = targets.len(),
            pool = pool.len(),
            wildcards,
            "search started"
        );
        Matches::new(self.graph, pattern, pool, wildcards, targets, tracer)
    }
}
