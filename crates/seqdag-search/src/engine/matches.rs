//! Lazy match enumeration.

use std::hash::Hash;

use seqdag_core::{NodeId, SequenceGraph};

use crate::pattern::Pattern;

use super::result::MatchResult;
use super::seeds::{Seed, SeedPlanner, Target};
use super::trace::{NoopTracer, Tracer};
use super::walk::Walk;

/// Iterator over the matches of one search.
///
/// Work happens inside `next`: targets are planned into seeds, each seed
/// runs a backward walk, and each prefix it finds restarts at the seed for
/// a forward walk. Dropping the iterator abandons whatever is left.
pub struct Matches<'g, 'p, T, Tr = NoopTracer> {
    graph: &'g SequenceGraph<T>,
    pattern: &'p Pattern<T>,
    pool: Vec<T>,
    wildcards: usize,
    targets: std::vec::IntoIter<Target>,
    target: Target,
    seeds: std::vec::IntoIter<Seed<T>>,
    /// Node and index of the seed being walked.
    anchor: (NodeId, usize),
    backward: Option<Walk<'g, 'p, T>>,
    /// Forward walk with the start index of the prefix it extends.
    forward: Option<(usize, Walk<'g, 'p, T>)>,
    tracer: Tr,
}

impl<'g, 'p, T, Tr> Matches<'g, 'p, T, Tr>
where
    T: Clone + Eq + Hash,
    Tr: Tracer<T>,
{
    pub(crate) fn new(
        graph: &'g SequenceGraph<T>,
        pattern: &'p Pattern<T>,
        pool: Vec<T>,
        wildcards: usize,
        targets: Vec<Target>,
        tracer: Tr,
    ) -> Self {
        Self {
            graph,
            pattern,
            pool,
            wildcards,
            targets: targets.into_iter(),
            target: Target { index: 0, floor: 0 },
            seeds: Vec::new().into_iter(),
            anchor: (NodeId::SOURCE, 0),
            backward: None,
            forward: None,
            tracer,
        }
    }

    pub fn tracer(&self) -> &Tr {
        &self.tracer
    }

    fn start_seed(&mut self, seed: Seed<T>) {
        self.tracer.trace_seed(&seed.state, seed.pinned);
        self.anchor = (seed.state.node(), seed.state.index());
        let floor = self.target.floor;
        self.backward = Some(if seed.pinned {
            Walk::pinned(self.graph, self.pattern, floor, seed.state)
        } else {
            Walk::backward(self.graph, self.pattern, floor, seed.state)
        });
    }

    fn start_target(&mut self, target: Target) {
        self.tracer.trace_target(target.index, target.floor);
        self.target = target;
        let planner = SeedPlanner {
            graph: self.graph,
            pattern: self.pattern,
            pool: &self.pool,
            wildcards: self.wildcards,
        };
        self.seeds = planner.plan(target).into_iter();
    }
}

impl<T, Tr> Iterator for Matches<'_, '_, T, Tr>
where
    T: Clone + Eq + Hash,
    Tr: Tracer<T>,
{
    type Item = MatchResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((start, walk)) = &mut self.forward {
                if let Some(done) = walk.next_with(&mut self.tracer) {
                    let result = MatchResult::assemble(self.pattern, done, *start);
                    self.tracer.trace_match(&result);
                    return Some(result);
                }
                self.forward = None;
            }

            if let Some(walk) = &mut self.backward {
                if let Some(prefix) = walk.next_with(&mut self.tracer) {
                    self.tracer.trace_prefix(&prefix);
                    let start = prefix.index();
                    let (node, index) = self.anchor;
                    let root = prefix.relocate(node, index);
                    let walk = Walk::forward(self.graph, self.pattern, self.target.index, root);
                    self.forward = Some((start, walk));
                    continue;
                }
                self.backward = None;
            }

            if let Some(seed) = self.seeds.next() {
                self.start_seed(seed);
                continue;
            }

            let target = self.targets.next()?;
            self.start_target(target);
        }
    }
}
