//! Single-direction depth-first walk.
//!
//! A walk owns an explicit stack of states. Each popped state is first
//! checked for a boundary collision: the walk has reached a position where
//! the pattern lets a match begin (backward) or end (forward), and the node
//! there touches the source (backward) or the sink (forward). A colliding
//! state is yielded, and its neighbors are pushed only when the caller asks
//! for the next state, so a caller that stops early never pays for them.

use std::hash::Hash;

use seqdag_core::{NodeId, SequenceGraph};

use crate::pattern::Pattern;
use crate::state::{Direction, SearchState};

use super::trace::Tracer;

pub(crate) struct Walk<'g, 'p, T> {
    graph: &'g SequenceGraph<T>,
    pattern: &'p Pattern<T>,
    direction: Direction,
    /// Backward: lowest index a match may start at.
    /// Forward: lowest index a match may end at.
    limit: usize,
    expand: bool,
    stack: Vec<SearchState<T>>,
    deferred: Option<SearchState<T>>,
}

impl<'g, 'p, T: Clone + Eq + Hash> Walk<'g, 'p, T> {
    pub(crate) fn backward(
        graph: &'g SequenceGraph<T>,
        pattern: &'p Pattern<T>,
        floor: usize,
        root: SearchState<T>,
    ) -> Self {
        Self::new(graph, pattern, Direction::Backward, floor, root, true)
    }

    /// Backward "walk" that only checks whether `root` is a legal start.
    pub(crate) fn pinned(
        graph: &'g SequenceGraph<T>,
        pattern: &'p Pattern<T>,
        floor: usize,
        root: SearchState<T>,
    ) -> Self {
        Self::new(graph, pattern, Direction::Backward, floor, root, false)
    }

    pub(crate) fn forward(
        graph: &'g SequenceGraph<T>,
        pattern: &'p Pattern<T>,
        min_end: usize,
        root: SearchState<T>,
    ) -> Self {
        Self::new(graph, pattern, Direction::Forward, min_end, root, true)
    }

    fn new(
        graph: &'g SequenceGraph<T>,
        pattern: &'p Pattern<T>,
        direction: Direction,
        limit: usize,
        root: SearchState<T>,
        expand: bool,
    ) -> Self {
        Self {
            graph,
            pattern,
            direction,
            limit,
            expand,
            stack: vec![root],
            deferred: None,
        }
    }

    /// Next state that collides with the pattern edge in this direction.
    pub(crate) fn next_with<Tr: Tracer<T>>(
        &mut self,
        tracer: &mut Tr,
    ) -> Option<SearchState<T>> {
        if let Some(state) = self.deferred.take() {
            self.expand_from(&state, tracer);
        }

        while let Some(state) = self.stack.pop() {
            if self.collides(&state) {
                if self.expand {
                    self.deferred = Some(state.clone());
                }
                return Some(state);
            }
            self.expand_from(&state, tracer);
        }
        None
    }

    fn collides(&self, state: &SearchState<T>) -> bool {
        let index = state.index();
        if index < self.limit {
            return false;
        }
        let node = self.graph.node(state.node());
        match self.direction {
            Direction::Backward => node.is_initial() && self.pattern.can_start_at(index),
            Direction::Forward => node.is_terminal() && self.pattern.can_end_at(index),
        }
    }

    fn expand_from<Tr: Tracer<T>>(&mut self, state: &SearchState<T>, tracer: &mut Tr) {
        if !self.expand {
            return;
        }
        let Some(next) = self.direction.next(state.index(), self.pattern.len()) else {
            return;
        };
        if self.direction == Direction::Backward && next < self.limit {
            return;
        }

        let filter = self.pattern.slot(next);
        let branches = match self.direction {
            Direction::Backward => {
                self.branch(state, next, self.graph.parents(state.node(), filter))
            }
            Direction::Forward => {
                self.branch(state, next, self.graph.children(state.node(), filter))
            }
        };

        for branch in &branches {
            tracer.trace_step(self.direction, branch);
        }
        // Reversed so the first neighbor is explored first.
        self.stack.extend(branches.into_iter().rev());
    }

    fn branch(
        &self,
        state: &SearchState<T>,
        next: usize,
        neighbors: impl Iterator<Item = NodeId>,
    ) -> Vec<SearchState<T>> {
        let fixed = self.pattern.is_concrete(next);
        let mut branches = Vec::new();

        for neighbor in neighbors {
            if self.graph.is_boundary(neighbor) {
                continue;
            }
            let Some(value) = self.graph.node(neighbor).value() else {
                continue;
            };
            if fixed {
                branches.push(state.step(neighbor, next));
                continue;
            }
            if !self.pattern.permits(next, value) {
                continue;
            }
            branches.extend(state.step_with_pool(neighbor, next, value));
            branches.extend(state.step_with_wildcard(neighbor, next, value));
        }

        branches
    }
}
