//! In-progress match attempts.
//!
//! A `SearchState` is a snapshot: every step clones it into a new state,
//! so sibling branches of the walk never observe each other's pool or
//! placements.

use std::collections::BTreeMap;

use seqdag_core::NodeId;
use seqdag_core::utils::remove_first;

/// Which way a walk moves through the pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward index 0, over parent edges.
    Backward,
    /// Toward the last index, over child edges.
    Forward,
}

impl Direction {
    /// Index one step away from `index`, or `None` past the pattern edge.
    #[inline]
    pub fn next(self, index: usize, len: usize) -> Option<usize> {
        match self {
            Direction::Backward => index.checked_sub(1),
            Direction::Forward => Some(index + 1).filter(|&next| next < len),
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Backward => "←",
            Direction::Forward => "→",
        }
    }
}

/// Graph position, pattern position and the resources left to spend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState<T> {
    index: usize,
    node: NodeId,
    pool: Vec<T>,
    wildcards: usize,
    /// Values placed at positions the pattern does not fix.
    used: BTreeMap<usize, T>,
    wildcard_indices: Vec<usize>,
}

impl<T: Clone + PartialEq> SearchState<T> {
    pub fn new(node: NodeId, index: usize, pool: Vec<T>, wildcards: usize) -> Self {
        Self {
            index,
            node,
            pool,
            wildcards,
            used: BTreeMap::new(),
            wildcard_indices: Vec::new(),
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Pool values not yet placed.
    pub fn pool(&self) -> &[T] {
        &self.pool
    }

    /// Remaining wildcard budget.
    pub fn wildcards(&self) -> usize {
        self.wildcards
    }

    pub fn used(&self) -> &BTreeMap<usize, T> {
        &self.used
    }

    /// Positions filled by a wildcard, in the order they were filled.
    pub fn wildcard_indices(&self) -> &[usize] {
        &self.wildcard_indices
    }

    /// Move onto a position whose value the pattern fixes.
    pub fn step(&self, node: NodeId, index: usize) -> Self {
        Self {
            index,
            node,
            ..self.clone()
        }
    }

    /// Move onto `index`, placing `value` taken from the pool.
    ///
    /// `None` when the pool holds no copy of `value`.
    pub fn step_with_pool(&self, node: NodeId, index: usize, value: &T) -> Option<Self> {
        let mut pool = self.pool.clone();
        if !remove_first(&mut pool, value) {
            return None;
        }
        let mut used = self.used.clone();
        used.insert(index, value.clone());
        Some(Self {
            index,
            node,
            pool,
            wildcards: self.wildcards,
            used,
            wildcard_indices: self.wildcard_indices.clone(),
        })
    }

    /// Move onto `index`, placing `value` by spending one wildcard.
    ///
    /// `None` when the budget is exhausted.
    pub fn step_with_wildcard(&self, node: NodeId, index: usize, value: &T) -> Option<Self> {
        let wildcards = self.wildcards.checked_sub(1)?;
        let mut used = self.used.clone();
        used.insert(index, value.clone());
        let mut wildcard_indices = self.wildcard_indices.clone();
        wildcard_indices.push(index);
        Some(Self {
            index,
            node,
            pool: self.pool.clone(),
            wildcards,
            used,
            wildcard_indices,
        })
    }

    /// Jump back to `node` at `index`, keeping everything spent so far.
    ///
    /// Used to turn a finished prefix into the start of the suffix walk.
    pub fn relocate(mut self, node: NodeId, index: usize) -> Self {
        self.node = node;
        self.index = index;
        self
    }
}
