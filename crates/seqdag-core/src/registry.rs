//! Suffix registry for structural node deduplication.
//!
//! Two nodes are interchangeable when they carry the same value, agree on
//! whether they terminate a sequence, and point to the same children in the
//! same order. Parent edges never take part in the comparison: merging only
//! ever happens on finalized suffixes, whose parents are still being rewired.

use std::collections::HashMap;
use std::hash::Hash;

use crate::node::{Node, NodeId};

/// Structural identity of a finalized suffix node.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SuffixKey<T> {
    value: Option<T>,
    to_sink: bool,
    children: Vec<(T, Vec<NodeId>)>,
}

impl<T: Clone + Eq + Hash> SuffixKey<T> {
    pub fn of(node: &Node<T>) -> Self {
        Self {
            value: node.value.clone(),
            to_sink: node.to_sink,
            children: node
                .children
                .iter()
                .map(|(value, ids)| (value.clone(), ids.clone()))
                .collect(),
        }
    }
}

/// Canonical node per suffix structure.
#[derive(Debug, Clone)]
pub struct SuffixRegistry<T> {
    map: HashMap<SuffixKey<T>, NodeId>,
}

impl<T> Default for SuffixRegistry<T> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
        }
    }
}

impl<T: Clone + Eq + Hash> SuffixRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `candidate` under `key`.
    ///
    /// Returns the already-registered canonical node when an equivalent
    /// suffix exists, in which case `candidate` is not recorded.
    pub fn register(&mut self, key: SuffixKey<T>, candidate: NodeId) -> Option<NodeId> {
        if let Some(&canonical) = self.map.get(&key) {
            return Some(canonical);
        }
        self.map.insert(key, candidate);
        None
    }

    /// Look up the canonical node for a structure without registering.
    #[inline]
    pub fn get(&self, key: &SuffixKey<T>) -> Option<NodeId> {
        self.map.get(key).copied()
    }

    /// Number of canonical suffixes.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
