//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use std::hash::Hash;

use crate::builder::GraphBuilder;
use crate::graph::SequenceGraph;
use crate::node::{Node, NodeFactory, NodeId};

impl<T, F> GraphBuilder<T, F>
where
    T: Clone + Eq + Hash,
    F: NodeFactory<T>,
{
    pub(crate) fn ensure_live(&self, id: NodeId) -> &Node<T> {
        self.raw_slot(id).unwrap_or_else(|| {
            panic!("GraphBuilder: {id} is not live (merged nodes must not be referenced)")
        })
    }

    pub(crate) fn ensure_live_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.raw_slot_mut(id).unwrap_or_else(|| {
            panic!("GraphBuilder: {id} is not live (merged nodes must not be referenced)")
        })
    }
}

impl<T: Clone + Eq + Hash> SequenceGraph<T> {
    pub(crate) fn ensure_node(&self, id: NodeId) -> &Node<T> {
        self.get(id).unwrap_or_else(|| {
            panic!(
                "SequenceGraph: {id} out of range ({} nodes); \
                 handles from another graph?",
                self.len()
            )
        })
    }
}

pub(crate) fn ensure_remapped(remap: &[Option<NodeId>], id: NodeId) -> NodeId {
    remap.get(id.index()).copied().flatten().unwrap_or_else(|| {
        panic!("GraphBuilder: edge to merged {id} survived minimization")
    })
}
