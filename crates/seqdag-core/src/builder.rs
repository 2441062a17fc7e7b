//! Incremental construction of minimal sequence graphs.
//!
//! Sequences must arrive in ascending lexicographic order. Each insertion
//! shares the longest common prefix with the previous sequence and hangs the
//! rest off the frontier as a fresh chain. Whatever the previous sequence
//! added beyond that prefix can no longer change, so it is minimized first:
//! walking from its tail toward the prefix, each node is either replaced by
//! the registered node with the same structure or becomes canonical itself.
//!
//! Unsorted input is not detected; it yields a graph that is no longer
//! minimal or no longer reproduces the input.

use std::hash::Hash;

use tracing::debug;

use crate::graph::SequenceGraph;
use crate::invariants::ensure_remapped;
use crate::node::{DefaultNodeFactory, Node, NodeFactory, NodeId};
use crate::registry::{SuffixKey, SuffixRegistry};
use crate::utils::common_prefix_len;

/// Edge of the most recent sequence whose target is not yet minimized.
#[derive(Debug, Clone)]
struct UncheckedEdge<T> {
    parent: NodeId,
    value: T,
    child: NodeId,
}

/// Builds a `SequenceGraph` from a sorted stream of sequences.
///
/// Merged nodes leave an empty slot behind; `finish` compacts the arena so
/// the resulting graph has contiguous handles.
#[derive(Debug)]
pub struct GraphBuilder<T, F = DefaultNodeFactory> {
    slots: Vec<Option<Node<T>>>,
    registry: SuffixRegistry<T>,
    unchecked: Vec<UncheckedEdge<T>>,
    previous: Vec<T>,
    factory: F,
    inserted: usize,
    merged: usize,
}

impl<T: Clone + Eq + Hash> GraphBuilder<T> {
    pub fn new() -> Self {
        Self::with_factory(DefaultNodeFactory)
    }
}

impl<T: Clone + Eq + Hash> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> GraphBuilder<T, F>
where
    T: Clone + Eq + Hash,
    F: NodeFactory<T>,
{
    /// Builder that provisions nodes through `factory`.
    pub fn with_factory(mut factory: F) -> Self {
        let source = factory.create_node(NodeId::SOURCE, None);
        let sink = factory.create_node(NodeId::SINK, None);
        Self {
            slots: vec![Some(source), Some(sink)],
            registry: SuffixRegistry::new(),
            unchecked: Vec::new(),
            previous: Vec::new(),
            factory,
            inserted: 0,
            merged: 0,
        }
    }

    /// Insert the next sequence in sort order.
    ///
    /// Re-inserting the previous sequence is a no-op.
    pub fn insert(&mut self, sequence: &[T]) {
        let lcp = common_prefix_len(&self.previous, sequence);
        if self.inserted > 0 && lcp == sequence.len() && lcp == self.previous.len() {
            return;
        }

        self.minimize(lcp);

        let mut frontier = self.unchecked.last().map_or(NodeId::SOURCE, |e| e.child);
        for value in &sequence[lcp..] {
            let child = self.alloc(Some(value.clone()));
            self.slot_mut(frontier).add_child(value.clone(), child);
            self.unchecked.push(UncheckedEdge {
                parent: frontier,
                value: value.clone(),
                child,
            });
            frontier = child;
        }
        self.slot_mut(frontier).to_sink = true;

        self.previous.clear();
        self.previous.extend_from_slice(sequence);
        self.inserted += 1;
    }

    /// Number of distinct sequences inserted so far.
    pub fn inserted(&self) -> usize {
        self.inserted
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Number of live nodes, sentinels included.
    pub fn node_count(&self) -> usize {
        self.slots.len() - self.merged
    }

    /// Minimize the remaining chain and freeze the graph.
    pub fn finish(mut self) -> SequenceGraph<T> {
        self.minimize(0);

        let mut remap = Vec::with_capacity(self.slots.len());
        let mut nodes = Vec::with_capacity(self.slots.len() - self.merged);
        for slot in self.slots {
            match slot {
                Some(node) => {
                    remap.push(Some(NodeId::from_index(nodes.len())));
                    nodes.push(node);
                }
                None => remap.push(None),
            }
        }

        for node in &mut nodes {
            for ids in node.children.values_mut() {
                for id in ids.iter_mut() {
                    *id = ensure_remapped(&remap, *id);
                }
            }
        }

        debug!(
            sequences = self.inserted,
            nodes = nodes.len(),
            merged = self.merged,
            canonical = self.registry.len(),
            "sequence graph finished"
        );

        SequenceGraph::from_nodes(nodes)
    }

    /// Finalize unchecked edges until only `down_to` remain.
    fn minimize(&mut self, down_to: usize) {
        while self.unchecked.len() > down_to {
            let Some(edge) = self.unchecked.pop() else {
                break;
            };

            let key = SuffixKey::of(self.slot(edge.child));
            let Some(canonical) = self.registry.register(key, edge.child) else {
                continue;
            };

            let parent = self.slot_mut(edge.parent);
            if let Some(ids) = parent.children.get_mut(&edge.value) {
                for id in ids.iter_mut().filter(|id| **id == edge.child) {
                    *id = canonical;
                }
            }
            self.slots[edge.child.index()] = None;
            self.merged += 1;
        }
    }

    fn alloc(&mut self, value: Option<T>) -> NodeId {
        let id = NodeId::from_index(self.slots.len());
        let node = self.factory.create_node(id, value);
        self.slots.push(Some(node));
        id
    }

    fn slot(&self, id: NodeId) -> &Node<T> {
        self.ensure_live(id)
    }

    fn slot_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.ensure_live_mut(id)
    }

    pub(crate) fn raw_slot(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub(crate) fn raw_slot_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }
}

impl<T, F, S> Extend<S> for GraphBuilder<T, F>
where
    T: Clone + Eq + Hash,
    F: NodeFactory<T>,
    S: AsRef<[T]>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, sequences: I) {
        for sequence in sequences {
            self.insert(sequence.as_ref());
        }
    }
}
