//! Graph vertices and their arena handles.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A lightweight handle to a node in a `SequenceGraph` arena.
///
/// Handles are only meaningful for the graph (or builder) that issued them.
/// The two sentinels always occupy the first two slots.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// The sentinel every stored sequence starts from.
    pub const SOURCE: Self = Self(0);
    /// The sentinel every stored sequence ends at.
    pub const SINK: Self = Self(1);

    /// Raw index for serialization/debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Create a NodeId from a raw index. Use only for deserialization.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    #[inline]
    pub fn is_sentinel(self) -> bool {
        self == Self::SOURCE || self == Self::SINK
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

/// A single vertex of the sequence graph.
///
/// Neighbors are grouped by *their* value, so `children[&v]` lists the
/// successors carrying `v` and `parents[&v]` the predecessors carrying `v`.
/// Edges to the value-less sentinels are kept as flags instead of map entries:
/// `to_sink` marks a node that terminates a sequence, `from_source` one that
/// begins a sequence.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub(crate) value: Option<T>,
    pub(crate) children: IndexMap<T, Vec<NodeId>>,
    pub(crate) parents: IndexMap<T, Vec<NodeId>>,
    pub(crate) to_sink: bool,
    pub(crate) from_source: bool,
}

impl<T: Clone + Eq + Hash> Node<T> {
    /// Fresh node without edges. Sentinels carry no value.
    pub fn new(value: Option<T>) -> Self {
        Self {
            value,
            children: IndexMap::new(),
            parents: IndexMap::new(),
            to_sink: false,
            from_source: false,
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Children grouped by value, in insertion order.
    pub fn children(&self) -> &IndexMap<T, Vec<NodeId>> {
        &self.children
    }

    /// Parents grouped by value, in insertion order.
    pub fn parents(&self) -> &IndexMap<T, Vec<NodeId>> {
        &self.parents
    }

    /// Whether the sink is among this node's children.
    pub fn is_terminal(&self) -> bool {
        self.to_sink
    }

    /// Whether the source is among this node's parents.
    pub fn is_initial(&self) -> bool {
        self.from_source
    }

    /// Children carrying exactly `value`.
    pub fn children_with(&self, value: &T) -> &[NodeId] {
        self.children.get(value).map_or(&[], Vec::as_slice)
    }

    /// Parents carrying exactly `value`.
    pub fn parents_with(&self, value: &T) -> &[NodeId] {
        self.parents.get(value).map_or(&[], Vec::as_slice)
    }

    /// Number of outgoing edges, the sink edge included.
    pub fn out_degree(&self) -> usize {
        self.children.values().map(Vec::len).sum::<usize>() + usize::from(self.to_sink)
    }

    pub(crate) fn add_child(&mut self, value: T, child: NodeId) {
        self.children.entry(value).or_default().push(child);
    }

    pub(crate) fn add_parent(&mut self, value: T, parent: NodeId) {
        self.parents.entry(value).or_default().push(parent);
    }
}

/// Storage hook for graph construction.
///
/// The builder asks the factory for every node it allocates, passing the
/// handle the node will live under. Swapping the factory changes how nodes
/// are provisioned without touching the construction algorithm.
pub trait NodeFactory<T> {
    fn create_node(&mut self, id: NodeId, value: Option<T>) -> Node<T>;
}

/// Allocates plain empty nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNodeFactory;

impl<T: Clone + Eq + Hash> NodeFactory<T> for DefaultNodeFactory {
    #[inline]
    fn create_node(&mut self, _id: NodeId, value: Option<T>) -> Node<T> {
        Node::new(value)
    }
}
