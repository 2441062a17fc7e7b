//! Frozen sequence graph and its query surface.
//!
//! A `SequenceGraph` never changes after `GraphBuilder::finish` (or a load),
//! so any number of threads may query it through shared references.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;

use indexmap::IndexMap;
use serde::Serialize;

use crate::builder::GraphBuilder;
use crate::node::{Node, NodeId};

/// Minimal DAG over sequences of `T`.
///
/// Nodes live in a flat arena addressed by `NodeId`; the source and sink
/// sentinels are always `N0` and `N1`. A value index maps each value to all
/// nodes carrying it, and value-less nodes (the sentinels) sit in their own
/// bucket.
#[derive(Debug, Clone)]
pub struct SequenceGraph<T> {
    nodes: Vec<Node<T>>,
    by_value: IndexMap<T, Vec<NodeId>>,
    valueless: Vec<NodeId>,
}

/// Size summary of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Nodes including both sentinels.
    pub nodes: usize,
    /// Edges including those to and from the sentinels.
    pub edges: usize,
    /// Distinct stored sequences.
    pub sequences: u64,
}

impl<T: Clone + Eq + Hash> SequenceGraph<T> {
    pub fn builder() -> GraphBuilder<T> {
        GraphBuilder::new()
    }

    /// Build from sequences already sorted in ascending order.
    pub fn from_sorted<I, S>(sequences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[T]>,
    {
        let mut builder = GraphBuilder::new();
        builder.extend(sequences);
        builder.finish()
    }

    /// Assemble a graph from nodes whose child edges and sink flags are set.
    ///
    /// Parent edges and the value index are derived here, so both the
    /// builder and the loader only need to provide the forward structure.
    pub(crate) fn from_nodes(mut nodes: Vec<Node<T>>) -> Self {
        for node in &mut nodes {
            node.parents.clear();
            node.from_source = false;
        }

        let mut edges = Vec::new();
        for (index, node) in nodes.iter().enumerate() {
            let parent = NodeId::from_index(index);
            for ids in node.children.values() {
                edges.extend(ids.iter().map(|&child| (child, parent)));
            }
            if node.to_sink {
                edges.push((NodeId::SINK, parent));
            }
        }

        for (child, parent) in edges {
            let parent_value = nodes[parent.index()].value.clone();
            let child = &mut nodes[child.index()];
            match parent_value {
                Some(value) => child.add_parent(value, parent),
                None => child.from_source = true,
            }
        }

        let mut by_value: IndexMap<T, Vec<NodeId>> = IndexMap::new();
        let mut valueless = Vec::new();
        for (index, node) in nodes.iter().enumerate() {
            let id = NodeId::from_index(index);
            match &node.value {
                Some(value) => by_value.entry(value.clone()).or_default().push(id),
                None => valueless.push(id),
            }
        }

        Self {
            nodes,
            by_value,
            valueless,
        }
    }

    #[inline]
    pub fn source(&self) -> NodeId {
        NodeId::SOURCE
    }

    #[inline]
    pub fn sink(&self) -> NodeId {
        NodeId::SINK
    }

    /// Get node by ID.
    ///
    /// # Panics
    /// Panics if the handle does not belong to this graph.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node<T> {
        self.ensure_node(id)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.index())
    }

    /// Number of nodes, sentinels included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when no sequence (not even the empty one) is stored.
    pub fn is_empty(&self) -> bool {
        let source = self.node(NodeId::SOURCE);
        source.children.is_empty() && !source.to_sink
    }

    /// Iterate over all nodes with their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<T>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::from_index(i), n))
    }

    /// Whether `id` is the source or the sink.
    #[inline]
    pub fn is_boundary(&self, id: NodeId) -> bool {
        id.is_sentinel()
    }

    /// Every node carrying `value`; empty when the value never occurs.
    #[inline]
    pub fn all_nodes_with_value(&self, value: &T) -> &[NodeId] {
        self.by_value.get(value).map_or(&[], Vec::as_slice)
    }

    /// Nodes without a value.
    #[inline]
    pub fn valueless_nodes(&self) -> &[NodeId] {
        &self.valueless
    }

    /// Distinct values present in the graph, in first-seen order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.by_value.keys()
    }

    /// Whether `sequence` is stored, following exact-value child edges from
    /// the source.
    pub fn contains<I>(&self, sequence: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let mut frontier = vec![NodeId::SOURCE];
        for item in sequence {
            let value = item.borrow();
            let mut next = Vec::new();
            for &id in &frontier {
                next.extend_from_slice(self.node(id).children_with(value));
            }
            if next.is_empty() {
                return false;
            }
            next.sort_unstable();
            next.dedup();
            frontier = next;
        }
        frontier.iter().any(|&id| self.node(id).to_sink)
    }

    /// Successors of `id`, restricted to `filter` values when given.
    ///
    /// The sink, having no value, is yielded last whenever `id` terminates
    /// a sequence, regardless of the filter.
    pub fn children<'a>(
        &'a self,
        id: NodeId,
        filter: Option<&'a HashSet<T>>,
    ) -> impl Iterator<Item = NodeId> + 'a {
        let node = self.node(id);
        filtered(&node.children, filter).chain(node.to_sink.then_some(NodeId::SINK))
    }

    /// Predecessors of `id`, restricted to `filter` values when given.
    ///
    /// The source is yielded last whenever `id` begins a sequence.
    pub fn parents<'a>(
        &'a self,
        id: NodeId,
        filter: Option<&'a HashSet<T>>,
    ) -> impl Iterator<Item = NodeId> + 'a {
        let node = self.node(id);
        filtered(&node.parents, filter).chain(node.from_source.then_some(NodeId::SOURCE))
    }

    /// Nodes that can open a sequence (the source's children).
    pub fn valid_start_nodes(&self) -> impl Iterator<Item = NodeId> {
        filtered(&self.node(NodeId::SOURCE).children, None)
    }

    /// Nodes that can close a sequence (the sink's parents).
    pub fn valid_end_nodes(&self) -> impl Iterator<Item = NodeId> {
        filtered(&self.node(NodeId::SINK).parents, None)
    }

    /// Enumerate every stored sequence.
    ///
    /// Exponential in the worst case; meant for verification on small graphs.
    /// A graph built from sorted input yields its sequences in that order.
    pub fn all_sequences(&self) -> Vec<Vec<T>> {
        let mut out = Vec::new();
        let mut stack = vec![(NodeId::SOURCE, Vec::new())];

        while let Some((id, prefix)) = stack.pop() {
            let node = self.node(id);
            if node.to_sink {
                out.push(prefix.clone());
            }
            for (value, ids) in node.children.iter().rev() {
                for &child in ids.iter().rev() {
                    let mut next = prefix.clone();
                    next.push(value.clone());
                    stack.push((child, next));
                }
            }
        }

        out
    }

    /// Count stored sequences without enumerating them.
    pub fn sequence_count(&self) -> u64 {
        let mut counts: Vec<Option<u64>> = vec![None; self.nodes.len()];
        let mut stack = vec![(NodeId::SOURCE, false)];

        while let Some((id, expanded)) = stack.pop() {
            if counts[id.index()].is_some() {
                continue;
            }
            let node = self.node(id);
            let children = node.children.values().flatten().copied();

            if expanded {
                let total = children
                    .map(|child| counts[child.index()].unwrap_or(0))
                    .fold(u64::from(node.to_sink), u64::saturating_add);
                counts[id.index()] = Some(total);
            } else {
                stack.push((id, true));
                stack.extend(
                    children
                        .filter(|child| counts[child.index()].is_none())
                        .map(|child| (child, false)),
                );
            }
        }

        counts[NodeId::SOURCE.index()].unwrap_or(0)
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::out_degree).sum()
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            nodes: self.len(),
            edges: self.edge_count(),
            sequences: self.sequence_count(),
        }
    }

    pub(crate) fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }
}

fn filtered<'a, T: Eq + Hash>(
    edges: &'a IndexMap<T, Vec<NodeId>>,
    filter: Option<&'a HashSet<T>>,
) -> impl Iterator<Item = NodeId> + 'a {
    edges
        .iter()
        .filter(move |(value, _)| filter.is_none_or(|allowed| allowed.contains(*value)))
        .flat_map(|(_, ids)| ids.iter().copied())
}
