//! Flat, serializable picture of a graph.
//!
//! Only the forward structure is stored: each node's value, its sink flag
//! and its child handles. Parent edges and the value index are rebuilt on
//! load, which keeps images small and makes them impossible to desync.

use std::hash::Hash;

use serde::{Deserialize, Serialize};

use super::error::PersistError;
use crate::graph::SequenceGraph;
use crate::node::{Node, NodeId};

/// Bumped whenever the image layout changes.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphImage<T> {
    pub version: u32,
    pub nodes: Vec<NodeImage<T>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeImage<T> {
    pub value: Option<T>,
    pub terminal: bool,
    pub children: Vec<NodeId>,
}

impl<T: Clone + Eq + Hash> SequenceGraph<T> {
    pub fn to_image(&self) -> GraphImage<T> {
        let nodes = self
            .nodes()
            .iter()
            .map(|node| NodeImage {
                value: node.value.clone(),
                terminal: node.to_sink,
                children: node.children.values().flatten().copied().collect(),
            })
            .collect();

        GraphImage {
            version: FORMAT_VERSION,
            nodes,
        }
    }

    /// Rebuild a graph from an image, validating its structure.
    pub fn from_image(image: GraphImage<T>) -> Result<Self, PersistError> {
        if image.version != FORMAT_VERSION {
            return Err(corrupt(format!(
                "unsupported format version {} (expected {FORMAT_VERSION})",
                image.version
            )));
        }

        let count = image.nodes.len();
        if count < 2 {
            return Err(corrupt(format!("{count} nodes, sentinels missing")));
        }

        let sink = &image.nodes[NodeId::SINK.index()];
        if image.nodes[NodeId::SOURCE.index()].value.is_some() || sink.value.is_some() {
            return Err(corrupt("sentinels must not carry values".to_owned()));
        }
        if sink.terminal || !sink.children.is_empty() {
            return Err(corrupt("sink must not have children".to_owned()));
        }

        for (index, node) in image.nodes.iter().enumerate().skip(2) {
            if node.value.is_none() {
                return Err(corrupt(format!("{} has no value", NodeId::from_index(index))));
            }
        }

        let mut nodes = Vec::with_capacity(count);
        for (index, entry) in image.nodes.iter().enumerate() {
            let id = NodeId::from_index(index);
            let mut node = Node::new(entry.value.clone());
            node.to_sink = entry.terminal;

            for &child in &entry.children {
                if child.index() >= count || child.is_sentinel() {
                    return Err(corrupt(format!("{id} points to invalid {child}")));
                }
                if child == id {
                    return Err(corrupt(format!("{id} points to itself")));
                }
                if let Some(value) = &image.nodes[child.index()].value {
                    node.add_child(value.clone(), child);
                }
            }

            nodes.push(node);
        }

        if let Some(id) = find_cycle(&image.nodes) {
            return Err(corrupt(format!("cycle through {id}")));
        }

        Ok(Self::from_nodes(nodes))
    }
}

/// Iterative three-color DFS over the child edges.
fn find_cycle<T>(nodes: &[NodeImage<T>]) -> Option<NodeId> {
    const UNSEEN: u8 = 0;
    const OPEN: u8 = 1;
    const DONE: u8 = 2;

    let mut state = vec![UNSEEN; nodes.len()];
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..nodes.len() {
        if state[root] != UNSEEN {
            continue;
        }
        state[root] = OPEN;
        stack.push((root, 0));

        while let Some(top) = stack.last_mut() {
            let (node, next) = *top;
            match nodes[node].children.get(next) {
                Some(child) => {
                    top.1 += 1;
                    let child = child.index();
                    match state[child] {
                        UNSEEN => {
                            state[child] = OPEN;
                            stack.push((child, 0));
                        }
                        OPEN => return Some(NodeId::from_index(child)),
                        _ => {}
                    }
                }
                None => {
                    state[node] = DONE;
                    stack.pop();
                }
            }
        }
    }

    None
}

fn corrupt(message: String) -> PersistError {
    PersistError::Corrupt(message)
}
