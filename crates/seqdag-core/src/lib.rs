#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Minimal acyclic sequence graphs.
//!
//! A `SequenceGraph` stores a set of sequences (words, digit strings,
//! coordinate lists) with shared prefixes and shared suffixes merged, so the
//! number of nodes is the minimum needed to reproduce exactly that set.
//!
//! Three layers:
//! - **Construction**: `GraphBuilder` consumes sorted sequences and interns
//!   finalized suffixes through a `SuffixRegistry`
//! - **Queries**: `SequenceGraph` exposes containment, filtered neighbor
//!   iteration, the value index and full enumeration
//! - **Persistence**: `persist` turns a graph into postcard or JSON images
//!   and back

mod builder;
mod colors;
mod dump;
mod graph;
mod invariants;
mod node;
pub mod persist;
mod registry;
pub mod utils;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod graph_tests;

pub use builder::GraphBuilder;
pub use colors::Colors;
pub use dump::GraphPrinter;
pub use graph::{GraphStats, SequenceGraph};
pub use node::{DefaultNodeFactory, Node, NodeFactory, NodeId};
pub use persist::{Format, PersistError};
pub use registry::{SuffixKey, SuffixRegistry};
