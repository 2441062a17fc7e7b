#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Pattern-constrained search over minimal sequence graphs.
//!
//! Given a graph of stored sequences, a `Pattern` describing which values
//! may sit at each position, a pool of values to place and a wildcard
//! budget, the `Searcher` lists every stored sequence that can be laid over
//! the pattern.
//!
//! # Example
//!
//! ```
//! use seqdag_core::SequenceGraph;
//! use seqdag_search::{Pattern, Searcher};
//!
//! let words = ["car", "care", "cars"];
//! let graph: SequenceGraph<char> =
//!     SequenceGraph::from_sorted(words.iter().map(|w| w.chars().collect::<Vec<_>>()));
//!
//! let pattern: Pattern<char> = "car.".parse().expect("valid pattern");
//! let found: Vec<String> = Searcher::new(&graph)
//!     .find_matches("es".chars(), &pattern, 0)
//!     .map(|m| m.sequence.into_iter().collect())
//!     .collect();
//!
//! assert_eq!(found, ["car", "care", "cars"]);
//! ```

pub mod engine;
pub mod pattern;
mod state;


pub use engine::{MatchResult, Matches, NoopTracer, PrintTracer, Searcher, Tracer, Verbosity};
pub use pattern::{Boundary, EMPTY_CHAR, Pattern, PatternError, Slot};
pub use state::{Direction, SearchState};
