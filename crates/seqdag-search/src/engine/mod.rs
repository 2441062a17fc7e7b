//! Pattern search over a sequence graph.
//!
//! `Searcher` plans one target per pattern run, `seeds` turns a target into
//! starting states, and two `Walk`s (backward over parents, then forward
//! over children) complete each seed into matches. `Matches` drives all of
//! it lazily, one match per `next`.

mod matches;
mod result;
mod searcher;
mod seeds;
pub mod trace;
mod walk;

#[cfg(test)]
mod seeds_tests;
#[cfg(test)]
mod trace_tests;
#[cfg(test)]
mod walk_tests;

pub use matches::Matches;
pub use result::MatchResult;
pub use searcher::Searcher;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
