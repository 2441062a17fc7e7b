//! Search instrumentation.
//!
//! The searcher reports every decision to a `Tracer`. `NoopTracer` methods
//! are empty and `#[inline(always)]`, so an untraced search compiles down to
//! the bare walk. `PrintTracer` renders one line per event, indented by
//! phase:
//!
//! ```text
//! target @0 floor 0
//!   seed N2 @0 c pinned
//!   prefix @0
//!     → N3 @1 a
//!   match c a r @0..2
//! ```
//!
//! Placement marks: `+` drawn from the pool, `*` a wildcard, nothing when
//! the pattern fixes the value.

use std::fmt::Display;
use std::hash::Hash;

use seqdag_core::{Colors, SequenceGraph};

use crate::state::{Direction, SearchState};

use super::result::MatchResult;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Targets, seeds, completed prefixes and matches (-v).
    #[default]
    Default,
    /// Verbose (-vv): also every walk step.
    Verbose,
    /// Very verbose (-vvv): steps plus the remaining pool and wildcard budget.
    VeryVerbose,
}

/// Hooks called at fixed points of a search.
pub trait Tracer<T> {
    /// A new search target (a run start, or the index a match must cover).
    fn trace_target(&mut self, index: usize, floor: usize);

    /// A seed state is about to be walked. Pinned seeds skip the backward walk.
    fn trace_seed(&mut self, state: &SearchState<T>, pinned: bool);

    /// A walk pushed `state` onto its stack.
    fn trace_step(&mut self, direction: Direction, state: &SearchState<T>);

    /// The backward walk reached a legal start.
    fn trace_prefix(&mut self, state: &SearchState<T>);

    /// A match is about to be yielded.
    fn trace_match(&mut self, result: &MatchResult<T>);
}

impl<T, Tr: Tracer<T> + ?Sized> Tracer<T> for &mut Tr {
    #[inline(always)]
    fn trace_target(&mut self, index: usize, floor: usize) {
        (**self).trace_target(index, floor);
    }

    #[inline(always)]
    fn trace_seed(&mut self, state: &SearchState<T>, pinned: bool) {
        (**self).trace_seed(state, pinned);
    }

    #[inline(always)]
    fn trace_step(&mut self, direction: Direction, state: &SearchState<T>) {
        (**self).trace_step(direction, state);
    }

    #[inline(always)]
    fn trace_prefix(&mut self, state: &SearchState<T>) {
        (**self).trace_prefix(state);
    }

    #[inline(always)]
    fn trace_match(&mut self, result: &MatchResult<T>) {
        (**self).trace_match(result);
    }
}

/// No-op tracer that gets optimized away completely.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTracer;

impl<T> Tracer<T> for NoopTracer {
    #[inline(always)]
    fn trace_target(&mut self, _index: usize, _floor: usize) {}

    #[inline(always)]
    fn trace_seed(&mut self, _state: &SearchState<T>, _pinned: bool) {}

    #[inline(always)]
    fn trace_step(&mut self, _direction: Direction, _state: &SearchState<T>) {}

    #[inline(always)]
    fn trace_prefix(&mut self, _state: &SearchState<T>) {}

    #[inline(always)]
    fn trace_match(&mut self, _result: &MatchResult<T>) {}
}

/// Tracer that collects a readable search log.
pub struct PrintTracer<'g, T> {
    /// Graph being searched, for node values.
    graph: &'g SequenceGraph<T>,
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

impl<'g, T> PrintTracer<'g, T>
where
    T: Clone + Eq + Hash + Display,
{
    pub fn new(graph: &'g SequenceGraph<T>, verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            graph,
            verbosity,
            colors,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines, newline-terminated.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Write the collected lines to stderr.
    pub fn print(&self) {
        for line in &self.lines {
            eprintln!("{line}");
        }
    }

    /// `N5 @3 e+`: node, index and the value placed there.
    fn format_placement(&self, state: &SearchState<T>) -> String {
        let c = self.colors;
        let index = state.index();
        let value = self
            .graph
            .node(state.node())
            .value()
            .map_or_else(|| "?".to_string(), ToString::to_string);
        let mark = if state.wildcard_indices().contains(&index) {
            format!("{}*{}", c.yellow, c.reset)
        } else if state.used().contains_key(&index) {
            "+".to_string()
        } else {
            String::new()
        };

        let mut out = format!(
            "{}{}{} {}@{}{} {}{}{}{}",
            c.blue,
            state.node(),
            c.reset,
            c.dim,
            index,
            c.reset,
            c.green,
            value,
            c.reset,
            mark
        );
        if self.verbosity == Verbosity::VeryVerbose {
            out.push_str(&self.format_resources(state));
        }
        out
    }

    fn format_resources(&self, state: &SearchState<T>) -> String {
        let c = self.colors;
        let pool: Vec<String> = state.pool().iter().map(ToString::to_string).collect();
        format!(
            " {}pool [{}] wc {}{}",
            c.dim,
            pool.join(" "),
            state.wildcards(),
            c.reset
        )
    }
}

impl<'g, T> Tracer<T> for PrintTracer<'g, T>
where
    T: Clone + Eq + Hash + Display,
{
    fn trace_target(&mut self, index: usize, floor: usize) {
        let c = self.colors;
        self.lines.push(format!(
            "{}target{} @{} {}floor {}{}",
            c.dim, c.reset, index, c.dim, floor, c.reset
        ));
    }

    fn trace_seed(&mut self, state: &SearchState<T>, pinned: bool) {
        let c = self.colors;
        let mut line = format!("  {}seed{} {}", c.dim, c.reset, self.format_placement(state));
        if pinned {
            line.push_str(&format!(" {}pinned{}", c.dim, c.reset));
        }
        self.lines.push(line);
    }

    fn trace_step(&mut self, direction: Direction, state: &SearchState<T>) {
        if self.verbosity == Verbosity::Default {
            return;
        }
        let line = format!("    {} {}", direction.arrow(), self.format_placement(state));
        self.lines.push(line);
    }

    fn trace_prefix(&mut self, state: &SearchState<T>) {
        let c = self.colors;
        self.lines
            .push(format!("  {}prefix{} @{}", c.dim, c.reset, state.index()));
    }

    fn trace_match(&mut self, result: &MatchResult<T>) {
        let c = self.colors;
        let sequence: Vec<String> = result.sequence.iter().map(ToString::to_string).collect();
        let mut line = format!(
            "  {}match{} {}{}{} @{}..{}",
            c.dim,
            c.reset,
            c.green,
            sequence.join(" "),
            c.reset,
            result.start,
            result.end
        );
        if !result.wildcard_positions.is_empty() {
            let positions: Vec<String> = result
                .wildcard_positions
                .iter()
                .map(ToString::to_string)
                .collect();
            line.push_str(&format!(" {}*{}{}", c.yellow, positions.join(","), c.reset));
        }
        self.lines.push(line);
    }
}
