//! Dump helpers for graph inspection and testing.
//!
//! One line per node: handle, value (`⊤`/`⊥` for the sentinels), then the
//! outgoing edges as `value:handle`, with `⊥` standing for the sink edge.

use std::fmt::{self, Display, Write};
use std::hash::Hash;

use indexmap::IndexMap;

use crate::Colors;
use crate::graph::SequenceGraph;
use crate::node::NodeId;

/// Printer for `SequenceGraph` with configurable output options.
pub struct GraphPrinter<'a, T> {
    graph: &'a SequenceGraph<T>,
    colors: Colors,
    show_parents: bool,
}

impl<'a, T> GraphPrinter<'a, T>
where
    T: Clone + Eq + Hash + Display,
{
    pub fn new(graph: &'a SequenceGraph<T>) -> Self {
        Self {
            graph,
            colors: Colors::OFF,
            show_parents: false,
        }
    }

    pub fn with_colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    /// Also list incoming edges after `←`.
    pub fn show_parents(mut self, show: bool) -> Self {
        self.show_parents = show;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> fmt::Result {
        let c = self.colors;

        for (id, node) in self.graph.iter() {
            write!(w, "{}{}{}: ", c.blue, id, c.reset)?;
            match (id, node.value()) {
                (NodeId::SOURCE, _) => write!(w, "⊤")?,
                (NodeId::SINK, _) => write!(w, "⊥")?,
                (_, Some(value)) => write!(w, "{}{}{}", c.green, value, c.reset)?,
                (_, None) => write!(w, "?")?,
            }

            if !node.children().is_empty() || node.is_terminal() {
                write!(w, " {}→{}", c.dim, c.reset)?;
                self.format_edges(w, node.children())?;
                if node.is_terminal() {
                    write!(w, " ⊥")?;
                }
            }

            if self.show_parents && (!node.parents().is_empty() || node.is_initial()) {
                write!(w, " {}←{}", c.dim, c.reset)?;
                self.format_edges(w, node.parents())?;
                if node.is_initial() {
                    write!(w, " ⊤")?;
                }
            }

            writeln!(w)?;
        }

        Ok(())
    }

    fn format_edges(&self, w: &mut String, edges: &IndexMap<T, Vec<NodeId>>) -> fmt::Result {
        let c = self.colors;
        for (value, ids) in edges {
            for id in ids {
                write!(w, " {}{}{}:{}{}{}", c.green, value, c.reset, c.blue, id, c.reset)?;
            }
        }
        Ok(())
    }
}

impl<T> SequenceGraph<T>
where
    T: Clone + Eq + Hash + Display,
{
    /// Plain-text dump of the forward structure.
    pub fn dump(&self) -> String {
        GraphPrinter::new(self).dump()
    }
}
