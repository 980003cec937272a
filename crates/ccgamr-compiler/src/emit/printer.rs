//! AMR-style bracket notation.
//!
//! ```text
//! (l / left
//! 	:ARG0 (h / he)
//! 	:time (a / after
//! 		:op1 (e / eating)))
//! ```
//!
//! A node reached a second time prints as its bare variable.

use std::fmt::Write;

use crate::Indent;
use crate::graph::{AmrGraph, NodeId};

/// Printer for a graph and its roots.
pub struct AmrPrinter<'a> {
    graph: &'a AmrGraph,
    roots: Vec<NodeId>,
    indent: Indent,
}

impl<'a> AmrPrinter<'a> {
    pub fn new(graph: &'a AmrGraph, roots: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            graph,
            roots: roots.into_iter().collect(),
            indent: Indent::default(),
        }
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    /// One expression per root, each followed by a newline.
    pub fn format(&self, w: &mut String) -> std::fmt::Result {
        let mut visited = vec![false; self.graph.len()];
        for &root in &self.roots {
            self.format_node(w, root, 1, &mut visited)?;
            w.push('\n');
        }
        Ok(())
    }

    fn format_node(
        &self,
        w: &mut String,
        id: NodeId,
        depth: usize,
        visited: &mut [bool],
    ) -> std::fmt::Result {
        let node = self.graph.node(id);
        if visited[id.index()] {
            return w.write_str(node.var());
        }
        visited[id.index()] = true;

        write!(w, "({} / {}", node.var(), node.concept())?;
        for edge in self.graph.edges(id) {
            w.push('\n');
            self.indent.write(w, depth)?;
            write!(w, "{} ", edge.label())?;
            self.format_node(w, edge.target(), depth + 1, visited)?;
        }
        w.push(')');
        Ok(())
    }
}
