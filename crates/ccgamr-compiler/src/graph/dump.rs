//! Dump helpers for graph inspection and testing.

use std::fmt::Write;

use super::AmrGraph;

/// Flat adjacency listing of an `AmrGraph`, one node per line.
///
/// ```text
/// b / be [VBZ] → :ANUM1 c, :ANUM2 d
/// c / creature [NN] → ∅
/// ```
pub struct GraphDump<'a> {
    graph: &'a AmrGraph,
    show_removed: bool,
}

impl<'a> GraphDump<'a> {
    pub fn new(graph: &'a AmrGraph) -> Self {
        Self {
            graph,
            show_removed: false,
        }
    }

    /// Also list deleted nodes, marked with `✗`.
    pub fn show_removed(mut self, show: bool) -> Self {
        self.show_removed = show;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        for index in 0..self.graph.len() {
            let id = super::NodeId::from_raw(index as u32);
            let node = self.graph.node(id);

            if self.graph.is_removed(id) {
                if self.show_removed {
                    writeln!(w, "✗ {} / {}", node.var(), node.concept())?;
                }
                continue;
            }

            write!(w, "{} / {} [{}] → ", node.var(), node.concept(), node.pos())?;

            let edges = self.graph.edges(id);
            if edges.is_empty() {
                w.push('∅');
            } else {
                for (i, edge) in edges.iter().enumerate() {
                    if i > 0 {
                        w.push_str(", ");
                    }
                    let target = self.graph.node(edge.target());
                    write!(w, "{} {}", edge.label(), target.var())?;
                }
            }
            w.push('\n');
        }
        Ok(())
    }
}

impl AmrGraph {
    /// Adjacency listing of live nodes.
    pub fn dump(&self) -> String {
        GraphDump::new(self).dump()
    }
}
