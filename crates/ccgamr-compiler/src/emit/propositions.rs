//! Flat predicate-argument triples.

use std::fmt;

use crate::graph::{AmrGraph, NodeId};

/// One labelled edge as `(predicate concept, argument concept, role)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct Proposition {
    pub predicate: String,
    pub argument: String,
    pub role: String,
}

impl Proposition {
    pub fn new(
        predicate: impl Into<String>,
        argument: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            predicate: predicate.into(),
            argument: argument.into(),
            role: role.into(),
        }
    }

    /// Predicate and argument name the same concept.
    pub fn is_reflexive(&self) -> bool {
        self.predicate == self.argument
    }
}

impl fmt::Display for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.predicate, self.argument, self.role)
    }
}

/// Walk from each root and emit one proposition per outgoing edge of every
/// node expanded, in print order.
pub fn extract_propositions(
    graph: &AmrGraph,
    roots: impl IntoIterator<Item = NodeId>,
) -> Vec<Proposition> {
    let mut visited = vec![false; graph.len()];
    let mut out = Vec::new();
    for root in roots {
        collect(graph, root, &mut visited, &mut out);
    }
    out
}

fn collect(graph: &AmrGraph, id: NodeId, visited: &mut [bool], out: &mut Vec<Proposition>) {
    if visited[id.index()] {
        return;
    }
    visited[id.index()] = true;

    let node = graph.node(id);
    for edge in graph.edges(id) {
        out.push(Proposition::new(
            node.concept(),
            graph.node(edge.target()).concept(),
            edge.label(),
        ));
        collect(graph, edge.target(), visited, out);
    }
}
