//! Graph invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::graph::{AmrGraph, Node, NodeId};

impl AmrGraph {
    /// Panics if `id` was never allocated by this graph.
    pub(crate) fn ensure_node(&self, id: NodeId) -> &Node {
        match self.get(id) {
            Some(node) => node,
            None => panic!(
                "node id {} out of range (graph has {} nodes)",
                id.index(),
                self.len()
            ),
        }
    }

    /// Panics if an edge would touch a deleted node.
    pub(crate) fn ensure_live(&self, id: NodeId) {
        self.ensure_node(id);
        assert!(
            !self.is_removed(id),
            "edge endpoint {} refers to a deleted node",
            id.index()
        );
    }
}
