//! Semantic graph representation for one sentence.
//!
//! Nodes live in a flat arena referenced by `NodeId`. Each node owns an
//! ordered list of outgoing labelled edges; parallel edges between the same
//! pair of nodes are allowed.
//!
//! # Architecture
//!
//! ```text
//! Dependencies → [construct] → AmrGraph → [normalize] → bracket / propositions
//! ```
//!
//! Nodes are never physically removed. Deleting a node detaches all its
//! edges and marks the slot dead so ids stay stable across passes.

mod arena;
mod dump;
mod factory;

#[cfg(test)]
mod arena_tests;

pub use arena::{AmrGraph, Edge, Node, NodeId};
pub use dump::GraphDump;
pub use factory::NodeFactory;
