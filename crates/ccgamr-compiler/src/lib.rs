//! ccgamr compiler: CCG dependencies to AMR-style semantic graphs.
//!
//! This crate provides the conversion pipeline for one sentence:
//! - `rules` - ordered filter and edge-direction rule tables
//! - `construct` - edge construction from accepted dependencies
//! - `graph` - arena multigraph and memoized node factory
//! - `normalize` - copula, preposition, and conjunction passes
//! - `emit` - bracket notation printer and proposition extractor
//! - `convert` - high-level `Converter` facade
//! - `config` - conversion options

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod construct;
pub mod convert;
pub mod emit;
pub mod graph;
pub mod normalize;
pub mod rules;

mod invariants;


#[cfg(test)]
pub mod test_utils;

pub use config::{Config, DependencyShape, Indent};
pub use convert::{ConversionStats, Converter, SemanticGraph};
pub use emit::{AmrPrinter, Proposition};
pub use graph::{AmrGraph, Edge, Node, NodeId};

use ccgamr_core::SentenceError;

/// Errors that can occur during conversion.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Dependencies refer to leaves the sentence does not have.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] SentenceError),

    /// Nothing survived filtering and normalization.
    #[error("conversion produced no root nodes ({accepted} of {total} dependencies accepted)")]
    NoRoots { accepted: usize, total: usize },
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
