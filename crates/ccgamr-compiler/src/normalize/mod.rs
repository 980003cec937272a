//! Structural normalization passes over a constructed graph.
//!
//! Passes run in a fixed order and mutate the graph together with the
//! root and target sets:
//!
//! 1. copula collapsing (`X be Y` → `Y :domain X`)
//! 2. preposition flattening, then the reentrant-preposition sweep
//! 3. conjunction operand numbering

mod conjunction;
mod copula;
mod preposition;

#[cfg(test)]
mod conjunction_tests;

pub use conjunction::number_conjunctions;
pub use copula::collapse_copulas;
pub use preposition::flatten_prepositions;

use crate::Config;
use crate::construct::Construction;

/// Statistics from normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub copulas_collapsed: usize,
    pub copulas_dropped: usize,
    pub prepositions_dropped: usize,
    pub prepositions_chained: usize,
    pub reentrant_edges_pruned: usize,
    pub conjunctions_numbered: usize,
}

/// Run all passes in order.
pub fn normalize(state: &mut Construction<'_>, config: &Config) -> NormalizeStats {
    let mut stats = NormalizeStats::default();
    collapse_copulas(state, config, &mut stats);
    flatten_prepositions(state, config, &mut stats);
    number_conjunctions(state, &mut stats);
    stats
}
