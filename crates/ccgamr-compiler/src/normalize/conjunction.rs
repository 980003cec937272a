//! Conjunction operand numbering.

use tracing::debug;

use super::NormalizeStats;
use crate::construct::Construction;

/// Relabel each conjunction's edges `:op1`, `:op2`, … by target position.
/// Edge order is left as inserted.
pub fn number_conjunctions(state: &mut Construction<'_>, stats: &mut NormalizeStats) {
    for &conj in &state.conjunctions {
        if state.graph.is_removed(conj) {
            continue;
        }

        let edges = state.graph.edges(conj);
        let mut order: Vec<usize> = (0..edges.len()).collect();
        order.sort_by_key(|&i| state.graph.node(edges[i].target()).position());

        let edges = state.graph.edges_mut(conj);
        for (n, i) in order.into_iter().enumerate() {
            edges[i].set_label(format!(":op{}", n + 1));
        }
        debug!(conj = conj.index(), operands = edges.len(), "numbered conjunction");
        stats.conjunctions_numbered += 1;
    }
}
