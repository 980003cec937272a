//! Preposition flattening.
//!
//! CCG makes prepositions heads; the semantic graph wants them gone or,
//! for temporal ones linking two clauses, kept as a connective:
//!
//! ```text
//! ate → in ← park        ⇒  ate :location park
//! left → after ← eating  ⇒  left :time (after :op1 eating)
//! ```

use tracing::debug;

use super::NormalizeStats;
use crate::Config;
use crate::construct::{Construction, Governor};
use crate::graph::NodeId;

pub fn flatten_prepositions(state: &mut Construction<'_>, config: &Config, stats: &mut NormalizeStats) {
    let deferred: Vec<(usize, Vec<Governor>)> = state.prepositions.drain(..).collect();

    for (leaf, mut governors) in deferred {
        governors.retain(|g| !state.graph.is_removed(g.node));
        match governors.len() {
            0 => {}
            1 => {
                drop_single(state, leaf, governors[0].node);
                stats.prepositions_dropped += 1;
            }
            _ => {
                if chain(state, config, leaf, governors) {
                    stats.prepositions_chained += 1;
                }
            }
        }
    }

    stats.reentrant_edges_pruned += prune_reentrant(state);
}

fn drop_single(state: &mut Construction<'_>, leaf: usize, parent: NodeId) {
    if let Some(prep) = state.factory.get(leaf) {
        state.graph.remove_edge(parent, prep);
        if !state.graph.is_target(prep) {
            state.targets.shift_remove(&prep);
            state.promote_orphan(prep);
        }
    }
    if !state.graph.has_edges(parent) {
        state.roots.shift_remove(&parent);
    }
    debug!(leaf, "dropped preposition");
}

/// Link the two closest governors across the preposition.
fn chain(state: &mut Construction<'_>, config: &Config, leaf: usize, mut governors: Vec<Governor>) -> bool {
    governors.sort_by_key(|g| state.graph.node(g.node).position());
    let [earlier @ .., parent, child] = governors.as_slice() else {
        return false;
    };

    let parent_pos = state.graph.node(parent.node).position();
    let child_pos = state.graph.node(child.node).position();
    if !(parent_pos < leaf && leaf < child_pos) {
        return false;
    }

    let concept = state.factory.concept(&state.graph, leaf);
    let prep = if config.is_temporal(&concept) {
        let prep = state.node(leaf);
        if !state.graph.has_edge(parent.node, prep) {
            state.graph.add_edge(parent.node, prep, parent.label.clone());
        }
        state.graph.remove_edge(child.node, prep);
        state.graph.add_edge(prep, child.node, ":op1");
        state.roots.shift_remove(&prep);
        state.targets.insert(prep);
        debug!(preposition = %concept, "kept temporal preposition");
        Some(prep)
    } else {
        state.graph.add_edge(parent.node, child.node, parent.label.clone());
        let prep = state.factory.get(leaf);
        if let Some(prep) = prep {
            state.graph.remove_edge(parent.node, prep);
            state.graph.remove_edge(child.node, prep);
            if !state.graph.is_target(prep) {
                state.targets.shift_remove(&prep);
            }
        }
        debug!(preposition = %concept, label = %parent.label, "chained across preposition");
        prep
    };
    state.mark_source(parent.node);
    state.roots.shift_remove(&child.node);
    state.targets.insert(child.node);

    for governor in earlier {
        if let Some(prep) = prep {
            state.graph.remove_edge(governor.node, prep);
        }
        state.roots.shift_remove(&governor.node);
    }
    true
}

/// Drop single edges from preposition roots into nodes that are reachable
/// some other way. Returns how many edges were removed.
fn prune_reentrant(state: &mut Construction<'_>) -> usize {
    let roots: Vec<NodeId> = state.roots.iter().copied().collect();
    let mut promoted = Vec::new();
    let mut pruned = 0;

    for root in roots {
        if !state.graph.node(root).pos().is_preposition() {
            continue;
        }
        let [edge] = state.graph.edges(root) else {
            continue;
        };
        let target = edge.target();
        if !(state.graph.has_edges(target) || state.graph.is_target_excluding(root, target)) {
            continue;
        }

        state.roots.shift_remove(&root);
        state.graph.remove_edge(root, target);
        pruned += 1;
        debug!(root = state.graph.node(root).var(), "pruned preposition root");

        if !state.roots.contains(&target)
            && state.graph.has_edges(target)
            && !state.graph.is_target(target)
        {
            promoted.push(target);
        }
    }

    state.roots.extend(promoted);
    pruned
}
