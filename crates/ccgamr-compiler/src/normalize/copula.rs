//! Copula collapsing.
//!
//! `the creature is dangerous` arrives as `be → creature, be → dangerous`
//! and leaves as `dangerous :domain creature` with the copula gone.

use tracing::debug;

use super::NormalizeStats;
use crate::Config;
use crate::construct::Construction;
use crate::graph::{Edge, NodeId};

pub fn collapse_copulas(state: &mut Construction<'_>, config: &Config, stats: &mut NormalizeStats) {
    let copulas: Vec<NodeId> = state.copulas.iter().copied().collect();

    for copula in copulas {
        if state.graph.is_removed(copula) {
            continue;
        }
        let children: Vec<NodeId> = state.graph.edges(copula).iter().map(Edge::target).collect();
        match *children.as_slice() {
            [a, b] if a != b => {
                if collapse_pair(state, copula, a, b) {
                    stats.copulas_collapsed += 1;
                }
            }
            [child] => {
                drop_copula(state, copula, child);
                stats.copulas_dropped += 1;
            }
            _ => {}
        }
    }

    let leftovers: Vec<NodeId> = state
        .targets
        .iter()
        .copied()
        .filter(|&node| {
            !state.graph.is_removed(node)
                && config.is_copula(state.graph.node(node).concept())
                && !state.graph.has_edges(node)
        })
        .collect();
    for node in leftovers {
        debug!(var = state.graph.node(node).var(), "removed leftover copula");
        state.graph.delete_node(node);
        state.reassign_governor(node, None);
        state.targets.shift_remove(&node);
        state.roots.shift_remove(&node);
        stats.copulas_dropped += 1;
    }
}

/// Rewrite `copula → first, copula → second` into `second :domain first`.
fn collapse_pair(state: &mut Construction<'_>, copula: NodeId, a: NodeId, b: NodeId) -> bool {
    let graph = &state.graph;
    let (first, second) = if graph.node(a).position() <= graph.node(b).position() {
        (a, b)
    } else {
        (b, a)
    };

    let first_pos = graph.node(first).pos();
    let second_pos = graph.node(second).pos();
    let subject_like = first_pos.is_noun() || first_pos.is_pronoun();
    let predicate_like = second_pos.is_noun() || second_pos.is_adjective();
    if !(subject_like && predicate_like) {
        return false;
    }

    let incoming = graph
        .first_parent(copula)
        .and_then(|parent| Some((parent, graph.edge_label(parent, copula)?.to_string())));

    state.graph.add_edge(second, first, ":domain");
    match incoming {
        Some((parent, label)) if !state.roots.contains(&copula) => {
            state.graph.add_edge(parent, second, label);
            state.targets.insert(second);
        }
        _ => {
            state.roots.insert(second);
            state.targets.shift_remove(&second);
        }
    }

    state.graph.delete_node(copula);
    state.reassign_governor(copula, Some(second));
    state.graph.remove_edge(first, second);
    state.roots.shift_remove(&copula);
    state.targets.shift_remove(&copula);
    state.roots.shift_remove(&first);
    state.targets.insert(first);

    debug!(
        copula = state.graph.node(copula).var(),
        first = state.graph.node(first).var(),
        second = state.graph.node(second).var(),
        "collapsed copula"
    );
    true
}

/// A copula with a single complement carries no relation of its own.
fn drop_copula(state: &mut Construction<'_>, copula: NodeId, child: NodeId) {
    state.graph.delete_node(copula);
    state.reassign_governor(copula, Some(child));
    state.roots.shift_remove(&copula);
    state.targets.shift_remove(&copula);

    if !state.graph.is_target(child) {
        state.targets.shift_remove(&child);
        state.promote_orphan(child);
    }
    debug!(copula = state.graph.node(copula).var(), "dropped copula");
}
