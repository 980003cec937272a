//! Graph construction from accepted dependencies.
//!
//! Each accepted dependency is oriented, its endpoints resolved through the
//! node factory, and an edge recorded. Particles rename their governor
//! instead of producing an edge. Edges into prepositions are deferred: the
//! governor and label are recorded per preposition leaf for the
//! preposition pass to resolve.

use ccgamr_core::category::{CONJ, PARTICLE};
use ccgamr_core::{Dependency, Lemmatizer, Lexicon, Sentence};
use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use crate::graph::{AmrGraph, NodeFactory, NodeId};
use crate::rules::{self, RuleCtx, is_negation};
use crate::{Config, DependencyShape};

/// A node that pointed at a preposition, with the label it used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Governor {
    pub node: NodeId,
    pub label: String,
}

/// Counters reported by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstructStats {
    pub accepted: usize,
    pub rejected: usize,
    pub particles: usize,
    pub deferred: usize,
}

/// Mutable conversion state shared by construction and normalization.
///
/// `roots` holds nodes that have been a source but never a target;
/// `targets` holds nodes some edge has pointed at. Both keep insertion
/// order so output is deterministic.
pub struct Construction<'a> {
    pub graph: AmrGraph,
    pub factory: NodeFactory<'a>,
    pub roots: IndexSet<NodeId>,
    pub targets: IndexSet<NodeId>,
    pub copulas: IndexSet<NodeId>,
    pub conjunctions: IndexSet<NodeId>,
    /// Governors recorded per preposition leaf, in arrival order.
    pub prepositions: IndexMap<usize, Vec<Governor>>,
}

impl<'a> Construction<'a> {
    pub fn new(sentence: &'a Sentence, lemmatizer: &'a dyn Lemmatizer) -> Self {
        Self {
            graph: AmrGraph::new(),
            factory: NodeFactory::new(sentence, lemmatizer),
            roots: IndexSet::new(),
            targets: IndexSet::new(),
            copulas: IndexSet::new(),
            conjunctions: IndexSet::new(),
            prepositions: IndexMap::new(),
        }
    }

    /// Node for a sentence leaf, created on first use.
    pub fn node(&mut self, leaf: usize) -> NodeId {
        self.factory.node(&mut self.graph, leaf)
    }

    /// Record `node` as a root candidate unless something already points at it.
    pub fn mark_source(&mut self, node: NodeId) {
        if !self.targets.contains(&node) {
            self.roots.insert(node);
        }
    }

    pub fn mark_target(&mut self, node: NodeId) {
        self.targets.insert(node);
        self.roots.shift_remove(&node);
    }

    /// Add an edge and update root and target bookkeeping.
    pub fn link(&mut self, from: NodeId, to: NodeId, label: impl Into<String>) {
        self.graph.add_edge(from, to, label);
        self.mark_source(from);
        self.mark_target(to);
    }

    /// Promote a node nobody points at that still has children.
    pub fn promote_orphan(&mut self, node: NodeId) -> bool {
        if self.graph.is_removed(node)
            || self.roots.contains(&node)
            || !self.graph.has_edges(node)
            || self.graph.is_target(node)
        {
            return false;
        }
        self.roots.insert(node);
        true
    }

    /// Hand `from`'s recorded preposition governors over to `to`, or forget
    /// them when `to` is `None`. A node governs each preposition at most once.
    pub fn reassign_governor(&mut self, from: NodeId, to: Option<NodeId>) {
        for governors in self.prepositions.values_mut() {
            if let Some(to) = to
                && !governors.iter().any(|g| g.node == to)
                && let Some(governor) = governors.iter_mut().find(|g| g.node == from)
            {
                governor.node = to;
            }
            governors.retain(|g| g.node != from);
        }
    }

    /// Run the filter and direction rules over every dependency and record
    /// the resulting edges.
    pub fn build(
        &mut self,
        dependencies: &[Dependency],
        lexicon: &Lexicon,
        lemmatizer: &dyn Lemmatizer,
        config: &Config,
    ) -> ConstructStats {
        let sentence = self.factory.sentence();
        let mut stats = ConstructStats::default();

        for dependency in dependencies {
            let ctx = RuleCtx {
                dependency,
                sentence,
                lexicon,
                lemmatizer,
                config,
            };

            let decision = rules::filter(&ctx);
            if !decision.is_accept() {
                trace!(
                    head = dependency.head,
                    argument = dependency.argument,
                    category = %dependency.category,
                    rule = decision.rule,
                    "rejected dependency"
                );
                stats.rejected += 1;
                continue;
            }
            stats.accepted += 1;

            let (orientation, direction) = rules::orient(&ctx);
            trace!(
                from = orientation.from,
                to = orientation.to,
                label = %orientation.label,
                filter = decision.rule,
                direction,
                "accepted dependency"
            );
            self.apply(&ctx, orientation, &mut stats);
        }

        stats
    }

    fn apply(&mut self, ctx: &RuleCtx<'_>, orientation: rules::Orientation, stats: &mut ConstructStats) {
        let rules::Orientation { from, to, label } = orientation;

        let redirect = match ctx.config.shape {
            DependencyShape::Labelled => self.prepositions.get(&from).and_then(|g| g.last()).cloned(),
            DependencyShape::Unlabelled => None,
        };
        let (from_node, label) = match redirect {
            Some(governor) => (governor.node, governor.label),
            None => (self.node(from), label),
        };

        if ctx.config.is_copula(self.graph.node(from_node).concept()) {
            self.copulas.insert(from_node);
        }
        if ctx.dependency.category == *CONJ {
            self.conjunctions.insert(from_node);
        }
        self.mark_source(from_node);

        let to_leaf = ctx.leaf(to);
        if to_leaf.category == *PARTICLE {
            let node = self.graph.node_mut(from_node);
            let renamed = format!("{}-{}", node.concept(), to_leaf.word);
            node.set_concept(renamed);
            stats.particles += 1;
            return;
        }

        if to_leaf.pos.is_preposition() {
            self.prepositions.entry(to).or_default().push(Governor {
                node: from_node,
                label: label.clone(),
            });
            stats.deferred += 1;
            if ctx.config.shape == DependencyShape::Labelled {
                return;
            }
        }

        let to_node = self.node(to);
        if to_node == from_node {
            trace!(node = to_node.index(), "skipped self edge");
            return;
        }
        let label = if is_negation(self.graph.node(to_node).concept()) {
            ":NEG".to_string()
        } else {
            label
        };
        self.link(from_node, to_node, label);
    }
}
