//! High-level conversion facade.
//!
//! ```ignore
//! let lexicon = Lexicon::load("roles.txt")?;
//! let graph = Converter::new(&lexicon).convert(&sentence, &dependencies)?;
//! print!("{}", graph.to_amr_string());
//! ```

use ccgamr_core::{Dependency, Lemmatizer, Lexicon, SanitizingLemmatizer, Sentence};
use indexmap::IndexSet;
use tracing::debug;

use crate::construct::{ConstructStats, Construction};
use crate::emit::{AmrPrinter, Proposition, extract_propositions};
use crate::graph::{AmrGraph, NodeId};
use crate::normalize::{NormalizeStats, normalize};
use crate::{Config, Error, Indent, Result};

static SANITIZER: SanitizingLemmatizer = SanitizingLemmatizer;

/// Converts one sentence at a time. Holds only shared read-only inputs.
pub struct Converter<'a> {
    lexicon: &'a Lexicon,
    lemmatizer: &'a dyn Lemmatizer,
    config: Config,
}

impl<'a> Converter<'a> {
    /// Converter using [`SanitizingLemmatizer`], which only lowercases and
    /// escapes words. Inflected forms stay as they are (`is` is not `be`),
    /// so copula collapsing and the auxiliary filter need a real
    /// lemmatizer via [`with_lemmatizer`](Self::with_lemmatizer).
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            lemmatizer: &SANITIZER,
            config: Config::default(),
        }
    }

    /// Lemmatizer producing concept names. Copula and auxiliary detection
    /// compare against its output.
    pub fn with_lemmatizer(mut self, lemmatizer: &'a dyn Lemmatizer) -> Self {
        self.lemmatizer = lemmatizer;
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build, normalize, and package the graph for one sentence.
    pub fn convert(&self, sentence: &Sentence, dependencies: &[Dependency]) -> Result<SemanticGraph> {
        sentence.validate(dependencies)?;

        let mut state = Construction::new(sentence, self.lemmatizer);
        let construct = state.build(dependencies, self.lexicon, self.lemmatizer, &self.config);
        let normalized = normalize(&mut state, &self.config);

        let Construction { graph, roots, .. } = state;
        debug!(
            accepted = construct.accepted,
            rejected = construct.rejected,
            nodes = graph.iter().count(),
            edges = graph.edge_count(),
            roots = roots.len(),
            "converted sentence"
        );

        if roots.is_empty() {
            return Err(Error::NoRoots {
                accepted: construct.accepted,
                total: dependencies.len(),
            });
        }

        Ok(SemanticGraph {
            graph,
            roots,
            indent: self.config.indent,
            stats: ConversionStats {
                construct,
                normalize: normalized,
            },
        })
    }
}

/// Counters from one conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub construct: ConstructStats,
    pub normalize: NormalizeStats,
}

/// A finished graph with its roots, ready for output.
#[derive(Debug)]
pub struct SemanticGraph {
    graph: AmrGraph,
    roots: IndexSet<NodeId>,
    indent: Indent,
    stats: ConversionStats,
}

impl SemanticGraph {
    pub fn graph(&self) -> &AmrGraph {
        &self.graph
    }

    /// Roots in output order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.roots.iter().copied()
    }

    pub fn stats(&self) -> ConversionStats {
        self.stats
    }

    /// Label of the first edge between two nodes.
    pub fn edge_label(&self, from: NodeId, to: NodeId) -> Option<&str> {
        self.graph.edge_label(from, to)
    }

    pub fn printer(&self) -> AmrPrinter<'_> {
        AmrPrinter::new(&self.graph, self.roots()).indent(self.indent)
    }

    /// Bracket notation, one expression per root.
    pub fn to_amr_string(&self) -> String {
        self.printer().dump()
    }

    pub fn propositions(&self) -> Vec<Proposition> {
        extract_propositions(&self.graph, self.roots())
    }
}
