//! Configuration types for conversion.

use std::fmt::Write;

/// Which kind of dependencies the upstream parser produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyShape {
    /// Dependencies may carry semantic roles from the SRL layer.
    #[default]
    Labelled,
    /// Plain CCG dependencies, no roles.
    Unlabelled,
}

/// One level of indentation in bracket notation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indent {
    #[default]
    Tab,
    Spaces(u8),
}

impl Indent {
    pub(crate) fn write(self, w: &mut String, depth: usize) -> std::fmt::Result {
        for _ in 0..depth {
            match self {
                Indent::Tab => w.write_char('\t')?,
                Indent::Spaces(n) => {
                    for _ in 0..n {
                        w.write_char(' ')?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Configuration for a [`Converter`](crate::Converter).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input dependency shape
    pub(crate) shape: DependencyShape,
    /// Indentation unit for bracket output
    pub(crate) indent: Indent,
    /// Prepositions kept as nodes when chaining two clauses
    pub(crate) temporal_prepositions: Vec<String>,
    /// Lemma of the copula verb
    pub(crate) copula: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shape: DependencyShape::default(),
            indent: Indent::default(),
            temporal_prepositions: vec!["before".to_string(), "after".to_string()],
            copula: "be".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input dependency shape.
    pub fn shape(mut self, value: DependencyShape) -> Self {
        self.shape = value;
        self
    }

    /// Set the indentation unit.
    pub fn indent(mut self, value: Indent) -> Self {
        self.indent = value;
        self
    }

    /// Replace the temporal preposition list.
    pub fn temporal_prepositions<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.temporal_prepositions = words.into_iter().map(Into::into).collect();
        self
    }

    /// Set the copula lemma.
    pub fn copula(mut self, lemma: impl Into<String>) -> Self {
        self.copula = lemma.into();
        self
    }

    pub fn dependency_shape(&self) -> DependencyShape {
        self.shape
    }

    pub fn indent_unit(&self) -> Indent {
        self.indent
    }

    pub fn copula_lemma(&self) -> &str {
        &self.copula
    }

    pub fn is_temporal(&self, preposition: &str) -> bool {
        self.temporal_prepositions.iter().any(|p| p == preposition)
    }

    pub fn is_copula(&self, concept: &str) -> bool {
        concept == self.copula
    }
}
