//! Penn Treebank part-of-speech tags.
//!
//! Only tag prefixes matter to the converter: `NNS` and `NNP` are both
//! noun-like, `VBD` and `VBZ` are both verb-like.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Pos(String);

impl Pos {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    pub fn is_adjective(&self) -> bool {
        self.starts_with("JJ")
    }

    /// `NN`, `NNS`, `NNP`, `NNPS`.
    pub fn is_noun(&self) -> bool {
        self.starts_with("NN")
    }

    /// `PRP` and `PRP$`.
    pub fn is_pronoun(&self) -> bool {
        self.starts_with("PRP")
    }

    pub fn is_verb(&self) -> bool {
        self.starts_with("VB")
    }

    /// `IN` covers both prepositions and subordinating conjunctions.
    pub fn is_preposition(&self) -> bool {
        self.starts_with("IN")
    }

    pub fn is_adverb(&self) -> bool {
        self.starts_with("RB")
    }

    pub fn is_determiner(&self) -> bool {
        self.starts_with("DT")
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Pos {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
