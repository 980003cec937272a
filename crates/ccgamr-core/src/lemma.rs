//! Lemmatizer seam.
//!
//! Concept names are lemmas. Real lemmatization (morphological stemming)
//! lives outside this crate; converters take any [`Lemmatizer`].

use std::collections::HashMap;

use crate::Pos;

pub trait Lemmatizer {
    fn lemma(&self, word: &str, pos: &Pos) -> String;
}

impl<F> Lemmatizer for F
where
    F: Fn(&str, &Pos) -> String,
{
    fn lemma(&self, word: &str, pos: &Pos) -> String {
        self(word, pos)
    }
}

/// Make a surface word safe to print as a concept name.
///
/// Lowercases and replaces the characters that are structural in bracket
/// notation: space → `_`, `:` and `/` → `-`, `(` → `LRB`, `)` → `RRB`.
pub fn sanitize(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        match c {
            ' ' => out.push('_'),
            ':' | '/' => out.push('-'),
            '(' => out.push_str("LRB"),
            ')' => out.push_str("RRB"),
            c => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Default lemmatizer: [`sanitize`] only, no stemming.
#[derive(Debug, Clone, Copy, Default)]
pub struct SanitizingLemmatizer;

impl Lemmatizer for SanitizingLemmatizer {
    fn lemma(&self, word: &str, _pos: &Pos) -> String {
        sanitize(word)
    }
}

/// Precomputed word → lemma table, e.g. from an external lemmatizer run.
/// Words missing from the table fall back to [`sanitize`].
#[derive(Debug, Clone, Default)]
pub struct LemmaTable {
    table: HashMap<String, String>,
}

impl LemmaTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: impl Into<String>, lemma: impl Into<String>) {
        self.table.insert(word.into(), lemma.into());
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LemmaTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            table: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Lemmatizer for LemmaTable {
    fn lemma(&self, word: &str, _pos: &Pos) -> String {
        match self.table.get(word) {
            Some(lemma) => lemma.clone(),
            None => sanitize(word),
        }
    }
}
