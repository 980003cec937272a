//! Semantic-role to AMR edge-label lexicon.
//!
//! Loaded once and shared read-only across conversions.
//!
//! # File format
//!
//! ```text
//! // comment
//! ARG0	:ARG0
//! :location	ARGM-LOC   // column order is detected per line
//! ```
//!
//! Text from `//` onward is dropped, lines are trimmed, blank lines skipped.
//! Fields are separated by runs of tabs. The field starting with `:` is the
//! AMR label, the other the role. A line with fewer than two fields is fatal;
//! lines with more than two fields are ignored.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    labels: IndexMap<String, String>,
}

impl Lexicon {
    /// A lexicon with no entries; every lookup falls back to `:role`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read and parse a lexicon file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Parse lexicon text. `origin` is only used in error messages.
    pub fn parse(text: &str, origin: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let mut labels = IndexMap::new();
        for raw in text.lines() {
            let line = match raw.find("//") {
                Some(comment) => &raw[..comment],
                None => raw,
            }
            .trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').filter(|f| !f.is_empty()).collect();
            if fields.len() < 2 {
                return Err(LexiconError::Malformed {
                    path: origin.as_ref().to_path_buf(),
                    line: raw.to_string(),
                });
            }
            if fields.len() != 2 {
                continue;
            }

            let (role, label) = if fields[0].starts_with(':') {
                (fields[1], fields[0])
            } else {
                (fields[0], fields[1])
            };
            labels.insert(role.trim().to_string(), label.trim().to_string());
        }
        Ok(Self { labels })
    }

    /// AMR label for `role`, or `:role` when the lexicon has no entry.
    pub fn lookup<'a>(&'a self, role: &str) -> Cow<'a, str> {
        match self.labels.get(role) {
            Some(label) => Cow::Borrowed(label),
            None => Cow::Owned(format!(":{role}")),
        }
    }

    pub fn get(&self, role: &str) -> Option<&str> {
        self.labels.get(role).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            labels: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("cannot read lexicon {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("must be at least two tab-separated fields on line: \"{line}\" in file: {}", .path.display())]
    Malformed { path: PathBuf, line: String },
}
