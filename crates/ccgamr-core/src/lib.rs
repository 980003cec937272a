#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data for ccgamr: the converter's input model and shared read-only data.
//!
//! - `category`: CCG categories (lexer, parser, function-into queries)
//! - `pos`: part-of-speech tags and their prefix classes
//! - `sentence`: parse leaves and syntactic dependencies
//! - `lexicon`: semantic role → AMR label mapping
//! - `lemma`: lemmatizer seam for concept names

pub mod category;
pub mod lemma;
pub mod lexicon;
pub mod pos;
pub mod sentence;


pub use category::{Category, CategoryError, Slash};
pub use lemma::{LemmaTable, Lemmatizer, SanitizingLemmatizer};
pub use lexicon::{Lexicon, LexiconError};
pub use pos::Pos;
pub use sentence::{Dependency, Leaf, SemanticRole, Sentence, SentenceError, parse_dependencies};
