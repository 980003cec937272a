//! Ordered rule tables deciding which dependencies become edges.
//!
//! Both tables are evaluated top to bottom and the first matching rule
//! wins. Rules are plain data so their order is visible in one place and
//! each rule's name can be reported in trace output.

mod direction;
mod filter;

#[cfg(test)]
mod direction_tests;

pub use direction::{DIRECTION_RULES, DirectionRule, Orientation, orient};
pub use filter::{Decision, FILTER_RULES, FilterRule, Verdict, filter};

use ccgamr_core::{Dependency, Leaf, Lemmatizer, Lexicon, Sentence};

use crate::Config;

/// Everything a rule may look at for one dependency.
#[derive(Clone, Copy)]
pub struct RuleCtx<'a> {
    pub dependency: &'a Dependency,
    pub sentence: &'a Sentence,
    pub lexicon: &'a Lexicon,
    pub lemmatizer: &'a dyn Lemmatizer,
    pub config: &'a Config,
}

impl<'a> RuleCtx<'a> {
    pub fn head(&self) -> &'a Leaf {
        self.sentence.leaf(self.dependency.head)
    }

    pub fn argument(&self) -> &'a Leaf {
        self.sentence.leaf(self.dependency.argument)
    }

    pub fn leaf(&self, index: usize) -> &'a Leaf {
        self.sentence.leaf(index)
    }

    pub fn lemma(&self, leaf: &Leaf) -> String {
        self.lemmatizer.lemma(&leaf.word, &leaf.pos)
    }
}

const NEGATIONS: &[&str] = &["not", "n't"];

/// Whether a word or concept is a negation marker.
pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
}
