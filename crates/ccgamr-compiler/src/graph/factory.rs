//! Memoized leaf-to-node creation with unique variable names.

use std::collections::HashMap;

use ccgamr_core::{Lemmatizer, Sentence};

use super::{AmrGraph, Node, NodeId};

/// Creates at most one node per sentence leaf.
///
/// Variables are the first character of the concept, suffixed with an
/// occurrence count from the second use of that character on:
/// `b`, `b2`, `b3`. Concepts that do not start with an alphanumeric
/// character get the `x` prefix.
pub struct NodeFactory<'a> {
    sentence: &'a Sentence,
    lemmatizer: &'a dyn Lemmatizer,
    by_leaf: HashMap<usize, NodeId>,
    prefix_counts: HashMap<char, u32>,
}

impl<'a> NodeFactory<'a> {
    pub fn new(sentence: &'a Sentence, lemmatizer: &'a dyn Lemmatizer) -> Self {
        Self {
            sentence,
            lemmatizer,
            by_leaf: HashMap::new(),
            prefix_counts: HashMap::new(),
        }
    }

    /// Node for `leaf`, creating it in `graph` on first request.
    pub fn node(&mut self, graph: &mut AmrGraph, leaf: usize) -> NodeId {
        if let Some(&id) = self.by_leaf.get(&leaf) {
            return id;
        }

        let source = self.sentence.leaf(leaf);
        let concept = self.lemmatizer.lemma(&source.word, &source.pos);
        let var = self.next_var(&concept);
        let id = graph.add_node(Node::new(concept, var, source.pos.clone(), leaf));
        self.by_leaf.insert(leaf, id);
        id
    }

    /// Node already created for `leaf`, if any.
    pub fn get(&self, leaf: usize) -> Option<NodeId> {
        self.by_leaf.get(&leaf).copied()
    }

    /// Concept a node for `leaf` has or would have.
    pub fn concept(&self, graph: &AmrGraph, leaf: usize) -> String {
        match self.get(leaf) {
            Some(id) => graph.node(id).concept().to_string(),
            None => {
                let source = self.sentence.leaf(leaf);
                self.lemmatizer.lemma(&source.word, &source.pos)
            }
        }
    }

    pub fn sentence(&self) -> &'a Sentence {
        self.sentence
    }

    fn next_var(&mut self, concept: &str) -> String {
        let prefix = concept
            .chars()
            .next()
            .filter(|c| c.is_alphanumeric())
            .unwrap_or('x');
        let count = self.prefix_counts.entry(prefix).or_insert(0);
        *count += 1;
        if *count == 1 {
            prefix.to_string()
        } else {
            format!("{prefix}{count}")
        }
    }
}
