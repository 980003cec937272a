//! Input model: the parsed sentence and its syntactic dependencies.
//!
//! Both come from the upstream CCG parser. Leaves are addressed by their
//! position in the sentence; dependencies refer to leaves by that index.

use crate::Pos;
use crate::category::Category;

/// One token of the parse with its tagger and supertagger output.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Leaf {
    pub word: String,
    pub pos: Pos,
    pub category: Category,
}

impl Leaf {
    pub fn new(word: impl Into<String>, pos: impl Into<Pos>, category: Category) -> Self {
        Self {
            word: word.into(),
            pos: pos.into(),
            category,
        }
    }
}

/// The parse object: leaves in sentence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Sentence {
    leaves: Vec<Leaf>,
}

impl Sentence {
    pub fn new(leaves: Vec<Leaf>) -> Self {
        Self { leaves }
    }

    /// Decode a sentence from its JSON form (`{"leaves": [...]}`).
    pub fn from_json(json: &str) -> Result<Self, SentenceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Leaf at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range. Call [`validate`](Self::validate)
    /// first when the dependencies come from an untrusted source.
    #[inline]
    pub fn leaf(&self, index: usize) -> &Leaf {
        &self.leaves[index]
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Leaf> {
        self.leaves.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Leaf)> {
        self.leaves.iter().enumerate()
    }

    /// Check that every leaf index named by `dependencies` exists.
    pub fn validate(&self, dependencies: &[Dependency]) -> Result<(), SentenceError> {
        for (i, dep) in dependencies.iter().enumerate() {
            for index in dep.leaf_indices() {
                if index >= self.leaves.len() {
                    return Err(SentenceError::LeafOutOfRange {
                        dependency: i,
                        index,
                        len: self.leaves.len(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Semantic role assigned by the SRL layer.
///
/// PropBank attaches adjuncts to the predicate rather than to the CCG head,
/// so the role carries its own predicate and argument indices.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SemanticRole {
    pub label: String,
    pub predicate: usize,
    pub argument: usize,
}

impl SemanticRole {
    /// Label the SRL layer uses for "no role".
    pub const NONE: &'static str = "NONE";
}

/// A syntactic dependency between two leaves.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dependency {
    pub head: usize,
    pub argument: usize,
    /// Category of the head that licenses this dependency.
    pub category: Category,
    /// Which argument slot of `category` the argument fills (1-based).
    #[serde(default)]
    pub arg_number: u8,
    #[serde(default)]
    pub role: Option<SemanticRole>,
}

impl Dependency {
    pub fn new(head: usize, argument: usize, category: Category, arg_number: u8) -> Self {
        Self {
            head,
            argument,
            category,
            arg_number,
            role: None,
        }
    }

    /// Attach a role whose predicate and argument are the CCG head and argument.
    pub fn with_role(self, label: impl Into<String>) -> Self {
        let (predicate, argument) = (self.head, self.argument);
        self.with_role_at(label, predicate, argument)
    }

    pub fn with_role_at(
        mut self,
        label: impl Into<String>,
        predicate: usize,
        argument: usize,
    ) -> Self {
        self.role = Some(SemanticRole {
            label: label.into(),
            predicate,
            argument,
        });
        self
    }

    /// The role, unless absent or the `NONE` sentinel.
    pub fn semantic_role(&self) -> Option<&SemanticRole> {
        self.role
            .as_ref()
            .filter(|role| role.label != SemanticRole::NONE)
    }

    pub fn is_self_loop(&self) -> bool {
        self.head == self.argument
    }

    fn leaf_indices(&self) -> impl Iterator<Item = usize> + '_ {
        let role = self.role.iter().flat_map(|r| [r.predicate, r.argument]);
        [self.head, self.argument].into_iter().chain(role)
    }
}

/// Decode a dependency list from JSON.
pub fn parse_dependencies(json: &str) -> Result<Vec<Dependency>, SentenceError> {
    Ok(serde_json::from_str(json)?)
}

/// Errors from decoding or validating converter input.
#[derive(Debug, thiserror::Error)]
pub enum SentenceError {
    #[error("invalid input json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dependency #{dependency} refers to leaf {index}, but the sentence has {len} leaves")]
    LeafOutOfRange {
        dependency: usize,
        index: usize,
        len: usize,
    },
}
