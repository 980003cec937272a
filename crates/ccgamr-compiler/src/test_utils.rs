//! Test fixtures and a bracket-notation reader.

use std::collections::{BTreeSet, HashMap};

use ccgamr_core::{Category, Dependency, LemmaTable, Leaf, Lexicon, Sentence};
use logos::Logos;

use crate::construct::Construction;
use crate::normalize::NormalizeStats;
use crate::{Config, Converter, Result, SemanticGraph};

pub fn cat(source: &str) -> Category {
    Category::parse(source).unwrap()
}

/// Sentence plus dependency list, built fluently.
#[derive(Default)]
pub struct Fixture {
    leaves: Vec<Leaf>,
    dependencies: Vec<Dependency>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leaf(mut self, word: &str, pos: &str, category: &str) -> Self {
        self.leaves.push(Leaf::new(word, pos, cat(category)));
        self
    }

    pub fn dep(self, head: usize, argument: usize, category: &str, arg_number: u8) -> Self {
        self.push(Dependency::new(head, argument, cat(category), arg_number))
    }

    /// Dependency carrying a semantic role from `predicate` to `role_argument`.
    pub fn role(
        self,
        head: usize,
        argument: usize,
        category: &str,
        label: &str,
        (predicate, role_argument): (usize, usize),
    ) -> Self {
        self.push(
            Dependency::new(head, argument, cat(category), 1).with_role_at(
                label,
                predicate,
                role_argument,
            ),
        )
    }

    pub fn push(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn sentence(&self) -> Sentence {
        Sentence::new(self.leaves.clone())
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn convert(&self, config: Config) -> Result<SemanticGraph> {
        let lexicon = lexicon();
        let lemmas = lemmas();
        Converter::new(&lexicon)
            .with_lemmatizer(&lemmas)
            .with_config(config)
            .convert(&self.sentence(), &self.dependencies)
    }
}

/// Graph state after construction plus one or more passes.
pub struct Normalized {
    pub dump: String,
    pub roots: Vec<String>,
    pub stats: NormalizeStats,
}

/// Build `fixture` and run `pass` over the result.
pub fn run_pass(
    fixture: &Fixture,
    config: &Config,
    pass: impl FnOnce(&mut Construction<'_>, &mut NormalizeStats),
) -> Normalized {
    let sentence = fixture.sentence();
    let lexicon = lexicon();
    let lemmas = lemmas();
    let mut state = Construction::new(&sentence, &lemmas);
    state.build(fixture.dependencies(), &lexicon, &lemmas, config);

    let mut stats = NormalizeStats::default();
    pass(&mut state, &mut stats);
    Normalized {
        dump: state.graph.dump(),
        roots: root_vars(&state),
        stats,
    }
}

pub fn root_vars(state: &Construction<'_>) -> Vec<String> {
    state
        .roots
        .iter()
        .map(|&id| state.graph.node(id).var().to_string())
        .collect()
}

pub fn lemmas() -> LemmaTable {
    [
        ("is", "be"),
        ("are", "be"),
        ("was", "be"),
        ("were", "be"),
        ("did", "do"),
        ("does", "do"),
        ("has", "have"),
    ]
    .into_iter()
    .collect()
}

pub fn lexicon() -> Lexicon {
    [
        ("ARG0", ":ARG0"),
        ("ARG1", ":ARG1"),
        ("ARGM-LOC", ":location"),
        ("ARGM-TMP", ":time"),
    ]
    .into_iter()
    .collect()
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum BracketToken {
    #[token("(")]
    Open,
    #[token(")")]
    Close,
    #[token("/")]
    Slash,
    #[regex(r":[^\s]+")]
    Label,
    #[regex(r"[^\s():/][^\s()/]*")]
    Symbol,
    #[regex(r"\s+")]
    Whitespace,
}

/// Parse bracket notation back into `(parent concept, label, child concept)`
/// triples. Bare variable references resolve to the concept they were
/// introduced with.
pub fn read_bracket_triples(text: &str) -> BTreeSet<(String, String, String)> {
    let tokens = BracketToken::lexer(text)
        .spanned()
        .filter_map(|(token, span)| match token {
            Ok(BracketToken::Whitespace) => None,
            Ok(token) => Some((token, text[span].to_string())),
            Err(()) => panic!("unexpected character at {span:?} in {text:?}"),
        })
        .collect();

    let mut reader = BracketReader {
        tokens,
        pos: 0,
        concepts: HashMap::new(),
        edges: Vec::new(),
    };
    while reader.pos < reader.tokens.len() {
        reader.expr();
    }

    reader
        .edges
        .iter()
        .map(|(parent, label, child)| {
            (
                reader.concepts[parent].clone(),
                label.clone(),
                reader.concepts[child].clone(),
            )
        })
        .collect()
}

struct BracketReader {
    tokens: Vec<(BracketToken, String)>,
    pos: usize,
    concepts: HashMap<String, String>,
    edges: Vec<(String, String, String)>,
}

impl BracketReader {
    fn peek(&self) -> BracketToken {
        self.tokens[self.pos].0
    }

    fn expect(&mut self, kind: BracketToken) -> String {
        let (token, text) = &self.tokens[self.pos];
        assert_eq!(*token, kind, "unexpected {text:?} at token {}", self.pos);
        self.pos += 1;
        text.clone()
    }

    fn expr(&mut self) -> String {
        self.expect(BracketToken::Open);
        let var = self.expect(BracketToken::Symbol);
        self.expect(BracketToken::Slash);
        let concept = self.expect(BracketToken::Symbol);
        self.concepts.insert(var.clone(), concept);

        loop {
            match self.peek() {
                BracketToken::Close => {
                    self.pos += 1;
                    return var;
                }
                BracketToken::Label => {
                    let label = self.expect(BracketToken::Label);
                    let child = if self.peek() == BracketToken::Open {
                        self.expr()
                    } else {
                        self.expect(BracketToken::Symbol)
                    };
                    self.edges.push((var.clone(), label, child));
                }
                other => panic!("unexpected {other:?} at token {}", self.pos),
            }
        }
    }
}
