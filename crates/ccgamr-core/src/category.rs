//! CCG syntactic categories.
//!
//! Categories arrive as strings from the upstream parser (`S[dcl]\NP`,
//! `(S\NP)/(S\NP)`, `conj`, ...). They are lexed with Logos and parsed by a
//! small recursive-descent parser. Slashes are left-associative, so
//! `S\NP/NP` reads as `(S\NP)/NP`.
//!
//! Rendering always parenthesizes functor sub-categories, which makes the
//! string form canonical: `S\NP/NP` renders as `(S\NP)/NP`.

use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

use logos::Logos;

/// Nominal category `N`.
pub static NOUN: LazyLock<Category> = LazyLock::new(|| Category::atom("N"));

/// Adjective category `N/N`.
pub static ADJECTIVE: LazyLock<Category> =
    LazyLock::new(|| Category::forward(Category::atom("N"), Category::atom("N")));

/// Determiner category `NP/N`.
pub static DETERMINER: LazyLock<Category> =
    LazyLock::new(|| Category::forward(Category::atom("NP"), Category::atom("N")));

/// Verb-phrase adverb `(S\NP)\(S\NP)`.
pub static ADVERB: LazyLock<Category> =
    LazyLock::new(|| Category::backward(verb_phrase(), verb_phrase()));

/// Verb-phrase modifier of a verb phrase `(S\NP)/(S\NP)`; auxiliaries carry it.
pub static VP_MODIFIER: LazyLock<Category> =
    LazyLock::new(|| Category::forward(verb_phrase(), verb_phrase()));

/// Conjunction category `conj`.
pub static CONJ: LazyLock<Category> = LazyLock::new(|| Category::atom("conj"));

/// Particle category `PR`.
pub static PARTICLE: LazyLock<Category> = LazyLock::new(|| Category::atom("PR"));

fn verb_phrase() -> Category {
    Category::backward(Category::atom("S"), Category::atom("NP"))
}

/// Direction of a functor's argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slash {
    /// `/`: argument to the right.
    Forward,
    /// `\`: argument to the left.
    Backward,
}

impl Slash {
    pub fn as_char(self) -> char {
        match self {
            Slash::Forward => '/',
            Slash::Backward => '\\',
        }
    }
}

/// A CCG category: an atom with an optional feature, or a functor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    Atomic {
        name: String,
        feature: Option<String>,
    },
    Functor {
        result: Box<Category>,
        slash: Slash,
        argument: Box<Category>,
    },
}

impl Category {
    /// Parse a category string.
    pub fn parse(source: &str) -> Result<Self, CategoryError> {
        let tokens = lex(source)?;
        if tokens.is_empty() {
            return Err(CategoryError::Empty);
        }
        let mut parser = Parser {
            source,
            tokens,
            pos: 0,
        };
        let category = parser.category()?;
        if let Some((_, span)) = parser.tokens.get(parser.pos) {
            return Err(CategoryError::UnexpectedToken {
                input: source.to_string(),
                offset: span.start,
            });
        }
        Ok(category)
    }

    pub fn atom(name: impl Into<String>) -> Self {
        Category::Atomic {
            name: name.into(),
            feature: None,
        }
    }

    pub fn atom_with_feature(name: impl Into<String>, feature: impl Into<String>) -> Self {
        Category::Atomic {
            name: name.into(),
            feature: Some(feature.into()),
        }
    }

    /// `result/argument`
    pub fn forward(result: Category, argument: Category) -> Self {
        Category::Functor {
            result: Box::new(result),
            slash: Slash::Forward,
            argument: Box::new(argument),
        }
    }

    /// `result\argument`
    pub fn backward(result: Category, argument: Category) -> Self {
        Category::Functor {
            result: Box::new(result),
            slash: Slash::Backward,
            argument: Box::new(argument),
        }
    }

    pub fn is_functor(&self) -> bool {
        matches!(self, Category::Functor { .. })
    }

    /// Result category of a functor, `None` for atoms.
    pub fn result(&self) -> Option<&Category> {
        match self {
            Category::Functor { result, .. } => Some(result),
            Category::Atomic { .. } => None,
        }
    }

    /// Feature-agnostic unification: atoms match when their names agree and
    /// their features agree or either side has none.
    pub fn matches(&self, other: &Category) -> bool {
        match (self, other) {
            (
                Category::Atomic {
                    name: a,
                    feature: fa,
                },
                Category::Atomic {
                    name: b,
                    feature: fb,
                },
            ) => a == b && (fa.is_none() || fb.is_none() || fa == fb),
            (
                Category::Functor {
                    result: ra,
                    slash: sa,
                    argument: aa,
                },
                Category::Functor {
                    result: rb,
                    slash: sb,
                    argument: ab,
                },
            ) => sa == sb && ra.matches(rb) && aa.matches(ab),
            _ => false,
        }
    }

    /// True when this category, or any result reached by peeling off
    /// arguments, matches `target`.
    ///
    /// `(S\NP)/NP` is a function into `S\NP` and into `S`, but not into `NP`.
    pub fn is_function_into(&self, target: &Category) -> bool {
        if self.matches(target) {
            return true;
        }
        self.result().is_some_and(|r| r.is_function_into(target))
    }

    /// A functor whose result equals its argument (`X/X`, `X\X`).
    pub fn is_modifier(&self) -> bool {
        match self {
            Category::Functor {
                result, argument, ..
            } => result == argument,
            Category::Atomic { .. } => false,
        }
    }

    /// True when this category is a modifier, or a function into one.
    pub fn is_function_into_modifier(&self) -> bool {
        self.is_modifier()
            || self
                .result()
                .is_some_and(|r| r.is_function_into_modifier())
    }

    /// Canonical rendering with every bracketed feature removed.
    pub fn without_features(&self) -> String {
        let mut out = String::new();
        self.render(&mut out, false);
        out
    }

    fn render(&self, out: &mut String, features: bool) {
        match self {
            Category::Atomic { name, feature } => {
                out.push_str(name);
                if features && let Some(f) = feature {
                    out.push('[');
                    out.push_str(f);
                    out.push(']');
                }
            }
            Category::Functor {
                result,
                slash,
                argument,
            } => {
                render_operand(result, out, features);
                out.push(slash.as_char());
                render_operand(argument, out, features);
            }
        }
    }
}

fn render_operand(category: &Category, out: &mut String, features: bool) {
    if category.is_functor() {
        out.push('(');
        category.render(out, features);
        out.push(')');
    } else {
        category.render(out, features);
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.render(&mut out, true);
        f.write_str(&out)
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::parse(s)
    }
}

impl TryFrom<String> for Category {
    type Error = CategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Category::parse(&value)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.to_string()
    }
}

/// Errors from lexing or parsing a category string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
    #[error("empty category")]
    Empty,

    #[error("unexpected character at offset {offset} in category `{input}`")]
    UnexpectedChar { input: String, offset: usize },

    #[error("unexpected token at offset {offset} in category `{input}`")]
    UnexpectedToken { input: String, offset: usize },

    #[error("unexpected end of category `{input}`")]
    UnexpectedEnd { input: String },
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("/")]
    Forward,

    #[token("\\")]
    Backward,

    /// Bracketed feature such as `[dcl]`.
    #[regex(r"\[[A-Za-z0-9_]+\]")]
    Feature,

    /// Atom name: `S`, `NP`, `conj`, `LRB`, ...
    #[regex(r"[A-Za-z][A-Za-z0-9_]*")]
    Name,

    /// Punctuation atoms.
    #[regex(r"[,.;:]")]
    Punct,

    #[regex(r"[ \t]+")]
    Whitespace,
}

fn lex(source: &str) -> Result<Vec<(Token, Range<usize>)>, CategoryError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        match result {
            Ok(Token::Whitespace) => {}
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                return Err(CategoryError::UnexpectedChar {
                    input: source.to_string(),
                    offset: lexer.span().start,
                });
            }
        }
    }
    Ok(tokens)
}

struct Parser<'s> {
    source: &'s str,
    tokens: Vec<(Token, Range<usize>)>,
    pos: usize,
}

impl Parser<'_> {
    fn category(&mut self) -> Result<Category, CategoryError> {
        let mut left = self.primary()?;
        while let Some(slash) = self.peek_slash() {
            self.pos += 1;
            let right = self.primary()?;
            left = Category::Functor {
                result: Box::new(left),
                slash,
                argument: Box::new(right),
            };
        }
        Ok(left)
    }

    fn primary(&mut self) -> Result<Category, CategoryError> {
        let Some((token, span)) = self.bump() else {
            return Err(self.unexpected_end());
        };
        match token {
            Token::ParenOpen => {
                let inner = self.category()?;
                match self.bump() {
                    Some((Token::ParenClose, _)) => Ok(inner),
                    Some((_, span)) => Err(self.unexpected(span.start)),
                    None => Err(self.unexpected_end()),
                }
            }
            Token::Name | Token::Punct => {
                let name = self.source[span].to_string();
                let feature = match self.tokens.get(self.pos) {
                    Some((Token::Feature, span)) => {
                        let text = &self.source[span.start + 1..span.end - 1];
                        self.pos += 1;
                        Some(text.to_string())
                    }
                    _ => None,
                };
                Ok(Category::Atomic { name, feature })
            }
            _ => Err(self.unexpected(span.start)),
        }
    }

    fn peek_slash(&self) -> Option<Slash> {
        match self.tokens.get(self.pos) {
            Some((Token::Forward, _)) => Some(Slash::Forward),
            Some((Token::Backward, _)) => Some(Slash::Backward),
            _ => None,
        }
    }

    fn bump(&mut self) -> Option<(Token, Range<usize>)> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn unexpected(&self, offset: usize) -> CategoryError {
        CategoryError::UnexpectedToken {
            input: self.source.to_string(),
            offset,
        }
    }

    fn unexpected_end(&self) -> CategoryError {
        CategoryError::UnexpectedEnd {
            input: self.source.to_string(),
        }
    }
}
