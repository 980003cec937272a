//! Dependency filter: keep or drop each dependency before construction.

use ccgamr_core::category::{ADVERB, CONJ, DETERMINER, NOUN, VP_MODIFIER};

use super::{RuleCtx, is_negation};
use crate::DependencyShape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject,
}

/// Outcome of filtering one dependency, with the rule that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub verdict: Verdict,
    pub rule: &'static str,
}

impl Decision {
    pub fn is_accept(&self) -> bool {
        self.verdict == Verdict::Accept
    }
}

pub struct FilterRule {
    pub name: &'static str,
    /// Only consulted for this input shape, when set.
    pub shape: Option<DependencyShape>,
    pub verdict: Verdict,
    matches: fn(&RuleCtx<'_>) -> bool,
}

impl FilterRule {
    pub fn applies(&self, ctx: &RuleCtx<'_>) -> bool {
        self.shape.is_none_or(|shape| shape == ctx.config.shape) && (self.matches)(ctx)
    }
}

const AUXILIARIES: &[&str] = &[
    "be", "do", "have", "can", "could", "may", "might", "must", "ought", "shall", "should", "will",
    "would",
];

pub static FILTER_RULES: &[FilterRule] = &[
    FilterRule {
        name: "self-loop",
        shape: None,
        verdict: Verdict::Reject,
        matches: |ctx| ctx.dependency.is_self_loop(),
    },
    FilterRule {
        name: "determiner",
        shape: Some(DependencyShape::Unlabelled),
        verdict: Verdict::Reject,
        matches: |ctx| ctx.head().pos.is_determiner() || ctx.argument().pos.is_determiner(),
    },
    FilterRule {
        name: "semantic-role",
        shape: None,
        verdict: Verdict::Accept,
        matches: |ctx| ctx.dependency.semantic_role().is_some(),
    },
    FilterRule {
        name: "adjective",
        shape: None,
        verdict: Verdict::Accept,
        matches: |ctx| ctx.head().pos.is_adjective() && ctx.dependency.category != *DETERMINER,
    },
    FilterRule {
        name: "auxiliary",
        shape: None,
        verdict: Verdict::Reject,
        matches: is_auxiliary,
    },
    FilterRule {
        name: "noun",
        shape: None,
        verdict: Verdict::Accept,
        matches: |ctx| {
            ctx.head().pos.is_noun() && ctx.dependency.category.is_function_into(&NOUN)
        },
    },
    FilterRule {
        name: "verb",
        shape: None,
        verdict: Verdict::Accept,
        matches: |ctx| ctx.head().pos.is_verb(),
    },
    FilterRule {
        name: "preposition",
        shape: None,
        verdict: Verdict::Accept,
        matches: |ctx| ctx.head().pos.is_preposition(),
    },
    FilterRule {
        name: "conjunction",
        shape: None,
        verdict: Verdict::Accept,
        matches: |ctx| ctx.dependency.category == *CONJ,
    },
    FilterRule {
        name: "adverb",
        shape: Some(DependencyShape::Unlabelled),
        verdict: Verdict::Accept,
        matches: |ctx| {
            (ctx.dependency.category == *ADVERB || ctx.head().pos.is_adverb())
                && ctx.argument().pos.is_verb()
        },
    },
    FilterRule {
        name: "negation",
        shape: Some(DependencyShape::Unlabelled),
        verdict: Verdict::Accept,
        matches: |ctx| is_negation(&ctx.head().word) && ctx.argument().pos.is_verb(),
    },
];

/// Verb-phrase modifier headed by an auxiliary or modal.
///
/// A copula taking a non-verbal complement is not an auxiliary here.
fn is_auxiliary(ctx: &RuleCtx<'_>) -> bool {
    if ctx.dependency.category.without_features() != VP_MODIFIER.to_string() {
        return false;
    }
    let lemma = ctx.lemma(ctx.head());
    if !AUXILIARIES.contains(&lemma.as_str()) {
        return false;
    }
    !(ctx.config.is_copula(&lemma) && !ctx.argument().pos.is_verb())
}

/// Decide whether a dependency is kept. Unmatched dependencies are dropped.
pub fn filter(ctx: &RuleCtx<'_>) -> Decision {
    FILTER_RULES
        .iter()
        .find(|rule| rule.applies(ctx))
        .map(|rule| Decision {
            verdict: rule.verdict,
            rule: rule.name,
        })
        .unwrap_or(Decision {
            verdict: Verdict::Reject,
            rule: "otherwise",
        })
}
