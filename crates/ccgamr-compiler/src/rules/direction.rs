//! Edge direction and label for an accepted dependency.

use ccgamr_core::category::ADJECTIVE;

use super::RuleCtx;
use crate::DependencyShape;

/// Resolved edge endpoints (leaf indices) and label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orientation {
    pub from: usize,
    pub to: usize,
    pub label: String,
}

pub struct DirectionRule {
    pub name: &'static str,
    applies: fn(&RuleCtx<'_>) -> bool,
    orient: fn(&RuleCtx<'_>) -> Orientation,
}

impl DirectionRule {
    pub fn applies(&self, ctx: &RuleCtx<'_>) -> bool {
        (self.applies)(ctx)
    }
}

pub static DIRECTION_RULES: &[DirectionRule] = &[
    DirectionRule {
        name: "semantic-role",
        applies: |ctx| ctx.dependency.semantic_role().is_some(),
        orient: |ctx| match ctx.dependency.semantic_role() {
            Some(role) => Orientation {
                from: role.predicate,
                to: role.argument,
                label: ctx.lexicon.lookup(&role.label).into_owned(),
            },
            None => numbered(ctx),
        },
    },
    DirectionRule {
        name: "adjective",
        applies: |ctx| ctx.head().category == *ADJECTIVE || ctx.head().pos.is_adjective(),
        orient: |ctx| Orientation {
            from: ctx.dependency.argument,
            to: ctx.dependency.head,
            label: ":mod".to_string(),
        },
    },
    DirectionRule {
        name: "modifier",
        applies: |ctx| {
            ctx.dependency.category.is_function_into_modifier()
                || (ctx.config.shape == DependencyShape::Unlabelled
                    && ctx.head().pos.is_preposition())
        },
        orient: |ctx| {
            let to = ctx.dependency.head;
            Orientation {
                from: ctx.dependency.argument,
                to,
                label: format!(
                    ":{}_{}",
                    ctx.leaf(to).word.to_lowercase(),
                    ctx.dependency.category
                ),
            }
        },
    },
];

/// Head to argument, labelled with the argument slot number.
fn numbered(ctx: &RuleCtx<'_>) -> Orientation {
    Orientation {
        from: ctx.dependency.head,
        to: ctx.dependency.argument,
        label: format!(":ANUM{}", ctx.dependency.arg_number),
    }
}

/// Orient an accepted dependency. Returns the orientation and the name of
/// the rule that produced it.
pub fn orient(ctx: &RuleCtx<'_>) -> (Orientation, &'static str) {
    DIRECTION_RULES
        .iter()
        .find(|rule| rule.applies(ctx))
        .map(|rule| ((rule.orient)(ctx), rule.name))
        .unwrap_or_else(|| (numbered(ctx), "argument"))
}
