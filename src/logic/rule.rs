//! Access rules.
//!
//! A rule is a tagged expression tree over a `CollectionState`. Worlds build
//! rules once while setting up logic; the search evaluates them as often as
//! it likes, in any order. Evaluation is pure: the same state always gives
//! the same answer.
//!
//! `can_reach` leaves read the reachability cached in the state rather than
//! recursing into other rules, so evaluation depth is bounded by the tree.

use serde::{Deserialize, Serialize};

use super::state::CollectionState;
use crate::core::PlayerId;
use crate::graph::MultiWorld;

/// An access condition on a location or entrance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// No requirement.
    #[default]
    Always,

    /// Never satisfied.
    Never,

    /// At least `count` of an item.
    Has {
        item: String,
        player: PlayerId,
        count: u32,
    },

    /// The region is reachable in the current state.
    CanReachRegion { region: String, player: PlayerId },

    /// The location is reachable in the current state.
    CanReachLocation { location: String, player: PlayerId },

    /// All rules must hold. Empty is true.
    All(Vec<Rule>),

    /// At least one rule must hold. Empty is false.
    Any(Vec<Rule>),
}

impl Rule {
    /// Require one of an item.
    pub fn has(item: impl Into<String>, player: PlayerId) -> Self {
        Self::has_count(item, player, 1)
    }

    /// Require `count` of an item.
    pub fn has_count(item: impl Into<String>, player: PlayerId, count: u32) -> Self {
        Self::Has {
            item: item.into(),
            player,
            count,
        }
    }

    pub fn can_reach_region(region: impl Into<String>, player: PlayerId) -> Self {
        Self::CanReachRegion {
            region: region.into(),
            player,
        }
    }

    pub fn can_reach_location(location: impl Into<String>, player: PlayerId) -> Self {
        Self::CanReachLocation {
            location: location.into(),
            player,
        }
    }

    /// Create an AND rule.
    pub fn all(rules: impl IntoIterator<Item = Rule>) -> Self {
        Self::All(rules.into_iter().collect())
    }

    /// Create an OR rule.
    pub fn any(rules: impl IntoIterator<Item = Rule>) -> Self {
        Self::Any(rules.into_iter().collect())
    }

    /// Add another rule with AND.
    #[must_use]
    pub fn and(self, other: Rule) -> Self {
        match (self, other) {
            (Self::Always, rule) | (rule, Self::Always) => rule,
            (Self::All(mut rules), other) => {
                rules.push(other);
                Self::All(rules)
            }
            (rule, other) => Self::All(vec![rule, other]),
        }
    }

    /// Add another rule with OR.
    #[must_use]
    pub fn or(self, other: Rule) -> Self {
        match (self, other) {
            (Self::Never, rule) | (rule, Self::Never) => rule,
            (Self::Any(mut rules), other) => {
                rules.push(other);
                Self::Any(rules)
            }
            (rule, other) => Self::Any(vec![rule, other]),
        }
    }

    /// Visit every non-combinator node.
    pub fn for_each_leaf(&self, f: &mut dyn FnMut(&Rule)) {
        match self {
            Self::All(rules) | Self::Any(rules) => {
                for rule in rules {
                    rule.for_each_leaf(f);
                }
            }
            leaf => f(leaf),
        }
    }

    /// Evaluate against a state.
    #[must_use]
    pub fn evaluate(&self, ctx: &RuleContext) -> bool {
        RuleEvaluator::evaluate(self, ctx)
    }
}

/// What a rule is evaluated against.
pub struct RuleContext<'a> {
    /// Graph used to resolve region and location names.
    pub world: &'a MultiWorld,
    /// The hypothetical collection.
    pub state: &'a CollectionState,
}

impl<'a> RuleContext<'a> {
    pub fn new(world: &'a MultiWorld, state: &'a CollectionState) -> Self {
        Self { world, state }
    }
}

/// Evaluator for rules.
pub struct RuleEvaluator;

impl RuleEvaluator {
    /// Check if a rule is satisfied.
    ///
    /// Names are validated when a rule is attached; an unknown name here
    /// evaluates to false.
    pub fn evaluate(rule: &Rule, ctx: &RuleContext) -> bool {
        match rule {
            Rule::Always => true,

            Rule::Never => false,

            Rule::Has {
                item,
                player,
                count,
            } => ctx.state.has(item, *player, *count),

            Rule::CanReachRegion { region, player } => ctx
                .world
                .region_id(region, *player)
                .is_ok_and(|id| ctx.state.can_reach_region(id)),

            Rule::CanReachLocation { location, player } => ctx
                .world
                .location_id(location, *player)
                .is_ok_and(|id| ctx.state.can_reach_location(id)),

            Rule::All(rules) => rules.iter().all(|r| Self::evaluate(r, ctx)),

            Rule::Any(rules) => rules.iter().any(|r| Self::evaluate(r, ctx)),
        }
    }
}
