//! Access logic: rules, the collection state they read, and the
//! reachability search that gives `can_reach` its meaning.

pub mod rule;
pub mod state;
pub mod search;

pub use rule::{Rule, RuleContext, RuleEvaluator};
pub use state::CollectionState;
pub use search::{can_beat_game, sweep, unreachable_locations, update_reachable};
