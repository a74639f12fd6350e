//! Super Mario 64.
//!
//! 120 Power Stars spread over 15 painting courses and the castle's secret
//! areas. Keys open the basement and the second floor; star doors gate the
//! rest. Optional toggles add the 100 coin stars, the Bob-omb Buddies and
//! the 1Up blocks as locations, and area randomization shuffles which
//! course each painting leads to.

pub mod items;
pub mod locations;
pub mod options;
pub mod pool;
pub mod regions;
pub mod rules;
mod world;

pub use options::{ExclamationBoxes, Sm64Options};
pub use pool::{plan_pool, PoolPlan};
pub use world::{Sm64World, GAME};
