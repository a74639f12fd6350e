//! # rust-rando
//!
//! Game worlds for a multi-game item randomizer, and the graph, logic and
//! lifecycle they plug into.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Core**: The graph and search know nothing about any
//!    game. Worlds declare regions, locations, rules and items; the core
//!    only evaluates them.
//!
//! 2. **N-Player First**: Every lookup is keyed by `(name, player)`. Two
//!    players running the same game never share graph nodes.
//!
//! 3. **Rules Are Data**: Access rules are expression trees, not closures.
//!    They can be validated when assigned, serialized, and evaluated any
//!    number of times without side effects.
//!
//! ## Architecture
//!
//! - **Arena Graph**: Regions, locations and entrances live in flat vectors
//!   addressed by typed ids. Entrances are declared first and linked later
//!   through an `EntranceTable`, which may be canonical, shuffled or given.
//!
//! - **Persistent Collection State**: Item counts and reachability use
//!   `im-rs` maps, so the search can clone a state in O(1).
//!
//! - **Fixed Lifecycle**: `Generator` drives every world through
//!   `generate_early`, `create_regions`, `link_entrances`, `set_rules` and
//!   `generate_basic`, then `generate_output` and `modify_multidata` once
//!   the fill is done. Any error aborts the run.
//!
//! ## Modules
//!
//! - `core`: Players, seeded RNG, items, errors
//! - `graph`: Regions, locations, entrances, linking tables, the spoiler
//! - `logic`: Rules, collection state, reachability search
//! - `world`: The `World` trait, the lifecycle driver, output artifacts
//! - `games`: Game worlds (Super Mario 64)

pub mod core;
pub mod graph;
pub mod logic;
pub mod world;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    SeedRng, SeedRngState,
    Item, ItemClassification, ItemCode,
    ErrorKind, GenerationError, Result,
};

pub use crate::graph::{
    Region, RegionId, Location, LocationId, Entrance, EntranceId,
    EntranceTable, LinkMode, MultiWorld, Spoiler, SpoilerEntrance,
};

pub use crate::logic::{
    Rule, RuleContext, RuleEvaluator, CollectionState,
    can_beat_game, sweep, unreachable_locations, update_reachable,
};

pub use crate::world::{
    World, Generator, Step,
    DataPackage, GameData, MultiData, OutputFile, PlacedItem,
};

pub use crate::games::sm64::{Sm64Options, Sm64World};
