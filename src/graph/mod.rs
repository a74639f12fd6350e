//! Region/location graph.
//!
//! Worlds build their graph in two phases: declare regions, locations and
//! exits, then link every exit through an `EntranceTable`. Topology is fixed
//! once linking is done; rules and items are attached afterwards.

pub mod region;
pub mod entrance_table;
pub mod spoiler;
pub mod multiworld;

pub use region::{Entrance, EntranceId, Location, LocationId, Region, RegionId};
pub use entrance_table::{EntranceTable, LinkMode};
pub use spoiler::{Spoiler, SpoilerEntrance};
pub use multiworld::MultiWorld;
