//! World trait for game implementations.
//!
//! Each game implements `World` once per player. The `Generator` calls the
//! lifecycle methods in a fixed order:
//!
//! 1. `generate_early`: derive flags from options
//! 2. `create_regions`: declare regions, locations and exits
//! 3. `link_entrances`: bind every exit to its target
//! 4. `set_rules`: attach access rules and the completion condition
//! 5. `generate_basic`: add items to the pool, place locked items
//!
//! After the external fill has placed the pool, `generate_output` and
//! `modify_multidata` run once per player.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::output::{GameData, MultiData};
use crate::core::{GenerationError, Item, PlayerId, Result};
use crate::graph::MultiWorld;

/// A game's plug-in for one player.
pub trait World {
    /// Game name, as shown in the data package.
    fn game(&self) -> &'static str;

    /// The player this instance generates for.
    fn player(&self) -> PlayerId;

    /// Every item name the game knows, with its numeric id.
    fn item_name_to_id(&self) -> &'static [(&'static str, u64)];

    /// Every location name the game knows, with its numeric id.
    fn location_name_to_id(&self) -> &'static [(&'static str, u64)];

    /// Version of the name/id tables.
    fn data_version(&self) -> u32 {
        0
    }

    /// Derive option-dependent flags before anything is built.
    fn generate_early(&mut self, _world: &mut MultiWorld) -> Result<()> {
        Ok(())
    }

    /// Declare regions, locations and exits.
    fn create_regions(&mut self, world: &mut MultiWorld) -> Result<()>;

    /// Bind every declared exit to a target region.
    fn link_entrances(&mut self, world: &mut MultiWorld) -> Result<()>;

    /// Attach access rules and the completion condition.
    fn set_rules(&mut self, world: &mut MultiWorld) -> Result<()>;

    /// Build one item by name.
    fn create_item(&self, name: &str) -> Result<Item>;

    /// Add this player's items to the pool and place locked items.
    fn generate_basic(&mut self, world: &mut MultiWorld) -> Result<()>;

    /// Item used to pad pools.
    fn filler_item_name(&self) -> &'static str;

    /// Per-player settings echoed to the client.
    fn fill_slot_data(&self, _world: &MultiWorld) -> serde_json::Value {
        serde_json::Value::Object(serde_json::Map::new())
    }

    /// Write a per-player artifact. Returns the file written, if any.
    fn generate_output(&self, _world: &MultiWorld, _output_dir: &Path) -> Result<Option<PathBuf>> {
        Ok(None)
    }

    /// Add derived data to the run's multidata.
    fn modify_multidata(&self, _world: &MultiWorld, _multidata: &mut MultiData) -> Result<()> {
        Ok(())
    }

    // === Convenience Methods ===

    /// Numeric id of an item name.
    fn item_id(&self, name: &str) -> Result<u64> {
        self.item_name_to_id()
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, id)| *id)
            .ok_or_else(|| GenerationError::UnknownItem {
                name: name.to_string(),
                player: self.player(),
            })
    }

    /// Name/id tables for the data package.
    fn game_data(&self) -> GameData {
        GameData {
            item_name_to_id: to_map(self.item_name_to_id()),
            location_name_to_id: to_map(self.location_name_to_id()),
            version: self.data_version(),
        }
    }
}

fn to_map(table: &[(&str, u64)]) -> BTreeMap<String, u64> {
    table.iter().map(|(n, id)| (n.to_string(), *id)).collect()
}
