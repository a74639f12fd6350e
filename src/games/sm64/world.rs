use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::{debug, info};

use super::items::{self, ITEM_TABLE, ONE_UP_MUSHROOM};
use super::locations::LOCATION_TABLE;
use super::options::Sm64Options;
use super::pool::plan_pool;
use super::regions::{self, course_by_code};
use super::rules;
use crate::core::{GenerationError, Item, ItemCode, PlayerId, Result};
use crate::graph::{EntranceTable, MultiWorld};
use crate::world::{DataPackage, MultiData, OutputFile, World};

pub const GAME: &str = "Super Mario 64";

/// Super Mario 64 for one player.
#[derive(Clone, Debug)]
pub struct Sm64World {
    player: PlayerId,
    options: Sm64Options,
    topology_present: bool,
    /// Painting code → destination course code.
    area_connections: BTreeMap<u16, u16>,
    layout: Option<EntranceTable>,
}

impl Sm64World {
    pub fn new(player: PlayerId, options: Sm64Options) -> Self {
        Self {
            player,
            options,
            topology_present: false,
            area_connections: BTreeMap::new(),
            layout: None,
        }
    }

    /// Link through `table` instead of the canonical or shuffled one.
    #[must_use]
    pub fn with_layout(mut self, table: EntranceTable) -> Self {
        self.layout = Some(table);
        self
    }

    #[must_use]
    pub fn options(&self) -> &Sm64Options {
        &self.options
    }

    /// Whether paintings were remapped.
    #[must_use]
    pub fn topology_present(&self) -> bool {
        self.topology_present
    }

    #[must_use]
    pub fn area_connections(&self) -> &BTreeMap<u16, u16> {
        &self.area_connections
    }

    /// Output file name for this player.
    #[must_use]
    pub fn output_file_name(&self, world: &MultiWorld) -> String {
        format!(
            "AP_{}_P{}_{}.apsm64ex",
            world.seed_name(),
            self.player.slot(),
            world.file_safe_player_name(self.player)
        )
    }

    fn course_name(&self, code: u16) -> Result<&'static str> {
        course_by_code(code)
            .map(|c| c.name)
            .ok_or_else(|| GenerationError::RegionNotFound {
                name: format!("course {code}"),
                player: self.player,
            })
    }
}

impl World for Sm64World {
    fn game(&self) -> &'static str {
        GAME
    }

    fn player(&self) -> PlayerId {
        self.player
    }

    fn item_name_to_id(&self) -> &'static [(&'static str, u64)] {
        ITEM_TABLE
    }

    fn location_name_to_id(&self) -> &'static [(&'static str, u64)] {
        LOCATION_TABLE
    }

    fn data_version(&self) -> u32 {
        7
    }

    fn generate_early(&mut self, _world: &mut MultiWorld) -> Result<()> {
        self.options.validate(self.player)?;
        self.options.order_mips_costs();
        self.topology_present = self.options.area_randomizer || self.layout.is_some();
        Ok(())
    }

    fn create_regions(&mut self, world: &mut MultiWorld) -> Result<()> {
        regions::create_regions(world, self.player, &self.options)
    }

    fn link_entrances(&mut self, world: &mut MultiWorld) -> Result<()> {
        let table = match &self.layout {
            Some(table) => table.clone(),
            None if self.options.area_randomizer => {
                let mut rng = world.rng().for_player(self.player, "entrances");
                regions::shuffled_table(&mut rng)
            }
            None => regions::canonical_table(),
        };
        debug!(player = %self.player, mode = %table.mode, "linking paintings");
        world.link_entrances(self.player, &table)?;
        self.area_connections = regions::area_connections(world, self.player)?;
        Ok(())
    }

    fn set_rules(&mut self, world: &mut MultiWorld) -> Result<()> {
        rules::set_rules(world, self.player, &self.options)?;
        if self.topology_present {
            for (&entrance, &destination) in &self.area_connections {
                let from = self.course_name(entrance)?;
                let to = self.course_name(destination)?;
                world
                    .spoiler
                    .set_entrance(format!("{from} Entrance"), to, "entrance", self.player);
            }
        }
        Ok(())
    }

    fn create_item(&self, name: &str) -> Result<Item> {
        let id = self.item_id(name)?;
        Ok(Item::new(
            name,
            items::classification(name),
            ItemCode(id),
            self.player,
        ))
    }

    fn generate_basic(&mut self, world: &mut MultiWorld) -> Result<()> {
        let plan = plan_pool(&self.options);
        for name in &plan.items {
            world.itempool.push(self.create_item(name)?);
        }
        for (location, item) in &plan.locked {
            world.place_locked_item(location, self.player, self.create_item(item)?)?;
        }
        info!(
            player = %self.player,
            stars = plan.star_count,
            pool = plan.items.len(),
            locked = plan.locked.len(),
            "built item pool"
        );
        Ok(())
    }

    fn filler_item_name(&self) -> &'static str {
        ONE_UP_MUSHROOM
    }

    fn fill_slot_data(&self, _world: &MultiWorld) -> serde_json::Value {
        json!({
            "AreaRando": self.area_connections,
            "FirstBowserDoorCost": self.options.first_bowser_star_door_cost,
            "BasementDoorCost": self.options.basement_star_door_cost,
            "SecondFloorDoorCost": self.options.second_floor_star_door_cost,
            "MIPS1Cost": self.options.mips1_cost,
            "MIPS2Cost": self.options.mips2_cost,
            "StarsToFinish": self.options.stars_to_finish,
            "DeathLink": self.options.death_link,
        })
    }

    fn generate_output(&self, world: &MultiWorld, output_dir: &Path) -> Result<Option<PathBuf>> {
        if world.players() != 1 {
            return Ok(None);
        }
        let location_to_item = world
            .locations_for(self.player)
            .filter_map(|l| Some((l.address?, l.item.as_ref()?.code.0)))
            .collect();
        let file = OutputFile {
            slot_data: self.fill_slot_data(world),
            location_to_item,
            data_package: DataPackage::single(GAME, self.game_data()),
        };
        file.write_to(output_dir, &self.output_file_name(world))
            .map(Some)
    }

    fn modify_multidata(&self, world: &MultiWorld, multidata: &mut MultiData) -> Result<()> {
        if !self.topology_present {
            return Ok(());
        }
        let mut hints = BTreeMap::new();
        for (&entrance, &destination) in &self.area_connections {
            let painting = format!("{} Entrance", self.course_name(entrance)?);
            let region = world.get_region(self.course_name(destination)?, self.player)?;
            for &location in &region.locations {
                if let Some(address) = world.location(location).address {
                    hints.insert(address, painting.clone());
                }
            }
        }
        multidata.er_hint_data.insert(self.player.slot(), hints);
        Ok(())
    }
}
