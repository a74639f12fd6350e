//! Fixed-order lifecycle driver.
//!
//! `Generator` owns the `MultiWorld` and one `World` per player. `prepare`
//! runs every step up to pool creation for all players and checks the pool
//! against the open locations. The caller (or an external fill) then places
//! the pool; `finalize` produces output files and multidata.
//!
//! Any error aborts the run. No step is retried and no partial state is
//! rolled back.

use std::path::Path;

use tracing::{debug, info};

use super::adapter::World;
use super::output::{MultiData, PlacedItem};
use crate::core::{GenerationError, PlayerId, PlayerMap, Result};
use crate::graph::MultiWorld;

/// A lifecycle step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    GenerateEarly,
    CreateRegions,
    LinkEntrances,
    SetRules,
    GenerateBasic,
}

impl Step {
    /// Steps run by `Generator::prepare`, in order.
    pub const ORDER: [Step; 5] = [
        Step::GenerateEarly,
        Step::CreateRegions,
        Step::LinkEntrances,
        Step::SetRules,
        Step::GenerateBasic,
    ];
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Step::GenerateEarly => "generate_early",
            Step::CreateRegions => "create_regions",
            Step::LinkEntrances => "link_entrances",
            Step::SetRules => "set_rules",
            Step::GenerateBasic => "generate_basic",
        };
        f.write_str(name)
    }
}

/// Drives every player's world through generation.
pub struct Generator {
    multiworld: MultiWorld,
    worlds: PlayerMap<Box<dyn World>>,
}

impl Generator {
    /// Pair a run with one world per player, in slot order.
    pub fn new(mut multiworld: MultiWorld, worlds: Vec<Box<dyn World>>) -> Result<Self> {
        if worlds.len() != multiworld.players() {
            return Err(GenerationError::UnknownPlayer {
                player: PlayerId::new(worlds.len().min(multiworld.players()) as u8),
            });
        }
        for (slot, world) in worlds.iter().enumerate() {
            let player = PlayerId::new(slot as u8);
            if world.player() != player {
                return Err(GenerationError::UnknownPlayer {
                    player: world.player(),
                });
            }
            let names = world.item_name_to_id().iter().map(|(name, _)| *name);
            multiworld.register_game(player, world.game(), names)?;
        }

        Ok(Self {
            multiworld,
            worlds: PlayerMap::from_vec(worlds),
        })
    }

    #[must_use]
    pub fn multiworld(&self) -> &MultiWorld {
        &self.multiworld
    }

    /// Mutable access for the fill.
    pub fn multiworld_mut(&mut self) -> &mut MultiWorld {
        &mut self.multiworld
    }

    #[must_use]
    pub fn world(&self, player: PlayerId) -> &dyn World {
        self.worlds[player].as_ref()
    }

    pub fn into_multiworld(self) -> MultiWorld {
        self.multiworld
    }

    /// Run one step for every player.
    pub fn call_all(&mut self, step: Step) -> Result<()> {
        debug!(%step, "running step");
        let multiworld = &mut self.multiworld;
        for (player, world) in self.worlds.iter_mut() {
            debug!(%step, %player, game = world.game(), "running step for player");
            match step {
                Step::GenerateEarly => world.generate_early(multiworld)?,
                Step::CreateRegions => world.create_regions(multiworld)?,
                Step::LinkEntrances => world.link_entrances(multiworld)?,
                Step::SetRules => world.set_rules(multiworld)?,
                Step::GenerateBasic => world.generate_basic(multiworld)?,
            }
        }
        Ok(())
    }

    /// Run every step up to pool creation, then check pool sizes.
    pub fn prepare(&mut self) -> Result<()> {
        for step in Step::ORDER {
            self.call_all(step)?;
        }
        self.check_links()?;
        self.check_pool_sizes()
    }

    /// Every declared entrance must have a target.
    pub fn check_links(&self) -> Result<()> {
        match self.multiworld.entrances().iter().find(|e| !e.is_linked()) {
            Some(entrance) => Err(GenerationError::UnlinkedEntrance {
                entrance: entrance.name.clone(),
                player: entrance.player,
            }),
            None => Ok(()),
        }
    }

    /// Each player's pool must exactly fill their open locations.
    pub fn check_pool_sizes(&self) -> Result<()> {
        for player in self.multiworld.player_ids() {
            let items = self.multiworld.pool_size(player);
            let locations = self.multiworld.open_locations(player).count();
            if items != locations {
                return Err(GenerationError::PoolSizeMismatch {
                    player,
                    items,
                    locations,
                });
            }
            info!(%player, items, "item pool matches open locations");
        }
        Ok(())
    }

    /// Write output files and build multidata once every location is filled.
    pub fn finalize(&mut self, output_dir: &Path) -> Result<MultiData> {
        if let Some(empty) = self
            .multiworld
            .locations()
            .iter()
            .find(|l| l.address.is_some() && l.item.is_none())
        {
            return Err(GenerationError::UnfilledLocation {
                location: empty.name.clone(),
                player: empty.player,
            });
        }

        let mut multidata = MultiData {
            seed_name: self.multiworld.seed_name().to_string(),
            ..MultiData::default()
        };

        for (player, world) in self.worlds.iter() {
            world.generate_output(&self.multiworld, output_dir)?;

            let slot = player.slot();
            multidata.games.insert(slot, world.game().to_string());
            multidata.slot_data.insert(
                slot,
                serde_json::to_string(&world.fill_slot_data(&self.multiworld))?,
            );
            let placements = self
                .multiworld
                .locations_for(player)
                .filter_map(|l| {
                    let item = l.item.as_ref()?;
                    Some((
                        l.address?,
                        PlacedItem {
                            item: item.code.0,
                            owner: item.player.slot(),
                        },
                    ))
                })
                .collect();
            multidata.locations.insert(slot, placements);
        }

        for (_, world) in self.worlds.iter() {
            world.modify_multidata(&self.multiworld, &mut multidata)?;
        }
        Ok(multidata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_order() {
        let names: Vec<String> = Step::ORDER.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            names,
            ["generate_early", "create_regions", "link_entrances", "set_rules", "generate_basic"]
        );
    }
}
