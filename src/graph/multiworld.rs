//! The per-run generation context.
//!
//! `MultiWorld` owns every player's region graph, the shared item pool,
//! precollected items, completion conditions and the spoiler. Worlds get it
//! by `&mut` for each lifecycle step; the search reads it by `&`.
//!
//! Players never share graph nodes. Lookups are keyed by `(name, player)`
//! so two players running the same game can use the same names.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use super::entrance_table::EntranceTable;
use super::region::{Entrance, EntranceId, Location, LocationId, Region, RegionId};
use super::spoiler::Spoiler;
use crate::core::{GenerationError, Item, PlayerId, PlayerMap, Result, SeedRng};
use crate::logic::Rule;

/// Characters that cannot appear in output file names.
const UNSAFE_FILE_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Name indices for one player.
#[derive(Clone, Debug, Default)]
struct PlayerIndex {
    game: Option<String>,
    items: FxHashSet<String>,
    regions: FxHashMap<String, RegionId>,
    locations: FxHashMap<String, LocationId>,
    entrances: FxHashMap<String, EntranceId>,
    origin: Option<RegionId>,
}

/// Generation context for one run.
#[derive(Clone, Debug)]
pub struct MultiWorld {
    seed: u64,
    seed_name: String,
    player_names: PlayerMap<String>,
    index: PlayerMap<PlayerIndex>,

    regions: Vec<Region>,
    locations: Vec<Location>,
    entrances: Vec<Entrance>,

    completion: PlayerMap<Rule>,

    /// Items still waiting for the fill.
    pub itempool: Vec<Item>,
    /// Items every player starts with.
    pub precollected_items: PlayerMap<Vec<Item>>,
    pub spoiler: Spoiler,
}

impl MultiWorld {
    /// Create a run for the given player display names.
    ///
    /// Panics if `player_names` is empty or longer than 255.
    pub fn new(player_names: Vec<String>, seed: u64) -> Self {
        let player_names = PlayerMap::from_vec(player_names);
        let count = player_names.player_count();

        Self {
            seed,
            seed_name: format!("{:020}", seed),
            index: PlayerMap::with_default(count),
            completion: PlayerMap::with_value(count, Rule::Always),
            precollected_items: PlayerMap::with_default(count),
            player_names,
            regions: Vec::new(),
            locations: Vec::new(),
            entrances: Vec::new(),
            itempool: Vec::new(),
            spoiler: Spoiler::new(),
        }
    }

    // === Run metadata ===

    #[must_use]
    pub fn players(&self) -> usize {
        self.player_names.player_count()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        self.player_names.player_ids()
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn seed_name(&self) -> &str {
        &self.seed_name
    }

    /// Root RNG of the run. Worlds derive their own streams from it.
    #[must_use]
    pub fn rng(&self) -> SeedRng {
        SeedRng::new(self.seed)
    }

    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        &self.player_names[player]
    }

    /// Player name with characters that are illegal in file names removed.
    #[must_use]
    pub fn file_safe_player_name(&self, player: PlayerId) -> String {
        self.player_names[player]
            .chars()
            .filter(|c| !UNSAFE_FILE_CHARS.contains(c) && !c.is_control())
            .collect()
    }

    fn player_index(&self, player: PlayerId) -> Result<&PlayerIndex> {
        if self.index.contains(player) {
            Ok(&self.index[player])
        } else {
            Err(GenerationError::UnknownPlayer { player })
        }
    }

    fn player_index_mut(&mut self, player: PlayerId) -> Result<&mut PlayerIndex> {
        if self.index.contains(player) {
            Ok(&mut self.index[player])
        } else {
            Err(GenerationError::UnknownPlayer { player })
        }
    }

    /// Register the game a player runs and the item names its rules may use.
    pub fn register_game<'a>(
        &mut self,
        player: PlayerId,
        game: &str,
        item_names: impl IntoIterator<Item = &'a str>,
    ) -> Result<()> {
        let index = self.player_index_mut(player)?;
        index.game = Some(game.to_string());
        index.items = item_names.into_iter().map(str::to_string).collect();
        Ok(())
    }

    #[must_use]
    pub fn game(&self, player: PlayerId) -> Option<&str> {
        self.player_index(player).ok()?.game.as_deref()
    }

    #[must_use]
    pub fn is_known_item(&self, name: &str, player: PlayerId) -> bool {
        self.index.contains(player) && self.index[player].items.contains(name)
    }

    // === Graph construction ===

    /// Create a region. The first region a player creates is their origin
    /// unless `set_origin` says otherwise.
    pub fn create_region(&mut self, player: PlayerId, name: &str) -> Result<RegionId> {
        let id = RegionId(self.regions.len() as u32);
        let index = self.player_index_mut(player)?;
        if index.regions.contains_key(name) {
            return Err(GenerationError::DuplicateRegion {
                name: name.to_string(),
                player,
            });
        }
        index.regions.insert(name.to_string(), id);
        index.origin.get_or_insert(id);

        self.regions.push(Region::new(id, name, player));
        Ok(id)
    }

    /// Create a location inside a region.
    pub fn create_location(
        &mut self,
        region: RegionId,
        name: &str,
        address: Option<u64>,
    ) -> Result<LocationId> {
        let player = self.regions[region.index()].player;
        let id = LocationId(self.locations.len() as u32);
        let index = self.player_index_mut(player)?;
        if index.locations.contains_key(name) {
            return Err(GenerationError::DuplicateLocation {
                name: name.to_string(),
                player,
            });
        }
        index.locations.insert(name.to_string(), id);

        self.locations
            .push(Location::new(id, name, player, region, address));
        self.regions[region.index()].locations.push(id);
        Ok(id)
    }

    /// Declare an exit of a region. Its target is bound by linking.
    pub fn create_exit(&mut self, region: RegionId, name: &str) -> Result<EntranceId> {
        let player = self.regions[region.index()].player;
        let id = EntranceId(self.entrances.len() as u32);
        let index = self.player_index_mut(player)?;
        if index.entrances.contains_key(name) {
            return Err(GenerationError::DuplicateEntrance {
                name: name.to_string(),
                player,
            });
        }
        index.entrances.insert(name.to_string(), id);

        self.entrances.push(Entrance::new(id, name, player, region));
        self.regions[region.index()].exits.push(id);
        Ok(id)
    }

    /// Make a region the start of a player's search.
    pub fn set_origin(&mut self, player: PlayerId, region: &str) -> Result<()> {
        let id = self.region_id(region, player)?;
        self.player_index_mut(player)?.origin = Some(id);
        Ok(())
    }

    #[must_use]
    pub fn origin(&self, player: PlayerId) -> Option<RegionId> {
        self.player_index(player).ok()?.origin
    }

    /// Bind one entrance to its target region.
    pub fn connect(&mut self, entrance: EntranceId, target: RegionId) -> Result<()> {
        let ent = &mut self.entrances[entrance.index()];
        if ent.connected_region.is_some() {
            return Err(GenerationError::AlreadyLinked {
                entrance: ent.name.clone(),
                player: ent.player,
            });
        }
        ent.connected_region = Some(target);
        self.regions[target.index()].entrances.push(entrance);
        Ok(())
    }

    /// Resolve every declared entrance of a player through `table`.
    ///
    /// Fails on the first entrance without a mapping or whose target region
    /// does not exist. Either is a template bug, not a user error.
    pub fn link_entrances(&mut self, player: PlayerId, table: &EntranceTable) -> Result<()> {
        let mut pending: Vec<EntranceId> =
            self.player_index(player)?.entrances.values().copied().collect();
        pending.sort_unstable();

        for entrance in pending {
            let name = &self.entrances[entrance.index()].name;
            let target_name = table.target(name).ok_or_else(|| {
                GenerationError::UnmappedEntrance {
                    entrance: name.clone(),
                    table: table.mode.to_string(),
                    player,
                }
            })?;
            let target = self.region_id(target_name, player)?;
            debug!(%player, entrance = %name, target = target_name, "linking entrance");
            self.connect(entrance, target)?;
        }
        Ok(())
    }

    // === Lookup ===

    #[must_use]
    pub fn region(&self, id: RegionId) -> &Region {
        &self.regions[id.index()]
    }

    #[must_use]
    pub fn location(&self, id: LocationId) -> &Location {
        &self.locations[id.index()]
    }

    #[must_use]
    pub fn entrance(&self, id: EntranceId) -> &Entrance {
        &self.entrances[id.index()]
    }

    pub fn region_id(&self, name: &str, player: PlayerId) -> Result<RegionId> {
        self.player_index(player)?
            .regions
            .get(name)
            .copied()
            .ok_or_else(|| GenerationError::RegionNotFound {
                name: name.to_string(),
                player,
            })
    }

    pub fn location_id(&self, name: &str, player: PlayerId) -> Result<LocationId> {
        self.player_index(player)?
            .locations
            .get(name)
            .copied()
            .ok_or_else(|| GenerationError::LocationNotFound {
                name: name.to_string(),
                player,
            })
    }

    pub fn entrance_id(&self, name: &str, player: PlayerId) -> Result<EntranceId> {
        self.player_index(player)?
            .entrances
            .get(name)
            .copied()
            .ok_or_else(|| GenerationError::EntranceNotFound {
                name: name.to_string(),
                player,
            })
    }

    pub fn get_region(&self, name: &str, player: PlayerId) -> Result<&Region> {
        self.region_id(name, player).map(|id| self.region(id))
    }

    pub fn get_location(&self, name: &str, player: PlayerId) -> Result<&Location> {
        self.location_id(name, player).map(|id| self.location(id))
    }

    pub fn get_entrance(&self, name: &str, player: PlayerId) -> Result<&Entrance> {
        self.entrance_id(name, player).map(|id| self.entrance(id))
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn entrances(&self) -> &[Entrance] {
        &self.entrances
    }

    pub fn regions_for(&self, player: PlayerId) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(move |r| r.player == player)
    }

    pub fn locations_for(&self, player: PlayerId) -> impl Iterator<Item = &Location> {
        self.locations.iter().filter(move |l| l.player == player)
    }

    pub fn entrances_for(&self, player: PlayerId) -> impl Iterator<Item = &Entrance> {
        self.entrances.iter().filter(move |e| e.player == player)
    }

    /// Locations the fill may still place into.
    pub fn open_locations(&self, player: PlayerId) -> impl Iterator<Item = &Location> {
        self.locations_for(player).filter(|l| l.is_open())
    }

    // === Rules ===

    /// Check that every name a rule mentions resolves.
    pub fn validate_rule(&self, rule: &Rule) -> Result<()> {
        let mut result = Ok(());
        rule.for_each_leaf(&mut |leaf| {
            if result.is_err() {
                return;
            }
            result = match leaf {
                Rule::Has { item, player, .. } => {
                    if self.is_known_item(item, *player) {
                        Ok(())
                    } else {
                        Err(GenerationError::UnknownItem {
                            name: item.clone(),
                            player: *player,
                        })
                    }
                }
                Rule::CanReachRegion { region, player } => {
                    self.region_id(region, *player).map(|_| ())
                }
                Rule::CanReachLocation { location, player } => {
                    self.location_id(location, *player).map(|_| ())
                }
                _ => Ok(()),
            };
        });
        result
    }

    /// Replace a location's access rule.
    pub fn set_location_rule(&mut self, name: &str, player: PlayerId, rule: Rule) -> Result<()> {
        self.validate_rule(&rule)?;
        let id = self.location_id(name, player)?;
        self.locations[id.index()].access_rule = rule;
        Ok(())
    }

    /// Conjoin a rule onto a location's access rule.
    pub fn add_location_rule(&mut self, name: &str, player: PlayerId, rule: Rule) -> Result<()> {
        self.validate_rule(&rule)?;
        let id = self.location_id(name, player)?;
        let slot = &mut self.locations[id.index()].access_rule;
        *slot = std::mem::take(slot).and(rule);
        Ok(())
    }

    /// Replace an entrance's access rule.
    pub fn set_entrance_rule(&mut self, name: &str, player: PlayerId, rule: Rule) -> Result<()> {
        self.validate_rule(&rule)?;
        let id = self.entrance_id(name, player)?;
        self.entrances[id.index()].access_rule = rule;
        Ok(())
    }

    /// Conjoin a rule onto an entrance's access rule.
    pub fn add_entrance_rule(&mut self, name: &str, player: PlayerId, rule: Rule) -> Result<()> {
        self.validate_rule(&rule)?;
        let id = self.entrance_id(name, player)?;
        let slot = &mut self.entrances[id.index()].access_rule;
        *slot = std::mem::take(slot).and(rule);
        Ok(())
    }

    /// Set what a player needs to finish their game.
    pub fn set_completion_condition(&mut self, player: PlayerId, rule: Rule) -> Result<()> {
        self.validate_rule(&rule)?;
        self.player_index(player)?;
        self.completion[player] = rule;
        Ok(())
    }

    #[must_use]
    pub fn completion_condition(&self, player: PlayerId) -> &Rule {
        &self.completion[player]
    }

    // === Placement ===

    /// Place an item chosen by the fill.
    pub fn place_item(&mut self, location: LocationId, item: Item) -> Result<()> {
        let loc = &mut self.locations[location.index()];
        if let Some(existing) = &loc.item {
            return Err(GenerationError::LocationFilled {
                location: loc.name.clone(),
                item: existing.name.clone(),
                player: loc.player,
            });
        }
        loc.item = Some(item);
        Ok(())
    }

    /// Place an item directly and take the location out of the fill.
    pub fn place_locked_item(&mut self, name: &str, player: PlayerId, item: Item) -> Result<()> {
        let id = self.location_id(name, player)?;
        self.place_item(id, item)?;
        self.locations[id.index()].locked = true;
        Ok(())
    }

    /// Number of pool items owned by a player.
    #[must_use]
    pub fn pool_size(&self, player: PlayerId) -> usize {
        self.itempool.iter().filter(|i| i.player == player).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ErrorKind, ItemClassification, ItemCode};
    use crate::graph::LinkMode;

    fn player() -> PlayerId {
        PlayerId::new(0)
    }

    fn star() -> Item {
        Item::new("Star", ItemClassification::Progression, ItemCode(1), player())
    }

    fn small_world() -> MultiWorld {
        let mut mw = MultiWorld::new(vec!["Mario".into()], 1);
        mw.register_game(player(), "Test", ["Star", "Key"]).unwrap();
        let hub = mw.create_region(player(), "Hub").unwrap();
        let room = mw.create_region(player(), "Room").unwrap();
        mw.create_location(room, "Chest", Some(100)).unwrap();
        mw.create_location(hub, "Pedestal", Some(101)).unwrap();
        mw.create_exit(hub, "Door").unwrap();
        mw
    }

    #[test]
    fn test_duplicate_region_rejected() {
        let mut mw = small_world();
        let err = mw.create_region(player(), "Hub").unwrap_err();
        assert!(matches!(err, GenerationError::DuplicateRegion { .. }));
        assert_eq!(err.kind(), ErrorKind::Topology);
    }

    #[test]
    fn test_same_names_for_other_player() {
        let mut mw = MultiWorld::new(vec!["A".into(), "B".into()], 1);
        let a = mw.create_region(PlayerId::new(0), "Hub").unwrap();
        let b = mw.create_region(PlayerId::new(1), "Hub").unwrap();

        assert_ne!(a, b);
        assert_eq!(mw.region_id("Hub", PlayerId::new(1)).unwrap(), b);
    }

    #[test]
    fn test_origin_is_first_region() {
        let mw = small_world();
        assert_eq!(mw.origin(player()), Some(mw.region_id("Hub", player()).unwrap()));
    }

    #[test]
    fn test_lookup_not_found() {
        let mw = small_world();
        let err = mw.get_location("Missing", player()).unwrap_err();
        assert!(matches!(err, GenerationError::LocationNotFound { .. }));
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn test_link_entrances() {
        let mut mw = small_world();
        let table = EntranceTable::new(LinkMode::Canonical, [("Door", "Room")]);
        mw.link_entrances(player(), &table).unwrap();

        let door = mw.get_entrance("Door", player()).unwrap();
        let room = mw.region_id("Room", player()).unwrap();
        assert_eq!(door.connected_region, Some(room));
        assert_eq!(mw.region(room).entrances.len(), 1);
    }

    #[test]
    fn test_link_unmapped_entrance_fails() {
        let mut mw = small_world();
        let table = EntranceTable::new(LinkMode::Canonical, [("Window", "Room")]);
        let err = mw.link_entrances(player(), &table).unwrap_err();
        assert!(matches!(err, GenerationError::UnmappedEntrance { .. }));
    }

    #[test]
    fn test_link_to_missing_region_fails() {
        let mut mw = small_world();
        let table = EntranceTable::new(LinkMode::Canonical, [("Door", "Attic")]);
        let err = mw.link_entrances(player(), &table).unwrap_err();
        assert!(matches!(err, GenerationError::RegionNotFound { .. }));
    }

    #[test]
    fn test_double_link_fails() {
        let mut mw = small_world();
        let table = EntranceTable::new(LinkMode::Canonical, [("Door", "Room")]);
        mw.link_entrances(player(), &table).unwrap();
        let err = mw.link_entrances(player(), &table).unwrap_err();
        assert!(matches!(err, GenerationError::AlreadyLinked { .. }));
    }

    #[test]
    fn test_rule_validation() {
        let mut mw = small_world();

        assert!(mw
            .set_location_rule("Chest", player(), Rule::has("Key", player()))
            .is_ok());

        let err = mw
            .set_location_rule("Chest", player(), Rule::has("Hammer", player()))
            .unwrap_err();
        assert!(matches!(err, GenerationError::UnknownItem { .. }));

        let err = mw
            .set_location_rule("Chest", player(), Rule::can_reach_region("Attic", player()))
            .unwrap_err();
        assert!(matches!(err, GenerationError::RegionNotFound { .. }));
    }

    #[test]
    fn test_add_rule_conjoins() {
        let mut mw = small_world();
        mw.add_location_rule("Chest", player(), Rule::has("Key", player())).unwrap();
        mw.add_location_rule("Chest", player(), Rule::has("Star", player())).unwrap();

        let rule = &mw.get_location("Chest", player()).unwrap().access_rule;
        assert_eq!(
            *rule,
            Rule::All(vec![Rule::has("Key", player()), Rule::has("Star", player())])
        );
    }

    #[test]
    fn test_locked_placement() {
        let mut mw = small_world();
        mw.place_locked_item("Chest", player(), star()).unwrap();

        let chest = mw.get_location("Chest", player()).unwrap();
        assert!(chest.locked);
        assert_eq!(mw.open_locations(player()).count(), 1);

        let err = mw.place_locked_item("Chest", player(), star()).unwrap_err();
        assert!(matches!(err, GenerationError::LocationFilled { .. }));
    }

    #[test]
    fn test_file_safe_name() {
        let mw = MultiWorld::new(vec!["Ma:rio/<64>?".into()], 1);
        assert_eq!(mw.file_safe_player_name(player()), "Mario64");
    }

    #[test]
    fn test_seed_name_is_padded() {
        let mw = MultiWorld::new(vec!["Mario".into()], 42);
        assert_eq!(mw.seed_name(), "00000000000000000042");
    }
}
