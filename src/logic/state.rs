//! Collection state: the capability set rules are evaluated against.
//!
//! Uses `im` persistent maps so a search can clone a state per hypothesis
//! in O(1).
//!
//! Only progression items are counted. Filler and traps can never satisfy
//! a rule, so collecting them is a no-op.

use im::{HashMap as ImHashMap, HashSet as ImHashSet};

use super::search;
use crate::core::{Item, PlayerId, PlayerMap};
use crate::graph::{LocationId, MultiWorld, RegionId};

/// Hypothetical progress of every player.
#[derive(Clone, Debug)]
pub struct CollectionState {
    prog_items: PlayerMap<ImHashMap<String, u32>>,
    reachable_regions: ImHashSet<RegionId>,
    reachable_locations: ImHashSet<LocationId>,
    collected_locations: ImHashSet<LocationId>,
    /// Set when an item was removed; cached reachability may be too large.
    needs_reset: bool,
}

impl CollectionState {
    /// Create a state holding every player's precollected items.
    #[must_use]
    pub fn new(world: &MultiWorld) -> Self {
        let mut state = Self::empty(world.players());
        for (_, items) in world.precollected_items.iter() {
            for item in items {
                state.collect(item);
            }
        }
        state
    }

    /// Create a state with nothing collected.
    #[must_use]
    pub fn empty(player_count: usize) -> Self {
        Self {
            prog_items: PlayerMap::with_default(player_count),
            reachable_regions: ImHashSet::new(),
            reachable_locations: ImHashSet::new(),
            collected_locations: ImHashSet::new(),
            needs_reset: false,
        }
    }

    /// How many of an item a player holds. Absent items count as zero.
    #[must_use]
    pub fn count(&self, item: &str, player: PlayerId) -> u32 {
        if !self.prog_items.contains(player) {
            return 0;
        }
        self.prog_items[player].get(item).copied().unwrap_or(0)
    }

    /// Whether a player holds at least `count` of an item.
    #[must_use]
    pub fn has(&self, item: &str, player: PlayerId, count: u32) -> bool {
        self.count(item, player) >= count
    }

    /// Add an item. Returns whether it counted.
    pub fn collect(&mut self, item: &Item) -> bool {
        if !item.is_progression() || !self.prog_items.contains(item.player) {
            return false;
        }
        *self.prog_items[item.player]
            .entry(item.name.clone())
            .or_insert(0) += 1;
        true
    }

    /// Take back a collected item. Returns whether anything changed.
    pub fn remove(&mut self, item: &Item) -> bool {
        if !item.is_progression() || !self.prog_items.contains(item.player) {
            return false;
        }
        let items = &mut self.prog_items[item.player];
        match items.get(&item.name).copied() {
            Some(0) | None => false,
            Some(1) => {
                items.remove(&item.name);
                self.needs_reset = true;
                true
            }
            Some(n) => {
                items.insert(item.name.clone(), n - 1);
                self.needs_reset = true;
                true
            }
        }
    }

    #[must_use]
    pub fn can_reach_region(&self, region: RegionId) -> bool {
        self.reachable_regions.contains(&region)
    }

    #[must_use]
    pub fn can_reach_location(&self, location: LocationId) -> bool {
        self.reachable_locations.contains(&location)
    }

    pub fn reachable_regions(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.reachable_regions.iter().copied()
    }

    pub fn reachable_locations(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.reachable_locations.iter().copied()
    }

    /// Whether a sweep already picked up the item at this location.
    #[must_use]
    pub fn is_collected(&self, location: LocationId) -> bool {
        self.collected_locations.contains(&location)
    }

    pub(crate) fn mark_collected(&mut self, location: LocationId) -> bool {
        self.collected_locations.insert(location).is_none()
    }

    pub(crate) fn insert_region(&mut self, region: RegionId) -> bool {
        self.reachable_regions.insert(region).is_none()
    }

    pub(crate) fn insert_location(&mut self, location: LocationId) -> bool {
        self.reachable_locations.insert(location).is_none()
    }

    /// Drop cached reachability if items were removed since the last update.
    pub(crate) fn reset_if_needed(&mut self) {
        if self.needs_reset {
            self.reachable_regions.clear();
            self.reachable_locations.clear();
            self.needs_reset = false;
        }
    }

    /// Recompute reachable regions and locations.
    pub fn update_reachable(&mut self, world: &MultiWorld) {
        search::update_reachable(self, world);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ItemClassification, ItemCode};

    fn item(name: &str, classification: ItemClassification, player: u8) -> Item {
        Item::new(name, classification, ItemCode(0), PlayerId::new(player))
    }

    #[test]
    fn test_absent_items_count_zero() {
        let state = CollectionState::empty(2);
        assert_eq!(state.count("Power Star", PlayerId::new(0)), 0);
        assert!(state.has("Power Star", PlayerId::new(0), 0));
        assert!(!state.has("Power Star", PlayerId::new(5), 1));
    }

    #[test]
    fn test_collect_is_per_player() {
        let mut state = CollectionState::empty(2);
        assert!(state.collect(&item("Wing Cap", ItemClassification::Progression, 1)));

        assert!(state.has("Wing Cap", PlayerId::new(1), 1));
        assert!(!state.has("Wing Cap", PlayerId::new(0), 1));
    }

    #[test]
    fn test_filler_is_not_counted() {
        let mut state = CollectionState::empty(1);
        assert!(!state.collect(&item("1Up Mushroom", ItemClassification::Filler, 0)));
        assert_eq!(state.count("1Up Mushroom", PlayerId::new(0)), 0);
    }

    #[test]
    fn test_remove() {
        let mut state = CollectionState::empty(1);
        let star = item("Power Star", ItemClassification::ProgressionSkipBalancing, 0);
        state.collect(&star);
        state.collect(&star);

        assert!(state.remove(&star));
        assert_eq!(state.count("Power Star", PlayerId::new(0)), 1);
        assert!(state.remove(&star));
        assert!(!state.remove(&star));
        assert_eq!(state.count("Power Star", PlayerId::new(0)), 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = CollectionState::empty(1);
        let key = item("Basement Key", ItemClassification::Progression, 0);
        let snapshot = state.clone();

        state.collect(&key);
        assert!(state.has("Basement Key", PlayerId::new(0), 1));
        assert!(!snapshot.has("Basement Key", PlayerId::new(0), 1));
    }

    #[test]
    fn test_new_collects_precollected() {
        let mut world = MultiWorld::new(vec!["Mario".into()], 0);
        world.precollected_items[PlayerId::new(0)]
            .push(item("Metal Cap", ItemClassification::Progression, 0));

        let state = CollectionState::new(&world);
        assert!(state.has("Metal Cap", PlayerId::new(0), 1));
    }
}
