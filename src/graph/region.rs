//! Regions, locations and entrances.
//!
//! All three live in arenas owned by `MultiWorld` and refer to each other
//! by typed index. Names are only unique per player.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Item, PlayerId};
use crate::logic::Rule;

/// Region arena index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RegionId(pub u32);

/// Location arena index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocationId(pub u32);

/// Entrance arena index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntranceId(pub u32);

impl RegionId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl LocationId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl EntranceId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A named area holding locations, left through entrances.
#[derive(Clone, Debug)]
pub struct Region {
    pub id: RegionId,
    pub name: String,
    pub player: PlayerId,
    /// Locations in declaration order.
    pub locations: Vec<LocationId>,
    /// Outgoing entrances.
    pub exits: SmallVec<[EntranceId; 4]>,
    /// Incoming entrances, filled in when an entrance is linked here.
    pub entrances: SmallVec<[EntranceId; 4]>,
}

impl Region {
    pub(crate) fn new(id: RegionId, name: impl Into<String>, player: PlayerId) -> Self {
        Self {
            id,
            name: name.into(),
            player,
            locations: Vec::new(),
            exits: SmallVec::new(),
            entrances: SmallVec::new(),
        }
    }
}

/// A slot that can hold exactly one item.
#[derive(Clone, Debug)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub player: PlayerId,
    pub region: RegionId,
    /// Address reported to the client. `None` for event locations.
    pub address: Option<u64>,
    pub item: Option<Item>,
    /// Set by locked placement; the fill must skip this location.
    pub locked: bool,
    pub access_rule: Rule,
}

impl Location {
    pub(crate) fn new(
        id: LocationId,
        name: impl Into<String>,
        player: PlayerId,
        region: RegionId,
        address: Option<u64>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            player,
            region,
            address,
            item: None,
            locked: false,
            access_rule: Rule::Always,
        }
    }

    /// Whether the fill may still place an item here.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.item.is_none() && !self.locked
    }
}

/// A directed edge between regions.
///
/// Declared with only its source; the target is bound later by
/// `MultiWorld::link_entrances`.
#[derive(Clone, Debug)]
pub struct Entrance {
    pub id: EntranceId,
    pub name: String,
    pub player: PlayerId,
    pub parent_region: RegionId,
    pub connected_region: Option<RegionId>,
    pub access_rule: Rule,
}

impl Entrance {
    pub(crate) fn new(
        id: EntranceId,
        name: impl Into<String>,
        player: PlayerId,
        parent_region: RegionId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            player,
            parent_region,
            connected_region: None,
            access_rule: Rule::Always,
        }
    }

    #[must_use]
    pub fn is_linked(&self) -> bool {
        self.connected_region.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ItemClassification, ItemCode};

    #[test]
    fn test_new_location_defaults() {
        let loc = Location::new(LocationId(0), "Summit", PlayerId::new(0), RegionId(0), Some(10));

        assert!(loc.is_open());
        assert_eq!(loc.access_rule, Rule::Always);
    }

    #[test]
    fn test_filled_or_locked_location_is_closed() {
        let mut loc = Location::new(LocationId(0), "Summit", PlayerId::new(0), RegionId(0), None);
        loc.item = Some(Item::new(
            "Power Star",
            ItemClassification::ProgressionSkipBalancing,
            ItemCode(1),
            PlayerId::new(0),
        ));
        assert!(!loc.is_open());

        let mut locked = Location::new(LocationId(1), "Buddy", PlayerId::new(0), RegionId(0), None);
        locked.locked = true;
        assert!(!locked.is_open());
    }

    #[test]
    fn test_entrance_starts_unlinked() {
        let ent = Entrance::new(EntranceId(3), "Painting", PlayerId::new(0), RegionId(0));
        assert!(!ent.is_linked());
    }
}
