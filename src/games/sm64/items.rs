//! Item table.

use crate::core::ItemClassification;

pub const POWER_STAR: &str = "Power Star";
pub const BASEMENT_KEY: &str = "Basement Key";
pub const SECOND_FLOOR_KEY: &str = "Second Floor Key";
pub const PROGRESSIVE_KEY: &str = "Progressive Key";
pub const WING_CAP: &str = "Wing Cap";
pub const METAL_CAP: &str = "Metal Cap";
pub const VANISH_CAP: &str = "Vanish Cap";
pub const ONE_UP_MUSHROOM: &str = "1Up Mushroom";

/// Item name → id.
pub const ITEM_TABLE: &[(&str, u64)] = &[
    (POWER_STAR, 3626000),
    (BASEMENT_KEY, 3626178),
    (SECOND_FLOOR_KEY, 3626179),
    (PROGRESSIVE_KEY, 3626180),
    (WING_CAP, 3626181),
    (METAL_CAP, 3626182),
    (VANISH_CAP, 3626183),
    (ONE_UP_MUSHROOM, 3626184),
    ("Cannon Unlock BoB", 3626200),
    ("Cannon Unlock WF", 3626201),
    ("Cannon Unlock JRB", 3626202),
    ("Cannon Unlock CCM", 3626203),
    ("Cannon Unlock SSL", 3626207),
    ("Cannon Unlock SL", 3626209),
    ("Cannon Unlock WDW", 3626210),
    ("Cannon Unlock TTM", 3626211),
    ("Cannon Unlock THI", 3626212),
    ("Cannon Unlock RR", 3626214),
];

/// Cannon unlock item and the Bob-omb Buddy that grants it in the
/// unrandomized game.
pub const CANNON_UNLOCKS: [(&str, &str); 10] = [
    ("Cannon Unlock BoB", "BoB: Bob-omb Buddy"),
    ("Cannon Unlock WF", "WF: Bob-omb Buddy"),
    ("Cannon Unlock JRB", "JRB: Bob-omb Buddy"),
    ("Cannon Unlock CCM", "CCM: Bob-omb Buddy"),
    ("Cannon Unlock SSL", "SSL: Bob-omb Buddy"),
    ("Cannon Unlock SL", "SL: Bob-omb Buddy"),
    ("Cannon Unlock WDW", "WDW: Bob-omb Buddy"),
    ("Cannon Unlock TTM", "TTM: Bob-omb Buddy"),
    ("Cannon Unlock THI", "THI: Bob-omb Buddy"),
    ("Cannon Unlock RR", "RR: Bob-omb Buddy"),
];

/// Look up an item id.
#[must_use]
pub fn item_id(name: &str) -> Option<u64> {
    ITEM_TABLE.iter().find(|(n, _)| *n == name).map(|(_, id)| *id)
}

/// How the fill should treat an item.
#[must_use]
pub fn classification(name: &str) -> ItemClassification {
    match name {
        ONE_UP_MUSHROOM => ItemClassification::Filler,
        POWER_STAR => ItemClassification::ProgressionSkipBalancing,
        _ => ItemClassification::Progression,
    }
}
