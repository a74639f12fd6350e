//! Items: the things a world puts into its pool and onto locations.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Numeric item id shared with the game client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemCode(pub u64);

impl std::fmt::Display for ItemCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the fill treats an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemClassification {
    /// Unlocks checks; considered by logic and by progression balancing.
    Progression,
    /// Unlocks checks but is exempt from progression balancing.
    ProgressionSkipBalancing,
    Filler,
    Trap,
}

impl ItemClassification {
    /// Whether logic can ever care about this item.
    #[must_use]
    pub const fn is_progression(self) -> bool {
        matches!(self, Self::Progression | Self::ProgressionSkipBalancing)
    }
}

/// An item owned by one player.
///
/// Immutable once created. Moves from the item pool to a location on
/// placement.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub classification: ItemClassification,
    pub code: ItemCode,
    pub player: PlayerId,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        classification: ItemClassification,
        code: ItemCode,
        player: PlayerId,
    ) -> Self {
        Self {
            name: name.into(),
            classification,
            code,
            player,
        }
    }

    #[must_use]
    pub fn is_progression(&self) -> bool {
        self.classification.is_progression()
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progression_flags() {
        assert!(ItemClassification::Progression.is_progression());
        assert!(ItemClassification::ProgressionSkipBalancing.is_progression());
        assert!(!ItemClassification::Filler.is_progression());
        assert!(!ItemClassification::Trap.is_progression());
    }

    #[test]
    fn test_classification_serde_names() {
        let json = serde_json::to_string(&ItemClassification::ProgressionSkipBalancing).unwrap();
        assert_eq!(json, "\"progression_skip_balancing\"");
    }

    #[test]
    fn test_item_display() {
        let item = Item::new("Wing Cap", ItemClassification::Progression, ItemCode(1), PlayerId::new(1));
        assert_eq!(item.to_string(), "Wing Cap (Player 2)");
    }
}
