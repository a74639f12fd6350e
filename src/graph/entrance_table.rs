//! Entrance → target region mapping tables.
//!
//! Linking is table-driven: the same declared entrances can be resolved
//! through the canonical table, a seeded shuffle of it, or a table supplied
//! by the caller. A table is plain data and can be inspected or serialized
//! before it is applied.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::SeedRng;

/// Which kind of table drives linking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkMode {
    Canonical,
    Shuffled,
    Explicit,
}

impl std::fmt::Display for LinkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Canonical => "canonical",
            Self::Shuffled => "shuffled",
            Self::Explicit => "explicit",
        };
        f.write_str(name)
    }
}

/// Mapping from entrance name to target region name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntranceTable {
    pub mode: LinkMode,
    targets: FxHashMap<String, String>,
}

impl EntranceTable {
    /// Build a table from (entrance, target) pairs.
    pub fn new<E, T>(mode: LinkMode, pairs: impl IntoIterator<Item = (E, T)>) -> Self
    where
        E: Into<String>,
        T: Into<String>,
    {
        Self {
            mode,
            targets: pairs
                .into_iter()
                .map(|(e, t)| (e.into(), t.into()))
                .collect(),
        }
    }

    /// A caller-supplied table.
    pub fn explicit<E, T>(pairs: impl IntoIterator<Item = (E, T)>) -> Self
    where
        E: Into<String>,
        T: Into<String>,
    {
        Self::new(LinkMode::Explicit, pairs)
    }

    /// Permute the targets of `shuffled` entrances, keeping every other
    /// entry of `self`.
    ///
    /// Entrances are visited in the order given, so the result depends only
    /// on the rng stream and that order.
    #[must_use]
    pub fn shuffle_targets(&self, shuffled: &[&str], rng: &mut SeedRng) -> Self {
        let mut targets: Vec<String> = shuffled
            .iter()
            .filter_map(|e| self.targets.get(*e).cloned())
            .collect();
        rng.shuffle(&mut targets);

        let mut result = self.targets.clone();
        let movable = shuffled.iter().filter(|e| self.targets.contains_key(**e));
        for (entrance, target) in movable.zip(targets) {
            result.insert((*entrance).to_string(), target);
        }

        Self {
            mode: LinkMode::Shuffled,
            targets: result,
        }
    }

    #[must_use]
    pub fn target(&self, entrance: &str) -> Option<&str> {
        self.targets.get(entrance).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.targets.iter().map(|(e, t)| (e.as_str(), t.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical() -> EntranceTable {
        EntranceTable::new(
            LinkMode::Canonical,
            [
                ("A Painting", "A"),
                ("B Painting", "B"),
                ("C Painting", "C"),
                ("D Painting", "D"),
                ("Stairs", "Upstairs"),
            ],
        )
    }

    #[test]
    fn test_lookup() {
        let table = canonical();
        assert_eq!(table.target("B Painting"), Some("B"));
        assert_eq!(table.target("Nowhere"), None);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_shuffle_is_permutation_of_listed_entrances() {
        let table = canonical();
        let paintings = ["A Painting", "B Painting", "C Painting", "D Painting"];
        let shuffled = table.shuffle_targets(&paintings, &mut SeedRng::new(9));

        assert_eq!(shuffled.mode, LinkMode::Shuffled);
        assert_eq!(shuffled.target("Stairs"), Some("Upstairs"));

        let mut targets: Vec<_> = paintings
            .iter()
            .map(|p| shuffled.target(p).unwrap())
            .collect();
        targets.sort_unstable();
        assert_eq!(targets, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let table = canonical();
        let paintings = ["A Painting", "B Painting", "C Painting", "D Painting"];

        let a = table.shuffle_targets(&paintings, &mut SeedRng::new(5));
        let b = table.shuffle_targets(&paintings, &mut SeedRng::new(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(LinkMode::Shuffled.to_string(), "shuffled");
    }
}
