//! Spoiler trace of randomized topology.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpoilerEntrance {
    pub entrance: String,
    pub destination: String,
    pub direction: String,
    pub player: PlayerId,
}

/// Recorded entrance choices, in the order worlds reported them.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Spoiler {
    entrances: Vec<SpoilerEntrance>,
}

impl Spoiler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entrance; a second call for the same entrance and player
    /// replaces the first.
    pub fn set_entrance(
        &mut self,
        entrance: impl Into<String>,
        destination: impl Into<String>,
        direction: impl Into<String>,
        player: PlayerId,
    ) {
        let record = SpoilerEntrance {
            entrance: entrance.into(),
            destination: destination.into(),
            direction: direction.into(),
            player,
        };
        match self
            .entrances
            .iter_mut()
            .find(|e| e.entrance == record.entrance && e.player == player)
        {
            Some(existing) => *existing = record,
            None => self.entrances.push(record),
        }
    }

    pub fn entrances(&self) -> &[SpoilerEntrance] {
        &self.entrances
    }

    /// Entrances recorded for one player.
    pub fn entrances_for(&self, player: PlayerId) -> impl Iterator<Item = &SpoilerEntrance> {
        self.entrances.iter().filter(move |e| e.player == player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_entrance_replaces_same_key() {
        let mut spoiler = Spoiler::new();
        let p = PlayerId::new(0);

        spoiler.set_entrance("BoB Entrance", "WF", "entrance", p);
        spoiler.set_entrance("BoB Entrance", "JRB", "entrance", p);
        spoiler.set_entrance("BoB Entrance", "CCM", "entrance", PlayerId::new(1));

        assert_eq!(spoiler.entrances().len(), 2);
        let mine: Vec<_> = spoiler.entrances_for(p).collect();
        assert_eq!(mine[0].destination, "JRB");
    }
}
