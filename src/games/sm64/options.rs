//! Per-player options.
//!
//! Field names on the wire match the option names players write in their
//! settings. Every field has a default, so an empty object is valid.

use serde::{Deserialize, Serialize};

use crate::core::{GenerationError, PlayerId, Result};

/// What the ! boxes hold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExclamationBoxes {
    /// 1Up blocks keep their 1Up Mushroom.
    #[default]
    #[serde(rename = "off")]
    Off,
    /// 1Up blocks become locations.
    #[serde(rename = "1ups_only")]
    OneUpsOnly,
}

/// Inclusive range of each numeric option.
pub const RANGES: [(&str, u32, u32); 8] = [
    ("AmountOfStars", 35, 120),
    ("FirstBowserStarDoorCost", 0, 20),
    ("BasementStarDoorCost", 0, 70),
    ("SecondFloorStarDoorCost", 0, 90),
    ("MIPS1Cost", 0, 40),
    ("MIPS2Cost", 0, 80),
    ("StarsToFinish", 0, 100),
    ("ExclamationBoxes", 0, 1),
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Sm64Options {
    #[serde(rename = "AreaRandomizer")]
    pub area_randomizer: bool,
    #[serde(rename = "ProgressiveKeys")]
    pub progressive_keys: bool,
    #[serde(rename = "EnableCoinStars")]
    pub enable_coin_stars: bool,
    #[serde(rename = "AmountOfStars")]
    pub amount_of_stars: u32,
    #[serde(rename = "StrictCapRequirements")]
    pub strict_cap_requirements: bool,
    #[serde(rename = "StrictCannonRequirements")]
    pub strict_cannon_requirements: bool,
    #[serde(rename = "FirstBowserStarDoorCost")]
    pub first_bowser_star_door_cost: u32,
    #[serde(rename = "BasementStarDoorCost")]
    pub basement_star_door_cost: u32,
    #[serde(rename = "SecondFloorStarDoorCost")]
    pub second_floor_star_door_cost: u32,
    #[serde(rename = "MIPS1Cost")]
    pub mips1_cost: u32,
    #[serde(rename = "MIPS2Cost")]
    pub mips2_cost: u32,
    #[serde(rename = "StarsToFinish")]
    pub stars_to_finish: u32,
    #[serde(rename = "BuddyChecks")]
    pub buddy_checks: bool,
    #[serde(rename = "ExclamationBoxes")]
    pub exclamation_boxes: ExclamationBoxes,
    pub death_link: bool,
}

impl Default for Sm64Options {
    fn default() -> Self {
        Self {
            area_randomizer: false,
            progressive_keys: true,
            enable_coin_stars: true,
            amount_of_stars: 120,
            strict_cap_requirements: true,
            strict_cannon_requirements: true,
            first_bowser_star_door_cost: 8,
            basement_star_door_cost: 30,
            second_floor_star_door_cost: 50,
            mips1_cost: 15,
            mips2_cost: 50,
            stars_to_finish: 70,
            buddy_checks: false,
            exclamation_boxes: ExclamationBoxes::Off,
            death_link: false,
        }
    }
}

impl Sm64Options {
    /// Parse and validate options from JSON.
    pub fn from_json(player: PlayerId, json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)
            .map_err(|e| GenerationError::invalid_option(player, "options", e.to_string()))?;
        options.validate(player)?;
        Ok(options)
    }

    /// Build options from `(name, value)` pairs, the way option values
    /// arrive from a settings file. Toggles are 0 or 1.
    pub fn from_pairs<'a>(
        player: PlayerId,
        pairs: impl IntoIterator<Item = (&'a str, i64)>,
    ) -> Result<Self> {
        let mut options = Self::default();
        for (name, value) in pairs {
            options.set(player, name, value)?;
        }
        options.validate(player)?;
        Ok(options)
    }

    fn set(&mut self, player: PlayerId, name: &str, value: i64) -> Result<()> {
        let toggle = |value: i64| match value {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(GenerationError::invalid_option(
                player,
                name,
                format!("{value} is not 0 or 1"),
            )),
        };
        let number = |value: i64| {
            u32::try_from(value).map_err(|_| {
                GenerationError::invalid_option(player, name, format!("{value} is negative or too large"))
            })
        };

        match name {
            "AreaRandomizer" => self.area_randomizer = toggle(value)?,
            "ProgressiveKeys" => self.progressive_keys = toggle(value)?,
            "EnableCoinStars" => self.enable_coin_stars = toggle(value)?,
            "AmountOfStars" => self.amount_of_stars = number(value)?,
            "StrictCapRequirements" => self.strict_cap_requirements = toggle(value)?,
            "StrictCannonRequirements" => self.strict_cannon_requirements = toggle(value)?,
            "FirstBowserStarDoorCost" => self.first_bowser_star_door_cost = number(value)?,
            "BasementStarDoorCost" => self.basement_star_door_cost = number(value)?,
            "SecondFloorStarDoorCost" => self.second_floor_star_door_cost = number(value)?,
            "MIPS1Cost" => self.mips1_cost = number(value)?,
            "MIPS2Cost" => self.mips2_cost = number(value)?,
            "StarsToFinish" => self.stars_to_finish = number(value)?,
            "BuddyChecks" => self.buddy_checks = toggle(value)?,
            "ExclamationBoxes" => {
                self.exclamation_boxes = if toggle(value)? {
                    ExclamationBoxes::OneUpsOnly
                } else {
                    ExclamationBoxes::Off
                }
            }
            "death_link" => self.death_link = toggle(value)?,
            _ => return Err(GenerationError::invalid_option(player, name, "unknown option")),
        }
        Ok(())
    }

    fn value_of(&self, name: &str) -> u32 {
        match name {
            "AmountOfStars" => self.amount_of_stars,
            "FirstBowserStarDoorCost" => self.first_bowser_star_door_cost,
            "BasementStarDoorCost" => self.basement_star_door_cost,
            "SecondFloorStarDoorCost" => self.second_floor_star_door_cost,
            "MIPS1Cost" => self.mips1_cost,
            "MIPS2Cost" => self.mips2_cost,
            "StarsToFinish" => self.stars_to_finish,
            "ExclamationBoxes" => u32::from(self.exclamation_boxes == ExclamationBoxes::OneUpsOnly),
            _ => 0,
        }
    }

    /// Check every numeric option against its range.
    pub fn validate(&self, player: PlayerId) -> Result<()> {
        for (name, min, max) in RANGES {
            let value = self.value_of(name);
            if !(min..=max).contains(&value) {
                return Err(GenerationError::invalid_option(
                    player,
                    name,
                    format!("{value} is outside {min}..={max}"),
                ));
            }
        }
        Ok(())
    }

    /// Highest star count any door, MIPS or the goal asks for.
    #[must_use]
    pub fn highest_star_cost(&self) -> u32 {
        [
            self.first_bowser_star_door_cost,
            self.basement_star_door_cost,
            self.second_floor_star_door_cost,
            self.mips1_cost,
            self.mips2_cost,
            self.stars_to_finish,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }

    /// Swap the MIPS costs if the first is the larger one.
    pub fn order_mips_costs(&mut self) {
        if self.mips1_cost > self.mips2_cost {
            std::mem::swap(&mut self.mips1_cost, &mut self.mips2_cost);
        }
    }

    // === Builders ===

    #[must_use]
    pub fn with_area_randomizer(mut self, on: bool) -> Self {
        self.area_randomizer = on;
        self
    }

    #[must_use]
    pub fn with_progressive_keys(mut self, on: bool) -> Self {
        self.progressive_keys = on;
        self
    }

    #[must_use]
    pub fn with_coin_stars(mut self, on: bool) -> Self {
        self.enable_coin_stars = on;
        self
    }

    #[must_use]
    pub fn with_amount_of_stars(mut self, stars: u32) -> Self {
        self.amount_of_stars = stars;
        self
    }

    #[must_use]
    pub fn with_strict_caps(mut self, on: bool) -> Self {
        self.strict_cap_requirements = on;
        self
    }

    #[must_use]
    pub fn with_strict_cannons(mut self, on: bool) -> Self {
        self.strict_cannon_requirements = on;
        self
    }

    /// Set the three star door costs: first Bowser, basement, second floor.
    #[must_use]
    pub fn with_door_costs(mut self, first_bowser: u32, basement: u32, second_floor: u32) -> Self {
        self.first_bowser_star_door_cost = first_bowser;
        self.basement_star_door_cost = basement;
        self.second_floor_star_door_cost = second_floor;
        self
    }

    #[must_use]
    pub fn with_mips_costs(mut self, mips1: u32, mips2: u32) -> Self {
        self.mips1_cost = mips1;
        self.mips2_cost = mips2;
        self
    }

    #[must_use]
    pub fn with_stars_to_finish(mut self, stars: u32) -> Self {
        self.stars_to_finish = stars;
        self
    }

    #[must_use]
    pub fn with_buddy_checks(mut self, on: bool) -> Self {
        self.buddy_checks = on;
        self
    }

    #[must_use]
    pub fn with_exclamation_boxes(mut self, boxes: ExclamationBoxes) -> Self {
        self.exclamation_boxes = boxes;
        self
    }

    #[must_use]
    pub fn with_death_link(mut self, on: bool) -> Self {
        self.death_link = on;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    fn player() -> PlayerId {
        PlayerId::new(0)
    }

    #[test]
    fn test_defaults_are_valid() {
        let options = Sm64Options::default();
        assert!(options.validate(player()).is_ok());
        assert_eq!(options.highest_star_cost(), 70);
    }

    #[test]
    fn test_from_json_uses_option_names() {
        let json = r#"{"AmountOfStars": 50, "EnableCoinStars": false, "ExclamationBoxes": "1ups_only"}"#;
        let options = Sm64Options::from_json(player(), json).unwrap();
        assert_eq!(options.amount_of_stars, 50);
        assert!(!options.enable_coin_stars);
        assert_eq!(options.exclamation_boxes, ExclamationBoxes::OneUpsOnly);
        assert!(options.progressive_keys);
    }

    #[test]
    fn test_unknown_field_is_configuration_error() {
        let err = Sm64Options::from_json(player(), r#"{"AmountOfStar": 50}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_out_of_range() {
        let err = Sm64Options::from_pairs(player(), [("MIPS2Cost", 81)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("MIPS2Cost"));

        let err = Sm64Options::from_pairs(player(), [("AmountOfStars", 20)]).unwrap_err();
        assert!(err.to_string().contains("35..=120"));
    }

    #[test]
    fn test_from_pairs() {
        let options = Sm64Options::from_pairs(
            player(),
            [("BuddyChecks", 1), ("ExclamationBoxes", 1), ("death_link", 1)],
        )
        .unwrap();
        assert!(options.buddy_checks);
        assert!(options.death_link);
        assert_eq!(options.exclamation_boxes, ExclamationBoxes::OneUpsOnly);

        assert!(Sm64Options::from_pairs(player(), [("BuddyChecks", 2)]).is_err());
        assert!(Sm64Options::from_pairs(player(), [("StarsToFinish", -1)]).is_err());
        assert!(Sm64Options::from_pairs(player(), [("Goal", 1)]).is_err());
    }

    #[test]
    fn test_order_mips_costs() {
        let mut options = Sm64Options::default().with_mips_costs(40, 10);
        options.order_mips_costs();
        assert_eq!((options.mips1_cost, options.mips2_cost), (10, 40));
    }
}
