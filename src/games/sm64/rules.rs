//! Access rules and the completion condition.

use super::items::{
    BASEMENT_KEY, METAL_CAP, POWER_STAR, PROGRESSIVE_KEY, SECOND_FLOOR_KEY, VANISH_CAP, WING_CAP,
};
use super::options::Sm64Options;
use super::regions::{
    connection_name, BASEMENT, BITDW, BITFS, BITS, MENU, PSS, SA, SECOND_FLOOR, THIRD_FLOOR, TOTWC,
};
use crate::core::{PlayerId, Result};
use crate::graph::MultiWorld;
use crate::logic::Rule;

/// Stars needed to enter each painting, by course name. Paintings keep
/// their requirement when area randomization moves their destination.
fn painting_costs(options: &Sm64Options) -> [(&'static str, u32); 5] {
    [
        ("Whomp's Fortress", 1),
        ("Jolly Roger Bay", 3),
        ("Cool, Cool Mountain", 3),
        ("Big Boo's Haunt", 12),
        ("Dire, Dire Docks", options.basement_star_door_cost),
    ]
}

/// Toad star locations with the star count each needs.
const TOADS: [(&str, &str, u32); 3] = [
    ("Toad (Basement)", BASEMENT, 12),
    ("Toad (Second Floor)", SECOND_FLOOR, 25),
    ("Toad (Third Floor)", THIRD_FLOOR, 35),
];

/// Builds rules for one player.
struct RuleSet<'a> {
    world: &'a mut MultiWorld,
    player: PlayerId,
}

impl RuleSet<'_> {
    fn stars(&self, count: u32) -> Rule {
        Rule::has_count(POWER_STAR, self.player, count)
    }

    fn has(&self, item: &str) -> Rule {
        Rule::has(item, self.player)
    }

    fn location(&mut self, name: &str, rule: Rule) -> Result<()> {
        self.world.add_location_rule(name, self.player, rule)
    }

    fn entrance(&mut self, name: &str, rule: Rule) -> Result<()> {
        self.world.add_entrance_rule(name, self.player, rule)
    }

    fn connection(&mut self, from: &str, to: &str, rule: Rule) -> Result<()> {
        self.entrance(&connection_name(from, to), rule)
    }
}

/// Attach every rule of one player's world.
pub fn set_rules(world: &mut MultiWorld, player: PlayerId, options: &Sm64Options) -> Result<()> {
    let mut rules = RuleSet { world, player };

    for (course, cost) in painting_costs(options) {
        let rule = rules.stars(cost);
        rules.entrance(&format!("{course} Entrance"), rule)?;
    }

    // Key doors
    let basement = rules
        .has(BASEMENT_KEY)
        .or(Rule::has_count(PROGRESSIVE_KEY, player, 1));
    rules.connection(MENU, BASEMENT, basement)?;
    let upstairs = rules
        .has(SECOND_FLOOR_KEY)
        .or(Rule::has_count(PROGRESSIVE_KEY, player, 2));
    rules.connection(MENU, SECOND_FLOOR, upstairs)?;

    // Star doors
    let third = rules.stars(options.second_floor_star_door_cost);
    rules.connection(SECOND_FLOOR, THIRD_FLOOR, third)?;
    let slide = rules.stars(1);
    rules.connection(MENU, PSS, slide)?;
    let aquarium = rules.stars(3);
    rules.connection(MENU, SA, aquarium)?;
    let tower = rules.stars(10);
    rules.connection(MENU, TOTWC, tower)?;
    let dark_world = rules.stars(options.first_bowser_star_door_cost);
    rules.connection(MENU, BITDW, dark_world)?;
    let fire_sea = rules
        .stars(options.basement_star_door_cost)
        .and(Rule::can_reach_location("DDD: Board Bowser's Sub", player));
    rules.connection(BASEMENT, BITFS, fire_sea)?;
    let sky = rules.stars(options.stars_to_finish);
    rules.connection(THIRD_FLOOR, BITS, sky)?;

    // Course stars
    let cannon = rules.has("Cannon Unlock BoB");
    rules.location("BoB: Mario Wings to the Sky", cannon)?;
    for name in [
        "BBH: Eye to Eye in the Secret Room",
        "DDD: Collect the Caps...",
        "SL: Into the Igloo",
        "WDW: Quick Race Through Downtown!",
    ] {
        let rule = rules.has(VANISH_CAP);
        rules.location(name, rule)?;
    }
    let sub_moved = Rule::can_reach_region(BITFS, player);
    rules.location("DDD: Pole-Jumping for Red Coins", sub_moved.clone())?;
    if options.enable_coin_stars {
        rules.location("DDD: 100 Coins", sub_moved)?;
    }
    let rainbow = rules.has("Cannon Unlock RR");
    rules.location("RR: Somewhere Over the Rainbow", rainbow)?;

    // Without the water level switch, downtown WDW needs the cannon.
    if options.area_randomizer || options.strict_cannon_requirements {
        for name in [
            "WDW: Quick Race Through Downtown!",
            "WDW: Go to Town for Red Coins",
            "WDW: 1Up Block in Downtown",
        ] {
            let rule = rules.has("Cannon Unlock WDW");
            rules.location(name, rule)?;
        }
    }

    if options.strict_cap_requirements {
        for (name, cap) in [
            ("BoB: Mario Wings to the Sky", WING_CAP),
            ("HMC: Metal-Head Mario Can Move!", METAL_CAP),
            ("JRB: Through the Jet Stream", METAL_CAP),
            ("SSL: Free Flying for 8 Red Coins", WING_CAP),
            ("DDD: Through the Jet Stream", METAL_CAP),
            ("DDD: Collect the Caps...", METAL_CAP),
            ("Vanish Cap Under the Moat Red Coins", VANISH_CAP),
            ("Cavern of the Metal Cap Red Coins", METAL_CAP),
        ] {
            let rule = rules.has(cap);
            rules.location(name, rule)?;
        }
    }

    if options.strict_cannon_requirements {
        for (name, cannon) in [
            ("WF: Blast Away the Wall", "Cannon Unlock WF"),
            ("JRB: Blast to the Stone Pillar", "Cannon Unlock JRB"),
            ("CCM: Wall Kicks Will Work", "Cannon Unlock CCM"),
            ("TTM: Blast to the Lonely Mushroom", "Cannon Unlock TTM"),
        ] {
            let rule = rules.has(cannon);
            rules.location(name, rule)?;
        }
    }

    if options.strict_cap_requirements && options.strict_cannon_requirements {
        // The floating island
        let mut island = vec!["BoB: Find the 8 Red Coins", "BoB: Shoot to the Island in the Sky"];
        if options.enable_coin_stars {
            island.push("BoB: 100 Coins");
        }
        for name in island {
            let rule = rules.has("Cannon Unlock BoB").or(rules.has(WING_CAP));
            rules.location(name, rule)?;
        }
    }

    // Secret stars
    for name in [
        "Wing Mario Over the Rainbow Red Coins",
        "Wing Mario Over the Rainbow 1Up Block",
    ] {
        let rule = rules.has(WING_CAP);
        rules.location(name, rule)?;
    }
    for (name, floor, count) in TOADS {
        let rule = Rule::can_reach_region(floor, player).and(rules.stars(count));
        rules.location(name, rule)?;
    }
    for (name, cost) in [("MIPS 1", options.mips1_cost), ("MIPS 2", options.mips2_cost)] {
        let rule = Rule::can_reach_region(BASEMENT, player).and(rules.stars(cost));
        rules.location(name, rule)?;
    }

    let completion = Rule::can_reach_region(THIRD_FLOOR, player)
        .and(Rule::has_count(POWER_STAR, player, options.stars_to_finish));
    rules.world.set_completion_condition(player, completion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::sm64::items::ITEM_TABLE;
    use crate::games::sm64::regions::{canonical_table, create_regions};

    fn build(options: &Sm64Options) -> MultiWorld {
        let player = PlayerId::new(0);
        let mut world = MultiWorld::new(vec!["Mario".into()], 1);
        world
            .register_game(player, "Super Mario 64", ITEM_TABLE.iter().map(|(n, _)| *n))
            .unwrap();
        create_regions(&mut world, player, options).unwrap();
        world.link_entrances(player, &canonical_table()).unwrap();
        set_rules(&mut world, player, options).unwrap();
        world
    }

    #[test]
    fn test_key_door_accepts_either_key() {
        let player = PlayerId::new(0);
        let world = build(&Sm64Options::default());
        let rule = &world.get_entrance("Menu -> Basement", player).unwrap().access_rule;
        assert_eq!(
            *rule,
            Rule::any([
                Rule::has(BASEMENT_KEY, player),
                Rule::has_count(PROGRESSIVE_KEY, player, 1),
            ])
        );
    }

    #[test]
    fn test_coin_star_rules_skipped_without_coin_stars() {
        let options = Sm64Options::default().with_coin_stars(false);
        let world = build(&options);
        assert!(world.get_location("DDD: 100 Coins", PlayerId::new(0)).is_err());
    }

    #[test]
    fn test_lenient_caps_leave_wing_cap_out() {
        let player = PlayerId::new(0);
        let options = Sm64Options::default()
            .with_strict_caps(false)
            .with_strict_cannons(false);
        let world = build(&options);
        let rule = &world
            .get_location("SSL: Free Flying for 8 Red Coins", player)
            .unwrap()
            .access_rule;
        assert_eq!(*rule, Rule::Always);
    }

    #[test]
    fn test_completion_condition() {
        let player = PlayerId::new(0);
        let world = build(&Sm64Options::default());
        assert_eq!(
            *world.completion_condition(player),
            Rule::all([
                Rule::can_reach_region(THIRD_FLOOR, player),
                Rule::has_count(POWER_STAR, player, 70),
            ])
        );
    }
}
