//! Region template: castle floors, courses and secret areas.
//!
//! Courses are entered through paintings. Each painting is an exit named
//! `"<course> Entrance"` on the floor that hosts it; linking decides which
//! course it leads to. Every other exit is fixed and named `"<from> -> <to>"`.

use std::collections::BTreeMap;

use tracing::debug;

use super::locations::LOCATION_TABLE;
use super::options::Sm64Options;
use crate::core::{GenerationError, PlayerId, Result, SeedRng};
use crate::graph::{EntranceTable, LinkMode, MultiWorld, RegionId};

pub const MENU: &str = "Menu";
pub const BASEMENT: &str = "Basement";
pub const SECOND_FLOOR: &str = "Second Floor";
pub const THIRD_FLOOR: &str = "Third Floor";

pub const PSS: &str = "The Princess's Secret Slide";
pub const SA: &str = "The Secret Aquarium";
pub const TOTWC: &str = "Tower of the Wing Cap";
pub const BITDW: &str = "Bowser in the Dark World";
pub const VCUTM: &str = "Vanish Cap Under the Moat";
pub const BITFS: &str = "Bowser in the Fire Sea";
pub const COTMC: &str = "Cavern of the Metal Cap";
pub const WMOTR: &str = "Wing Mario Over the Rainbow";
pub const BITS: &str = "Bowser in the Sky";

/// A painting course.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Course {
    /// Internal level code the client uses for area connections.
    pub code: u16,
    pub name: &'static str,
    /// Location name prefix, e.g. `"BoB"`.
    pub abbrev: &'static str,
    /// Floor region whose painting leads here in the unrandomized game.
    pub floor: &'static str,
}

impl Course {
    const fn new(code: u16, name: &'static str, abbrev: &'static str, floor: &'static str) -> Self {
        Self {
            code,
            name,
            abbrev,
            floor,
        }
    }

    /// Name of the painting exit for this course.
    #[must_use]
    pub fn entrance_name(&self) -> String {
        format!("{} Entrance", self.name)
    }

    fn owns(&self, location: &str) -> bool {
        location
            .strip_prefix(self.abbrev)
            .is_some_and(|rest| rest.starts_with(": "))
    }
}

pub const COURSES: [Course; 15] = [
    Course::new(91, "Bob-omb Battlefield", "BoB", MENU),
    Course::new(241, "Whomp's Fortress", "WF", MENU),
    Course::new(121, "Jolly Roger Bay", "JRB", MENU),
    Course::new(51, "Cool, Cool Mountain", "CCM", MENU),
    Course::new(41, "Big Boo's Haunt", "BBH", MENU),
    Course::new(71, "Hazy Maze Cave", "HMC", BASEMENT),
    Course::new(221, "Lethal Lava Land", "LLL", BASEMENT),
    Course::new(81, "Shifting Sand Land", "SSL", BASEMENT),
    Course::new(231, "Dire, Dire Docks", "DDD", BASEMENT),
    Course::new(101, "Snowman's Land", "SL", SECOND_FLOOR),
    Course::new(111, "Wet-Dry World", "WDW", SECOND_FLOOR),
    Course::new(361, "Tall, Tall Mountain", "TTM", SECOND_FLOOR),
    Course::new(131, "Tiny-Huge Island", "THI", SECOND_FLOOR),
    Course::new(141, "Tick Tock Clock", "TTC", THIRD_FLOOR),
    Course::new(151, "Rainbow Ride", "RR", THIRD_FLOOR),
];

/// Secret areas and the region they are entered from.
///
/// Every location of a secret area starts with the area's name.
pub const SECRET_AREAS: [(&str, &str); 9] = [
    (PSS, MENU),
    (SA, MENU),
    (TOTWC, MENU),
    (BITDW, MENU),
    (VCUTM, BASEMENT),
    (BITFS, BASEMENT),
    (COTMC, "Hazy Maze Cave"),
    (WMOTR, THIRD_FLOOR),
    (BITS, THIRD_FLOOR),
];

/// Fixed connections between castle floors.
pub const FLOOR_CONNECTIONS: [(&str, &str); 3] = [
    (MENU, BASEMENT),
    (MENU, SECOND_FLOOR),
    (SECOND_FLOOR, THIRD_FLOOR),
];

/// Locations inside the castle itself. They sit in `Menu` and their rules
/// name the floor they are on.
pub const CASTLE_LOCATIONS: [(&str, &str); 5] = [
    ("Toad (Basement)", BASEMENT),
    ("Toad (Second Floor)", SECOND_FLOOR),
    ("Toad (Third Floor)", THIRD_FLOOR),
    ("MIPS 1", BASEMENT),
    ("MIPS 2", BASEMENT),
];

/// Name of a fixed exit.
#[must_use]
pub fn connection_name(from: &str, to: &str) -> String {
    format!("{from} -> {to}")
}

/// Course with the given internal level code.
#[must_use]
pub fn course_by_code(code: u16) -> Option<&'static Course> {
    COURSES.iter().find(|c| c.code == code)
}

#[must_use]
pub fn course_by_name(name: &str) -> Option<&'static Course> {
    COURSES.iter().find(|c| c.name == name)
}

/// Region a location belongs to.
#[must_use]
pub fn region_of(location: &str) -> Option<&'static str> {
    if let Some(course) = COURSES.iter().find(|c| c.owns(location)) {
        return Some(course.name);
    }
    if CASTLE_LOCATIONS.iter().any(|(name, _)| *name == location) {
        return Some(MENU);
    }
    SECRET_AREAS
        .iter()
        .map(|(area, _)| *area)
        .find(|area| location.starts_with(area))
}

fn is_coin_star(location: &str) -> bool {
    location.ends_with(": 100 Coins")
}

/// Declare every region, location and exit of one player.
pub fn create_regions(world: &mut MultiWorld, player: PlayerId, options: &Sm64Options) -> Result<()> {
    let mut ids: BTreeMap<&'static str, RegionId> = BTreeMap::new();
    for name in [MENU, BASEMENT, SECOND_FLOOR, THIRD_FLOOR] {
        ids.insert(name, world.create_region(player, name)?);
    }
    for course in &COURSES {
        ids.insert(course.name, world.create_region(player, course.name)?);
    }
    for (area, _) in SECRET_AREAS {
        ids.insert(area, world.create_region(player, area)?);
    }
    world.set_origin(player, MENU)?;

    let mut created = 0usize;
    for (name, address) in LOCATION_TABLE {
        if is_coin_star(name) && !options.enable_coin_stars {
            continue;
        }
        let region = region_of(name)
            .and_then(|r| ids.get(r).copied())
            .ok_or_else(|| GenerationError::RegionNotFound {
                name: format!("region of '{name}'"),
                player,
            })?;
        world.create_location(region, name, Some(*address))?;
        created += 1;
    }

    for (from, to) in FLOOR_CONNECTIONS {
        world.create_exit(ids[from], &connection_name(from, to))?;
    }
    for course in &COURSES {
        world.create_exit(ids[course.floor], &course.entrance_name())?;
    }
    for (area, from) in SECRET_AREAS {
        world.create_exit(ids[from], &connection_name(from, area))?;
    }

    debug!(%player, regions = ids.len(), locations = created, "created regions");
    Ok(())
}

/// Table linking every painting to its own course and every fixed exit to
/// its target.
#[must_use]
pub fn canonical_table() -> EntranceTable {
    let floors = FLOOR_CONNECTIONS.iter().map(|&(from, to)| (from, to));
    let secrets = SECRET_AREAS.iter().map(|&(area, from)| (from, area));
    let fixed = floors
        .chain(secrets)
        .map(|(from, to)| (connection_name(from, to), to.to_string()));
    let paintings = COURSES.iter().map(|c| (c.entrance_name(), c.name.to_string()));
    EntranceTable::new(LinkMode::Canonical, fixed.chain(paintings))
}

/// The canonical table with painting targets permuted by `rng`.
#[must_use]
pub fn shuffled_table(rng: &mut SeedRng) -> EntranceTable {
    let paintings: Vec<String> = COURSES.iter().map(Course::entrance_name).collect();
    let names: Vec<&str> = paintings.iter().map(String::as_str).collect();
    canonical_table().shuffle_targets(&names, rng)
}

/// Painting entrance code → destination course code, read from the linked
/// graph.
pub fn area_connections(world: &MultiWorld, player: PlayerId) -> Result<BTreeMap<u16, u16>> {
    let mut connections = BTreeMap::new();
    for course in &COURSES {
        let entrance = world.get_entrance(&course.entrance_name(), player)?;
        let Some(target) = entrance.connected_region else {
            return Err(GenerationError::UnlinkedEntrance {
                entrance: entrance.name.clone(),
                player,
            });
        };
        let destination = &world.region(target).name;
        let dest = course_by_name(destination).ok_or_else(|| {
            GenerationError::RegionNotFound {
                name: destination.clone(),
                player,
            }
        })?;
        connections.insert(course.code, dest.code);
    }
    Ok(connections)
}
