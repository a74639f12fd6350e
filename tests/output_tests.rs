//! Output artifacts: the single-player file, multidata and hint data.

use rust_rando::core::{ErrorKind, PlayerId};
use rust_rando::games::sm64::{Sm64Options, Sm64World, GAME};
use rust_rando::graph::{LocationId, MultiWorld};
use rust_rando::world::{Generator, MultiData, OutputFile, World};

fn generator(names: &[&str], options: Sm64Options, seed: u64) -> Generator {
    let world = MultiWorld::new(names.iter().map(|n| n.to_string()).collect(), seed);
    let worlds: Vec<Box<dyn World>> = (0..names.len())
        .map(|i| Box::new(Sm64World::new(PlayerId::new(i as u8), options.clone())) as Box<dyn World>)
        .collect();
    let mut generator = Generator::new(world, worlds).unwrap();
    generator.prepare().unwrap();
    generator
}

/// Place the pool into open locations in declaration order, ignoring logic.
fn fill_in_order(generator: &mut Generator) {
    let world = generator.multiworld_mut();
    let pool = std::mem::take(&mut world.itempool);
    let open: Vec<LocationId> = world
        .locations()
        .iter()
        .filter(|l| l.is_open())
        .map(|l| l.id)
        .collect();
    assert_eq!(open.len(), pool.len());
    for (location, item) in open.into_iter().zip(pool) {
        world.place_item(location, item).unwrap();
    }
}

#[test]
fn test_single_player_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut generator = generator(&["Ma/rio?"], Sm64Options::default().with_death_link(true), 42);
    fill_in_order(&mut generator);
    let multidata = generator.finalize(dir.path()).unwrap();

    let path = dir.path().join("AP_00000000000000000042_P1_Mario.apsm64ex");
    assert!(path.exists());

    let file = OutputFile::read_from(&path).unwrap();
    assert_eq!(file.location_to_item.len(), 164);
    assert_eq!(file.slot_data["DeathLink"], true);
    assert_eq!(file.slot_data["StarsToFinish"], 70);
    assert_eq!(file.slot_data["AreaRando"]["91"], 91);

    let game = &file.data_package.data.games[GAME];
    assert_eq!(game.item_name_to_id["Power Star"], 3626000);
    assert_eq!(game.location_name_to_id["MIPS 2"], 3626172);
    assert_eq!(game.version, 7);

    // Locked 1Ups show up in the file too.
    assert_eq!(file.location_to_item[&3626215], 3626184);

    assert_eq!(multidata.games[&1], GAME);
    assert_eq!(multidata.locations[&1].len(), 164);
    assert!(multidata.er_hint_data.is_empty());
}

#[test]
fn test_multiplayer_writes_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut generator = generator(&["Mario", "Luigi"], Sm64Options::default(), 7);
    fill_in_order(&mut generator);
    let multidata = generator.finalize(dir.path()).unwrap();

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    assert_eq!(multidata.games.len(), 2);
    assert_eq!(multidata.slot_data.len(), 2);

    let slot_data: serde_json::Value = serde_json::from_str(&multidata.slot_data[&2]).unwrap();
    assert_eq!(slot_data["BasementDoorCost"], 30);
}

#[test]
fn test_unfilled_location_blocks_finalize() {
    let dir = tempfile::tempdir().unwrap();
    let mut generator = generator(&["Mario"], Sm64Options::default(), 1);
    let err = generator.finalize(dir.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Placement);
}

#[test]
fn test_hint_data_under_area_randomizer() {
    let dir = tempfile::tempdir().unwrap();
    let mut generator = generator(&["Mario"], Sm64Options::default().with_area_randomizer(true), 11);
    fill_in_order(&mut generator);
    let multidata = generator.finalize(dir.path()).unwrap();

    let hints = &multidata.er_hint_data[&1];
    let world = generator.multiworld();
    let player = PlayerId::new(0);
    for entrance in world.entrances_for(player).filter(|e| e.name.ends_with(" Entrance")) {
        let region = world.region(entrance.connected_region.unwrap());
        for &location in &region.locations {
            let address = world.location(location).address.unwrap();
            assert_eq!(hints[&address], entrance.name);
        }
    }
    // Castle locations are not behind a painting.
    assert!(!hints.contains_key(&3626171));

    let bytes = multidata.to_bytes().unwrap();
    assert_eq!(MultiData::from_bytes(&bytes).unwrap(), multidata);
}
