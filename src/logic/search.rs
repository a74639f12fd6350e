//! Reachability search over the region graph.
//!
//! This is the query side only: it answers what a given collection can
//! reach and what a finished placement lets a player pick up. Choosing
//! where items go is the fill's job and lives outside this crate.

use tracing::debug;

use super::rule::RuleContext;
use super::state::CollectionState;
use crate::graph::{LocationId, MultiWorld, RegionId};

/// Grow the state's reachable regions and locations to a fixpoint.
///
/// Starts from every player's origin region. An entrance is crossed when
/// its source is reachable and its rule holds; a location is reachable when
/// its region is and its rule holds. Rules that ask about reachability see
/// the result of the previous round, so the loop repeats until a round adds
/// nothing. Every rule is monotone, so this terminates.
pub fn update_reachable(state: &mut CollectionState, world: &MultiWorld) {
    state.reset_if_needed();
    for player in world.player_ids() {
        if let Some(origin) = world.origin(player) {
            state.insert_region(origin);
        }
    }

    loop {
        let regions: Vec<RegionId> = {
            let ctx = RuleContext::new(world, state);
            world
                .entrances()
                .iter()
                .filter(|e| state.can_reach_region(e.parent_region))
                .filter_map(|e| {
                    let target = e.connected_region?;
                    let open = !state.can_reach_region(target) && e.access_rule.evaluate(&ctx);
                    open.then_some(target)
                })
                .collect()
        };

        let locations: Vec<LocationId> = {
            let ctx = RuleContext::new(world, state);
            world
                .locations()
                .iter()
                .filter(|l| !state.can_reach_location(l.id) && state.can_reach_region(l.region))
                .filter(|l| l.access_rule.evaluate(&ctx))
                .map(|l| l.id)
                .collect()
        };

        let mut changed = false;
        for region in regions {
            changed |= state.insert_region(region);
        }
        for location in locations {
            changed |= state.insert_location(location);
        }
        if !changed {
            break;
        }
    }
}

/// Collect every item at reachable, filled locations until nothing new
/// turns up. Returns how many locations were picked up.
pub fn sweep(state: &mut CollectionState, world: &MultiWorld) -> usize {
    let mut picked = 0;
    loop {
        update_reachable(state, world);
        let pickups: Vec<LocationId> = world
            .locations()
            .iter()
            .filter(|l| l.item.is_some() && !state.is_collected(l.id))
            .filter(|l| state.can_reach_location(l.id))
            .map(|l| l.id)
            .collect();

        if pickups.is_empty() {
            break;
        }
        for id in pickups {
            state.mark_collected(id);
            if let Some(item) = &world.location(id).item {
                state.collect(item);
            }
            picked += 1;
        }
    }
    debug!(picked, "sweep finished");
    picked
}

/// Whether every player's completion condition holds after sweeping from
/// `state`.
#[must_use]
pub fn can_beat_game(state: &CollectionState, world: &MultiWorld) -> bool {
    let mut state = state.clone();
    sweep(&mut state, world);
    let ctx = RuleContext::new(world, &state);
    world
        .player_ids()
        .all(|p| world.completion_condition(p).evaluate(&ctx))
}

/// Locations still unreachable after sweeping from the precollected state.
#[must_use]
pub fn unreachable_locations(world: &MultiWorld) -> Vec<LocationId> {
    let mut state = CollectionState::new(world);
    sweep(&mut state, world);
    world
        .locations()
        .iter()
        .filter(|l| !state.can_reach_location(l.id))
        .map(|l| l.id)
        .collect()
}
