//! Item pool composition.
//!
//! `plan_pool` is a pure function of the options: it decides how many Power
//! Stars exist, what else goes into the pool, and which locations get a
//! fixed item instead. Placing the pool is the fill's job.

use tracing::warn;

use super::items::{
    BASEMENT_KEY, CANNON_UNLOCKS, METAL_CAP, ONE_UP_MUSHROOM, POWER_STAR, PROGRESSIVE_KEY,
    SECOND_FLOOR_KEY, VANISH_CAP, WING_CAP,
};
use super::locations::{star_locations, ONE_UP_BLOCKS};
use super::options::{ExclamationBoxes, Sm64Options};

/// Stars that always exist when coin stars are off.
const MIN_STARS_WITHOUT_COINS: u32 = 35;

/// Coin stars removed from the pool when coin stars are off.
const COIN_STARS: u32 = 15;

/// The pool of one player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolPlan {
    /// Power Stars in the pool.
    pub star_count: u32,
    /// Item names for the fill, in insertion order.
    pub items: Vec<&'static str>,
    /// `(location, item)` pairs placed directly.
    pub locked: Vec<(&'static str, &'static str)>,
}

impl PoolPlan {
    /// Number of times `item` appears in the pool.
    #[must_use]
    pub fn count(&self, item: &str) -> usize {
        self.items.iter().filter(|i| **i == item).count()
    }
}

/// Number of Power Stars for these options.
///
/// Without coin stars the requested amount drops by the 15 coin stars, but
/// never below 35. The result is then raised to the highest cost any door or
/// the goal asks for and capped at the number of star locations.
#[must_use]
pub fn star_count(options: &Sm64Options) -> u32 {
    let requested = if options.enable_coin_stars {
        options.amount_of_stars
    } else {
        MIN_STARS_WITHOUT_COINS.max(options.amount_of_stars.saturating_sub(COIN_STARS))
    };
    let needed = requested.max(options.highest_star_cost());
    let slots = star_locations(options.enable_coin_stars);
    if needed > slots {
        warn!(needed, slots, "star count exceeds star locations, clamping");
    }
    needed.min(slots)
}

/// Build the pool for one player.
#[must_use]
pub fn plan_pool(options: &Sm64Options) -> PoolPlan {
    let stars = star_count(options);
    let slots = star_locations(options.enable_coin_stars);

    let mut items: Vec<&'static str> = Vec::new();
    let mut locked = Vec::new();

    items.extend(std::iter::repeat(POWER_STAR).take(stars as usize));
    items.extend(std::iter::repeat(ONE_UP_MUSHROOM).take((slots - stars) as usize));

    if options.progressive_keys {
        items.extend([PROGRESSIVE_KEY, PROGRESSIVE_KEY]);
    } else {
        items.extend([BASEMENT_KEY, SECOND_FLOOR_KEY]);
    }
    items.extend([WING_CAP, METAL_CAP, VANISH_CAP]);

    if options.buddy_checks {
        items.extend(CANNON_UNLOCKS.iter().map(|(item, _)| *item));
    } else {
        locked.extend(CANNON_UNLOCKS.iter().map(|(item, buddy)| (*buddy, *item)));
    }

    match options.exclamation_boxes {
        ExclamationBoxes::OneUpsOnly => {
            items.extend(std::iter::repeat(ONE_UP_MUSHROOM).take(ONE_UP_BLOCKS.len()));
        }
        ExclamationBoxes::Off => {
            locked.extend(ONE_UP_BLOCKS.iter().map(|block| (*block, ONE_UP_MUSHROOM)));
        }
    }

    PoolPlan {
        star_count: stars,
        items,
        locked,
    }
}
