//! Core types shared by every world: players, seeded RNG, items, errors.

pub mod player;
pub mod rng;
pub mod item;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::{SeedRng, SeedRngState};
pub use item::{Item, ItemClassification, ItemCode};
pub use error::{ErrorKind, GenerationError, Result};
