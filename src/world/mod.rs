//! The world adapter: how a game plugs into generation.
//!
//! Games implement `World`; the `Generator` calls into it in a fixed order
//! but never interprets game-specific concepts directly.

pub mod adapter;
pub mod generator;
pub mod output;

pub use adapter::World;
pub use generator::{Generator, Step};
pub use output::{DataPackage, DataPackageData, GameData, MultiData, OutputFile, PlacedItem};
