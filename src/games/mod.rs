//! Game worlds.

pub mod sm64;
