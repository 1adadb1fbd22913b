//! Shared world data for PxlSlyR: grid, landmarks, spawn cells and roster text.

pub mod defs;
pub mod map;
pub mod validate;

pub use defs::*;
pub use map::WorldMap;
pub use validate::{ValidationError, validate_world};
