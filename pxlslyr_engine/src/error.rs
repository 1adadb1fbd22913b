//! Error type for the quest engine.
//!
//! Only caller mistakes are errors. Walking into a wall or dying to a monster
//! is ordinary gameplay and is reported through [`crate::QuestEvent`]s.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestError {
    #[error("({dx}, {dy}) is not a unit step in a cardinal direction")]
    InvalidDirection { dx: i32, dy: i32 },
    #[error("unknown direction '{0}'")]
    UnknownDirection(String),
}
