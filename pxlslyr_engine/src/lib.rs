#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! Quest engine for a grid-walking rescue adventure.
//!
//! A [`QuestSession`] owns the player's state and advances it one step at a
//! time; the [`View`] and [`repl`] modules turn that into a terminal game.
//!
//! ```
//! use pxlslyr_data::WorldMap;
//! use pxlslyr_engine::{Direction, QuestSession, QuestStage};
//!
//! let mut session = QuestSession::new(WorldMap::builtin());
//! let outcome = session.attempt_move(Direction::Right);
//! assert_eq!(outcome.snapshot.stage, QuestStage::Explore);
//! ```

pub const PXLSLYR_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod data_paths;
pub mod direction;
pub mod error;
pub mod event;
pub mod health;
pub mod loader;
pub mod player;
pub mod quest;
pub mod repl;
pub mod stage;
pub mod style;
pub mod view;

// Re-exports for convenience
pub use direction::Direction;
pub use error::QuestError;
pub use event::{EventKind, QuestEvent};
pub use health::{HealthState, LifeState};
pub use loader::{load_world_map, load_world_map_from};
pub use player::{PlayerSnapshot, ProgressFlag, ProgressFlags};
pub use quest::{MoveOutcome, QuestSession};
pub use repl::run_repl;
pub use stage::QuestStage;
pub use view::{View, ViewItem};
