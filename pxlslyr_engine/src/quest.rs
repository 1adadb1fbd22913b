//! Quest module --
//!
//! A [`QuestSession`] owns one player's state and is the only thing that
//! changes it. Each call to [`QuestSession::attempt_move`] steps the player,
//! then runs the positional triggers in [`TRIGGER_ORDER`] and hands back the
//! resulting snapshot together with the events the move produced.

pub mod scene;
pub mod triggers;

pub use scene::visible_landmarks;
pub use triggers::{TRIGGER_ORDER, Trigger, TriggerFlow};

use log::{debug, info};
use pxlslyr_data::{LandmarkKind, WorldMap};

use crate::direction::Direction;
use crate::error::QuestError;
use crate::event::QuestEvent;
use crate::player::{PlayerSnapshot, PlayerState};
use crate::stage::QuestStage;
use triggers::TriggerContext;

const MSG_QUEST_BEGINS: &str = "Stage 1: Explore & defeat Flamwyrm";

/// Result of one move: the state after the move and what happened during it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub snapshot: PlayerSnapshot,
    pub events: Vec<QuestEvent>,
}

/// One player's game, from the first step to the rescue.
#[derive(Debug, Clone)]
pub struct QuestSession {
    map: WorldMap,
    state: PlayerState,
    moves_taken: u32,
    deaths: u32,
}

impl QuestSession {
    /// Start a new session on `map` with fresh player state.
    pub fn new(map: WorldMap) -> QuestSession {
        let state = PlayerState::new(map.start(), map.max_health());
        info!("new quest session started at {}", map.start());
        if let Some(goal) = map.first(LandmarkKind::Goal) {
            info!("'{}' waits at {}", goal.name, goal.pos);
        }
        QuestSession {
            map,
            state,
            moves_taken: 0,
            deaths: 0,
        }
    }

    /// Step the player one cell and resolve whatever the new cell triggers.
    ///
    /// A step off the grid changes nothing and produces no events.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveOutcome {
        let (d_col, d_row) = direction.delta();
        let candidate = self.state.position.offset(d_col, d_row);
        if !self.map.in_bounds(candidate) {
            debug!("move {direction} to {candidate} absorbed at the grid edge");
            return self.outcome(Vec::new());
        }

        self.state.position = candidate;
        self.moves_taken += 1;
        let mut events = Vec::new();

        if self.state.stage == QuestStage::Start && self.state.advance_to(QuestStage::Explore) {
            events.push(QuestEvent::info(MSG_QUEST_BEGINS));
        }

        let mut ctx = TriggerContext {
            map: &self.map,
            state: &mut self.state,
            events: &mut events,
        };
        for trigger in TRIGGER_ORDER {
            if trigger.fire(&mut ctx) == TriggerFlow::Respawned {
                info!("'{}' killed the player; skipping remaining triggers", trigger.name());
                self.deaths += 1;
                break;
            }
        }

        self.outcome(events)
    }

    /// Same as [`attempt_move`](Self::attempt_move), from a raw column / row delta.
    ///
    /// # Errors
    /// - `InvalidDirection` if the delta is not a single cardinal step
    pub fn attempt_move_delta(&mut self, dx: i32, dy: i32) -> Result<MoveOutcome, QuestError> {
        let direction = Direction::from_delta(dx, dy)?;
        Ok(self.attempt_move(direction))
    }

    fn outcome(&self, events: Vec<QuestEvent>) -> MoveOutcome {
        MoveOutcome {
            snapshot: self.state.snapshot(),
            events,
        }
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        self.state.snapshot()
    }

    pub fn map(&self) -> &WorldMap {
        &self.map
    }

    pub fn stage(&self) -> QuestStage {
        self.state.stage
    }

    pub fn is_complete(&self) -> bool {
        self.state.stage.is_terminal()
    }

    /// Moves that actually changed cell (edge bumps are not counted).
    pub fn moves_taken(&self) -> u32 {
        self.moves_taken
    }

    pub fn deaths(&self) -> u32 {
        self.deaths
    }
}
