//! Narrative events emitted by a move.

use std::fmt;

use serde::{Deserialize, Serialize};
use variantly::Variantly;

/// Broad category of an event, used by renderers to pick icon and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Variantly)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    Info,
    Success,
    Failure,
    Death,
    Victory,
}

/// One message produced while resolving a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestEvent {
    pub kind: EventKind,
    pub message: String,
}

impl QuestEvent {
    pub fn new(kind: EventKind, message: impl Into<String>) -> QuestEvent {
        QuestEvent {
            kind,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> QuestEvent {
        Self::new(EventKind::Info, message)
    }

    pub fn success(message: impl Into<String>) -> QuestEvent {
        Self::new(EventKind::Success, message)
    }

    pub fn failure(message: impl Into<String>) -> QuestEvent {
        Self::new(EventKind::Failure, message)
    }

    pub fn death(message: impl Into<String>) -> QuestEvent {
        Self::new(EventKind::Death, message)
    }

    pub fn victory(message: impl Into<String>) -> QuestEvent {
        Self::new(EventKind::Victory, message)
    }
}

impl fmt::Display for QuestEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.kind, self.message)
    }
}
