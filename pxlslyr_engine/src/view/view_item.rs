//! ViewItem module
//!
//! A `ViewItem` is an enum variant sent to the `View`, which aggregates them, styles them,
//! organizes them, and displays them before moving to the next turn.

use pxlslyr_data::CastMember;
use variantly::Variantly;

use crate::event::QuestEvent;
use crate::player::PlayerSnapshot;
use crate::stage::QuestStage;
use crate::view::Section;
use crate::view::render_scene::SceneFrame;

/// Each kind of information that may be displayed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    Cast(Vec<CastMember>),
    EngineMessage(String),
    Error(String),
    Help,
    QuestEvent(QuestEvent),
    QuestFlow {
        steps: Vec<String>,
        snapshot: PlayerSnapshot,
    },
    QuitSummary {
        stage: QuestStage,
        moves: u32,
        deaths: u32,
    },
    Scene(SceneFrame),
    Status(PlayerSnapshot),
}

impl ViewItem {
    /// The display section this item belongs to.
    pub fn section(&self) -> Section {
        match self {
            ViewItem::Scene(_) | ViewItem::Status(_) => Section::Scene,
            ViewItem::QuestEvent(_) => Section::Events,
            ViewItem::Cast(_) | ViewItem::QuestFlow { .. } => Section::Reference,
            ViewItem::EngineMessage(_) | ViewItem::Error(_) | ViewItem::Help | ViewItem::QuitSummary { .. } => {
                Section::System
            },
        }
    }
}
