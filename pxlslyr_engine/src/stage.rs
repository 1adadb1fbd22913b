//! Quest stages.
//!
//! The quest is a straight line: each stage has exactly one successor and the
//! player can only ever move to it.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestStage {
    #[default]
    Start,
    Explore,
    KeySearch,
    Rescue,
    Secret,
    Climb,
    Done,
}

impl QuestStage {
    pub const ALL: [QuestStage; 7] = [
        QuestStage::Start,
        QuestStage::Explore,
        QuestStage::KeySearch,
        QuestStage::Rescue,
        QuestStage::Secret,
        QuestStage::Climb,
        QuestStage::Done,
    ];

    /// The stage that follows this one, or `None` once the quest is done.
    pub fn next(self) -> Option<QuestStage> {
        match self {
            QuestStage::Start => Some(QuestStage::Explore),
            QuestStage::Explore => Some(QuestStage::KeySearch),
            QuestStage::KeySearch => Some(QuestStage::Rescue),
            QuestStage::Rescue => Some(QuestStage::Secret),
            QuestStage::Secret => Some(QuestStage::Climb),
            QuestStage::Climb => Some(QuestStage::Done),
            QuestStage::Done => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == QuestStage::Done
    }

    /// Zero-based position in the quest line.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            QuestStage::Start => "start",
            QuestStage::Explore => "explore",
            QuestStage::KeySearch => "key_search",
            QuestStage::Rescue => "rescue",
            QuestStage::Secret => "secret",
            QuestStage::Climb => "climb",
            QuestStage::Done => "done",
        }
    }
}

impl fmt::Display for QuestStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
