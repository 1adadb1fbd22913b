//! Player -- the mutable half of a quest session.
//!
//! [`PlayerState`] is owned by a [`crate::QuestSession`] and only changes
//! through its move handling. Everything outside the engine sees the
//! [`PlayerSnapshot`] copy instead.
use std::fmt;

use log::{info, warn};
use pxlslyr_data::GridPos;
use serde::{Deserialize, Serialize};

use crate::health::HealthState;
use crate::stage::QuestStage;

/// One-way milestones recorded as the quest progresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProgressFlag {
    HasWeapon,
    FirstMonsterDefeated,
    ClueAHeard,
    ClueBHeard,
    KeyFound,
    PrisonersRescued,
    SecretHeard,
    SecondMonsterDefeated,
}

impl ProgressFlag {
    pub const ALL: [ProgressFlag; 8] = [
        ProgressFlag::HasWeapon,
        ProgressFlag::FirstMonsterDefeated,
        ProgressFlag::ClueAHeard,
        ProgressFlag::ClueBHeard,
        ProgressFlag::KeyFound,
        ProgressFlag::PrisonersRescued,
        ProgressFlag::SecretHeard,
        ProgressFlag::SecondMonsterDefeated,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProgressFlag::HasWeapon => "has_weapon",
            ProgressFlag::FirstMonsterDefeated => "first_monster_defeated",
            ProgressFlag::ClueAHeard => "clue_a_heard",
            ProgressFlag::ClueBHeard => "clue_b_heard",
            ProgressFlag::KeyFound => "key_found",
            ProgressFlag::PrisonersRescued => "prisoners_rescued",
            ProgressFlag::SecretHeard => "secret_heard",
            ProgressFlag::SecondMonsterDefeated => "second_monster_defeated",
        }
    }
}

impl fmt::Display for ProgressFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The full set of progress flags. All start `false` and never go back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressFlags {
    pub has_weapon: bool,
    pub first_monster_defeated: bool,
    pub clue_a_heard: bool,
    pub clue_b_heard: bool,
    pub key_found: bool,
    pub prisoners_rescued: bool,
    pub secret_heard: bool,
    pub second_monster_defeated: bool,
}

impl ProgressFlags {
    pub fn get(&self, flag: ProgressFlag) -> bool {
        match flag {
            ProgressFlag::HasWeapon => self.has_weapon,
            ProgressFlag::FirstMonsterDefeated => self.first_monster_defeated,
            ProgressFlag::ClueAHeard => self.clue_a_heard,
            ProgressFlag::ClueBHeard => self.clue_b_heard,
            ProgressFlag::KeyFound => self.key_found,
            ProgressFlag::PrisonersRescued => self.prisoners_rescued,
            ProgressFlag::SecretHeard => self.secret_heard,
            ProgressFlag::SecondMonsterDefeated => self.second_monster_defeated,
        }
    }

    fn slot(&mut self, flag: ProgressFlag) -> &mut bool {
        match flag {
            ProgressFlag::HasWeapon => &mut self.has_weapon,
            ProgressFlag::FirstMonsterDefeated => &mut self.first_monster_defeated,
            ProgressFlag::ClueAHeard => &mut self.clue_a_heard,
            ProgressFlag::ClueBHeard => &mut self.clue_b_heard,
            ProgressFlag::KeyFound => &mut self.key_found,
            ProgressFlag::PrisonersRescued => &mut self.prisoners_rescued,
            ProgressFlag::SecretHeard => &mut self.secret_heard,
            ProgressFlag::SecondMonsterDefeated => &mut self.second_monster_defeated,
        }
    }

    /// Set `flag`, returning `true` only if it was previously unset.
    pub fn set(&mut self, flag: ProgressFlag) -> bool {
        let slot = self.slot(flag);
        let newly_set = !*slot;
        *slot = true;
        newly_set
    }

    /// Flags currently set, in quest order.
    pub fn set_flags(&self) -> impl Iterator<Item = ProgressFlag> + '_ {
        ProgressFlag::ALL.into_iter().filter(|flag| self.get(*flag))
    }
}

/// Mutable per-session player state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub(crate) position: GridPos,
    pub(crate) health: HealthState,
    pub(crate) stage: QuestStage,
    pub(crate) flags: ProgressFlags,
}

impl PlayerState {
    /// Fresh state: all flags clear, full health, quest not yet started.
    pub fn new(start: GridPos, max_health: u32) -> PlayerState {
        PlayerState {
            position: start,
            health: HealthState::new_at_max(max_health),
            stage: QuestStage::Start,
            flags: ProgressFlags::default(),
        }
    }

    pub fn position(&self) -> GridPos {
        self.position
    }

    pub fn stage(&self) -> QuestStage {
        self.stage
    }

    pub fn has(&self, flag: ProgressFlag) -> bool {
        self.flags.get(flag)
    }

    /// Set a progress flag; `true` if this call set it.
    pub(crate) fn mark(&mut self, flag: ProgressFlag) -> bool {
        let newly_set = self.flags.set(flag);
        if newly_set {
            info!("progress flag set: {flag}");
        }
        newly_set
    }

    /// Move to the stage directly after the current one, if that is `to`.
    /// Any other request is refused and logged.
    pub(crate) fn advance_to(&mut self, to: QuestStage) -> bool {
        if self.stage.next() == Some(to) {
            info!("quest stage: {} -> {}", self.stage, to);
            self.stage = to;
            true
        } else {
            warn!("refused stage change {} -> {}", self.stage, to);
            false
        }
    }

    /// Put the player back at `respawn` with full health. Stage and flags stay.
    pub(crate) fn respawn_at(&mut self, respawn: GridPos) {
        info!("player died at {}, respawning at {respawn}", self.position);
        self.position = respawn;
        self.health.restore();
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            position: self.position,
            stage: self.stage,
            health: self.health.current_hp(),
            max_health: self.health.max_hp(),
            flags: self.flags,
        }
    }
}

/// Read-only projection of [`PlayerState`] handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub position: GridPos,
    pub stage: QuestStage,
    pub health: u32,
    pub max_health: u32,
    pub flags: ProgressFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_reports_first_change_only() {
        let mut flags = ProgressFlags::default();
        assert!(flags.set(ProgressFlag::KeyFound));
        assert!(!flags.set(ProgressFlag::KeyFound));
        assert!(flags.key_found);
        assert_eq!(flags.set_flags().collect::<Vec<_>>(), vec![ProgressFlag::KeyFound]);
    }

    #[test]
    fn advance_only_moves_one_step_forward() {
        let mut state = PlayerState::new(GridPos::new(0, 7), 3);
        assert!(!state.advance_to(QuestStage::KeySearch));
        assert!(state.advance_to(QuestStage::Explore));
        assert!(!state.advance_to(QuestStage::Start));
        assert!(!state.advance_to(QuestStage::Explore));
        assert_eq!(state.stage(), QuestStage::Explore);
    }

    #[test]
    fn respawn_keeps_progress() {
        let mut state = PlayerState::new(GridPos::new(0, 7), 3);
        state.advance_to(QuestStage::Explore);
        state.mark(ProgressFlag::ClueAHeard);
        state.position = GridPos::new(8, 7);
        state.health.damage(3);
        state.respawn_at(GridPos::new(0, 7));
        let snap = state.snapshot();
        assert_eq!(snap.position, GridPos::new(0, 7));
        assert_eq!(snap.health, 3);
        assert_eq!(snap.stage, QuestStage::Explore);
        assert!(snap.flags.clue_a_heard);
    }
}
