//! Positional triggers, evaluated in a fixed order after every committed move.
//!
//! Each trigger checks its guard and applies its effect in one call, so no
//! other trigger can observe a half-applied state. Guards always include the
//! flag or stage the effect sets, which makes every trigger one-shot.

use log::info;
use pxlslyr_data::{GridPos, LandmarkKind, WorldMap};

use crate::event::QuestEvent;
use crate::health::LifeState;
use crate::player::{PlayerState, ProgressFlag};
use crate::stage::QuestStage;

const MSG_CHEST: &str = "You equipped armor & sword!";
const MSG_CASTLE: &str = "Entered castle. Find the dungeon key!";
const MSG_TOBY: &str = "Toby: 'They hid the key behind the queen's portrait.'";
const MSG_MIRRA: &str = "Mirra: 'Find Brenn's mark in the armory.'";
const MSG_KEY: &str = "You discovered the dungeon key!";
const MSG_DUNGEON: &str = "Dungeon unlocked! Rescue your allies!";
const MSG_RESCUE: &str = "Sir Rowan & Lady Elin rescued!";
const MSG_RESCUE_HINT: &str = "Seek the Castle Ghost for a secret.";
const MSG_GHOST: &str = "Ghost: 'Through the guard's quarters, head west then north.'";
const MSG_VICTORY: &str = "Princess Aria is safe. You win!";

/// Whether evaluation continues after a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerFlow {
    Continue,
    /// The player died and was respawned; later triggers are skipped.
    Respawned,
}

/// Every positional trigger, named by what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    ChestPickup,
    FirstMonster,
    CastleEntry,
    ClueNpcs,
    DungeonUnlock,
    PrisonerRescue,
    GhostEncounter,
    SecondMonster,
    Victory,
}

/// Evaluation order. Earlier triggers can enable later ones in the same move.
pub const TRIGGER_ORDER: [Trigger; 9] = [
    Trigger::ChestPickup,
    Trigger::FirstMonster,
    Trigger::CastleEntry,
    Trigger::ClueNpcs,
    Trigger::DungeonUnlock,
    Trigger::PrisonerRescue,
    Trigger::GhostEncounter,
    Trigger::SecondMonster,
    Trigger::Victory,
];

/// Borrowed view of everything a trigger may read or change.
pub(crate) struct TriggerContext<'a> {
    pub map: &'a WorldMap,
    pub state: &'a mut PlayerState,
    pub events: &'a mut Vec<QuestEvent>,
}

impl TriggerContext<'_> {
    fn at(&self, kind: LandmarkKind) -> bool {
        self.map.is_at(self.state.position, kind)
    }

    fn in_stage(&self, stage: QuestStage) -> bool {
        self.state.stage == stage
    }
}

/// Landmark, defeat flag and messages for a hostile encounter.
struct Hostile {
    kind: LandmarkKind,
    defeated: ProgressFlag,
    win: &'static str,
    hurt: &'static str,
    death: &'static str,
}

const FLAMWYRM: Hostile = Hostile {
    kind: LandmarkKind::Flamwyrm,
    defeated: ProgressFlag::FirstMonsterDefeated,
    win: "Flamwyrm defeated!",
    hurt: "You were burned! -1 HP",
    death: "You died. Respawning...",
};

const FROSTFANG: Hostile = Hostile {
    kind: LandmarkKind::Frostfang,
    defeated: ProgressFlag::SecondMonsterDefeated,
    win: "Frostfang slain!",
    hurt: "You froze! -1 HP",
    death: "You froze solid. Restarting climb...",
};

impl Trigger {
    pub fn name(self) -> &'static str {
        match self {
            Trigger::ChestPickup => "chest pickup",
            Trigger::FirstMonster => "first monster",
            Trigger::CastleEntry => "castle entry",
            Trigger::ClueNpcs => "clue npcs",
            Trigger::DungeonUnlock => "dungeon unlock",
            Trigger::PrisonerRescue => "prisoner rescue",
            Trigger::GhostEncounter => "ghost encounter",
            Trigger::SecondMonster => "second monster",
            Trigger::Victory => "victory",
        }
    }

    /// Check this trigger's guard against the context and apply its effect.
    pub(crate) fn fire(self, ctx: &mut TriggerContext<'_>) -> TriggerFlow {
        match self {
            Trigger::ChestPickup => {
                if ctx.in_stage(QuestStage::Explore)
                    && ctx.at(LandmarkKind::Chest)
                    && ctx.state.mark(ProgressFlag::HasWeapon)
                {
                    ctx.events.push(QuestEvent::success(MSG_CHEST));
                }
            },
            Trigger::FirstMonster => {
                if ctx.in_stage(QuestStage::Explore) {
                    let respawn = ctx.map.start();
                    return encounter(ctx, &FLAMWYRM, respawn);
                }
            },
            Trigger::CastleEntry => {
                if ctx.in_stage(QuestStage::Explore)
                    && ctx.at(LandmarkKind::CastleEntrance)
                    && ctx.state.has(ProgressFlag::FirstMonsterDefeated)
                    && ctx.state.advance_to(QuestStage::KeySearch)
                {
                    ctx.events.push(QuestEvent::success(MSG_CASTLE));
                }
            },
            Trigger::ClueNpcs => {
                if !ctx.in_stage(QuestStage::KeySearch) {
                    return TriggerFlow::Continue;
                }
                if ctx.at(LandmarkKind::Toby) && ctx.state.mark(ProgressFlag::ClueAHeard) {
                    ctx.events.push(QuestEvent::info(MSG_TOBY));
                }
                if ctx.at(LandmarkKind::Mirra) && ctx.state.mark(ProgressFlag::ClueBHeard) {
                    ctx.events.push(QuestEvent::info(MSG_MIRRA));
                }
                if ctx.state.has(ProgressFlag::ClueAHeard)
                    && ctx.state.has(ProgressFlag::ClueBHeard)
                    && ctx.state.mark(ProgressFlag::KeyFound)
                {
                    ctx.events.push(QuestEvent::success(MSG_KEY));
                }
            },
            Trigger::DungeonUnlock => {
                if ctx.in_stage(QuestStage::KeySearch)
                    && ctx.at(LandmarkKind::DungeonEntrance)
                    && ctx.state.has(ProgressFlag::KeyFound)
                    && ctx.state.advance_to(QuestStage::Rescue)
                {
                    ctx.events.push(QuestEvent::success(MSG_DUNGEON));
                }
            },
            Trigger::PrisonerRescue => {
                if ctx.in_stage(QuestStage::Rescue)
                    && ctx.at(LandmarkKind::Prisoner)
                    && ctx.state.mark(ProgressFlag::PrisonersRescued)
                {
                    ctx.state.advance_to(QuestStage::Secret);
                    ctx.events.push(QuestEvent::success(MSG_RESCUE));
                    ctx.events.push(QuestEvent::info(MSG_RESCUE_HINT));
                }
            },
            Trigger::GhostEncounter => {
                if ctx.in_stage(QuestStage::Secret)
                    && ctx.at(LandmarkKind::Ghost)
                    && ctx.state.mark(ProgressFlag::SecretHeard)
                {
                    ctx.state.advance_to(QuestStage::Climb);
                    ctx.events.push(QuestEvent::success(MSG_GHOST));
                }
            },
            Trigger::SecondMonster => {
                if ctx.in_stage(QuestStage::Climb) {
                    let respawn = ctx.map.climb_respawn();
                    return encounter(ctx, &FROSTFANG, respawn);
                }
            },
            Trigger::Victory => {
                if ctx.in_stage(QuestStage::Climb) && ctx.at(LandmarkKind::Goal) && ctx.state.advance_to(QuestStage::Done) {
                    ctx.events.push(QuestEvent::victory(MSG_VICTORY));
                }
            },
        }
        TriggerFlow::Continue
    }
}

/// Fight a hostile landmark the player is standing on, if it is still undefeated.
fn encounter(ctx: &mut TriggerContext<'_>, hostile: &Hostile, respawn: GridPos) -> TriggerFlow {
    if !ctx.at(hostile.kind) || ctx.state.has(hostile.defeated) {
        return TriggerFlow::Continue;
    }
    if ctx.state.has(ProgressFlag::HasWeapon) {
        ctx.state.mark(hostile.defeated);
        ctx.events.push(QuestEvent::success(hostile.win));
        return TriggerFlow::Continue;
    }

    ctx.state.health.damage(1);
    info!(
        "player hurt by {} ({} hp left)",
        hostile.kind,
        ctx.state.health.current_hp()
    );
    ctx.events.push(QuestEvent::failure(hostile.hurt));
    if ctx.state.health.life_state() == LifeState::Dead {
        ctx.state.respawn_at(respawn);
        ctx.events.push(QuestEvent::death(hostile.death));
        return TriggerFlow::Respawned;
    }
    TriggerFlow::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    fn state_at(map: &WorldMap, kind: LandmarkKind, stage: QuestStage) -> PlayerState {
        let mut state = PlayerState::new(map.start(), map.max_health());
        state.stage = stage;
        state.position = map.first(kind).expect("landmark placed").pos;
        state
    }

    fn fire(map: &WorldMap, state: &mut PlayerState, trigger: Trigger) -> (TriggerFlow, Vec<QuestEvent>) {
        let mut events = Vec::new();
        let flow = trigger.fire(&mut TriggerContext {
            map,
            state,
            events: &mut events,
        });
        (flow, events)
    }

    #[test]
    fn chest_is_inert_outside_explore() {
        let map = WorldMap::builtin();
        let mut state = state_at(&map, LandmarkKind::Chest, QuestStage::KeySearch);
        let (_, events) = fire(&map, &mut state, Trigger::ChestPickup);
        assert!(events.is_empty());
        assert!(!state.has(ProgressFlag::HasWeapon));
    }

    #[test]
    fn ghost_is_inert_before_secret_stage() {
        let map = WorldMap::builtin();
        let mut state = state_at(&map, LandmarkKind::Ghost, QuestStage::Rescue);
        let (_, events) = fire(&map, &mut state, Trigger::GhostEncounter);
        assert!(events.is_empty());
        assert_eq!(state.stage(), QuestStage::Rescue);
    }

    #[test]
    fn second_monster_death_respawns_at_climb_cell() {
        let map = WorldMap::builtin();
        let mut state = state_at(&map, LandmarkKind::Frostfang, QuestStage::Climb);
        state.health.damage(2);
        let (flow, events) = fire(&map, &mut state, Trigger::SecondMonster);
        assert_eq!(flow, TriggerFlow::Respawned);
        assert_eq!(state.position(), map.climb_respawn());
        assert_eq!(state.health.current_hp(), 3);
        let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::Failure, EventKind::Death]);
    }

    #[test]
    fn armed_player_slays_second_monster_once() {
        let map = WorldMap::builtin();
        let mut state = state_at(&map, LandmarkKind::Frostfang, QuestStage::Climb);
        state.mark(ProgressFlag::HasWeapon);
        let (_, first) = fire(&map, &mut state, Trigger::SecondMonster);
        let (_, second) = fire(&map, &mut state, Trigger::SecondMonster);
        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
        assert!(state.has(ProgressFlag::SecondMonsterDefeated));
    }

    #[test]
    fn key_found_once_both_clues_heard() {
        let map = WorldMap::builtin();
        let mut state = state_at(&map, LandmarkKind::Mirra, QuestStage::KeySearch);
        state.mark(ProgressFlag::ClueAHeard);
        let (_, events) = fire(&map, &mut state, Trigger::ClueNpcs);
        let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::Info, EventKind::Success]);
        assert!(state.has(ProgressFlag::KeyFound));
    }

    #[test]
    fn order_lists_each_trigger_once() {
        let mut names: Vec<_> = TRIGGER_ORDER.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TRIGGER_ORDER.len());
    }
}
