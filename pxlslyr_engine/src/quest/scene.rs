//! Which landmarks a renderer should draw for a given snapshot.
//!
//! Monsters disappear once beaten, the second monster and the princess only
//! show up when the story reaches them, and the prisoners and ghost appear
//! once they have something to say.

use pxlslyr_data::{Landmark, LandmarkKind, WorldMap};

use crate::player::PlayerSnapshot;
use crate::stage::QuestStage;

/// Landmarks visible for `snapshot`, in map definition order.
pub fn visible_landmarks<'a>(map: &'a WorldMap, snapshot: &PlayerSnapshot) -> Vec<&'a Landmark> {
    map.landmarks()
        .iter()
        .filter(|landmark| is_visible(landmark.kind, snapshot))
        .collect()
}

fn is_visible(kind: LandmarkKind, snapshot: &PlayerSnapshot) -> bool {
    let stage = snapshot.stage;
    let flags = &snapshot.flags;
    match kind {
        LandmarkKind::Flamwyrm => !flags.first_monster_defeated,
        LandmarkKind::Frostfang => {
            !flags.second_monster_defeated && matches!(stage, QuestStage::Secret | QuestStage::Climb)
        },
        LandmarkKind::Prisoner => stage >= QuestStage::Rescue,
        LandmarkKind::Ghost => flags.secret_heard,
        LandmarkKind::Goal => stage >= QuestStage::Climb,
        LandmarkKind::Chest
        | LandmarkKind::CastleEntrance
        | LandmarkKind::DungeonEntrance
        | LandmarkKind::Toby
        | LandmarkKind::Mirra
        | LandmarkKind::Guard => true,
    }
}
