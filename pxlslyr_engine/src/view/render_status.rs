//! module Render Status
//!
//! Status panel, cast roster and quest flow checklist.

use colored::Colorize as _;
use pxlslyr_data::CastMember;

use crate::player::PlayerSnapshot;
use crate::stage::QuestStage;
use crate::style::GameStyle as _;
use crate::view::icons::{ICON_CHECK, ICON_CROSS, ICON_HEART_EMPTY, ICON_HEART_FULL};

fn mark(done: bool) -> String {
    if done {
        ICON_CHECK.success_style().to_string()
    } else {
        ICON_CROSS.dimmed().to_string()
    }
}

/// Hearts for current health followed by empty hearts up to the maximum.
pub(crate) fn hearts(snapshot: &PlayerSnapshot) -> String {
    let lost = snapshot.max_health.saturating_sub(snapshot.health);
    format!(
        "{}{}",
        ICON_HEART_FULL.repeat(snapshot.health as usize).red(),
        ICON_HEART_EMPTY.repeat(lost as usize).dimmed()
    )
}

pub(super) fn status(snapshot: &PlayerSnapshot) {
    let flags = &snapshot.flags;
    println!(
        "    Stage: {} ({}/{})   HP: {}   Pos: {}",
        snapshot.stage.label().stage_style(),
        snapshot.stage.index() + 1,
        QuestStage::ALL.len(),
        hearts(snapshot),
        snapshot.position
    );
    println!(
        "    Weapon {}  Flamwyrm {}  Key {}  Rescued {}  Ghost {}  Frostfang {}",
        mark(flags.has_weapon),
        mark(flags.first_monster_defeated),
        mark(flags.key_found),
        mark(flags.prisoners_rescued),
        mark(flags.secret_heard),
        mark(flags.second_monster_defeated),
    );
    println!();
}

pub(super) fn cast(members: &[CastMember]) {
    println!("{}", "Characters".subheading_style());
    for member in members {
        println!("    {} -- {}", member.name.npc_style(), member.description.description_style());
    }
    println!();
}

/// Which of the nine quest flow steps are complete for `snapshot`.
pub(crate) fn flow_progress(snapshot: &PlayerSnapshot) -> [bool; 9] {
    let flags = &snapshot.flags;
    let done = snapshot.stage == QuestStage::Done;
    [
        flags.has_weapon,
        flags.first_monster_defeated,
        snapshot.stage >= QuestStage::KeySearch,
        flags.key_found,
        flags.prisoners_rescued,
        flags.secret_heard,
        flags.second_monster_defeated,
        done,
        done,
    ]
}

pub(super) fn quest_flow(steps: &[String], snapshot: &PlayerSnapshot) {
    println!("{}", "Quest Flow".subheading_style());
    let progress = flow_progress(snapshot);
    for (idx, step) in steps.iter().enumerate() {
        let done = progress.get(idx).copied().unwrap_or(false);
        let line = format!("{}. {step}", idx + 1);
        if done {
            println!("  {} {}", mark(true), line.dimmed().strikethrough());
        } else {
            println!("  {} {line}", mark(false));
        }
    }
    println!();
}
