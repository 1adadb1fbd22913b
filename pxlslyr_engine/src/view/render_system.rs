//! module Render System
//!
//! Help text, engine notices, errors and the end-of-game summary.

use colored::Colorize as _;
use textwrap::fill;

use crate::stage::QuestStage;
use crate::style::{GameStyle as _, indented_block, normal_block};
use crate::view::icons::{ICON_ENGINE, ICON_ERROR};
use crate::view::{ViewEntry, ViewItem};

const HELP_LINES: &[(&str, &str)] = &[
    ("up / north / w / k", "move one cell up (w is WASD up, not west)"),
    ("down / south / s / j", "move one cell down"),
    ("left / west / a / h", "move one cell left"),
    ("right / east / d / l", "move one cell right"),
    ("go <direction>", "same as the bare direction"),
    ("look / map", "redraw the map"),
    ("status / hp", "show health and progress"),
    ("cast / who", "list the characters"),
    ("quest / flow", "show the quest checklist"),
    ("help / ?", "show this help"),
    ("quit / exit", "leave the game"),
];

pub(super) fn help() {
    println!("{}", "Commands".subheading_style());
    for (words, what) in HELP_LINES {
        println!("    {:<24}{}", words.bold(), what);
    }
    println!();
}

pub(super) fn engine_messages(entries: &[&ViewEntry]) {
    for msg in entries.iter().filter_map(|entry| match &entry.view_item {
        ViewItem::EngineMessage(msg) => Some(msg),
        _ => None,
    }) {
        println!("{}", fill(format!("{ICON_ENGINE:<4}{msg}").as_str(), normal_block()));
    }
}

pub(super) fn errors(entries: &[&ViewEntry]) {
    for msg in entries.iter().filter_map(|entry| match &entry.view_item {
        ViewItem::Error(msg) => Some(msg),
        _ => None,
    }) {
        println!(
            "{}",
            fill(format!("{:<4}{}", ICON_ERROR.error_style(), msg.error_style()).as_str(), normal_block())
        );
    }
}

pub(super) fn quit_summary(entries: &[&ViewEntry]) {
    for entry in entries {
        if let ViewItem::QuitSummary { stage, moves, deaths } = &entry.view_item {
            let verdict = if *stage == QuestStage::Done {
                "Princess Aria is home safe. The kingdom will sing of this."
            } else {
                "The tower still stands, and the princess still waits."
            };
            println!("{}", "Journey's End".subheading_style());
            println!("{}", fill(verdict, indented_block()).description_style());
            println!("    Stage reached: {}", stage.label().stage_style());
            println!("    Steps taken:   {moves}");
            println!("    Deaths:        {deaths}");
            println!();
        }
    }
}
