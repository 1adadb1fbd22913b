//! module Render Events
//!
//! Renders the narrative events produced by the last move, in the order the
//! engine emitted them.

use colored::ColoredString;
use textwrap::fill;

use crate::event::{EventKind, QuestEvent};
use crate::style::{GameStyle as _, normal_block};
use crate::view::{ViewEntry, ViewItem};
use crate::view::icons::{ICON_CELEBRATE, ICON_DEATH, ICON_FAILURE, ICON_INFO, ICON_SUCCESS};

/// Renders each quest event with an icon and color picked from its kind.
pub(super) fn quest_events(entries: &[&ViewEntry]) {
    let events: Vec<&QuestEvent> = entries
        .iter()
        .filter_map(|entry| match &entry.view_item {
            ViewItem::QuestEvent(event) => Some(event),
            _ => None,
        })
        .collect();
    for event in &events {
        let (icon, text) = styled(event);
        println!("{}", fill(format!("{icon:<4}{text}").as_str(), normal_block()));
    }
    if !events.is_empty() {
        println!();
    }
}

fn styled(event: &QuestEvent) -> (ColoredString, ColoredString) {
    let message = event.message.as_str();
    match event.kind {
        EventKind::Info => (ICON_INFO.info_style(), message.info_style()),
        EventKind::Success => (ICON_SUCCESS.success_style(), message.success_style()),
        EventKind::Failure => (ICON_FAILURE.failure_style(), message.failure_style()),
        EventKind::Death => (ICON_DEATH.death_style(), message.death_style()),
        EventKind::Victory => (ICON_CELEBRATE.victory_style(), message.victory_style()),
    }
}
