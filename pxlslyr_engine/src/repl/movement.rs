//! `repl::movement` module
//!
//! Handler for stepping the hero around the grid.

use log::info;

use crate::direction::Direction;
use crate::quest::QuestSession;
use crate::view::{SceneFrame, View, ViewItem};

const MSG_EDGE: &str = "You can't go any further that way.";
const MSG_QUEST_OVER: &str = "The quest is complete. Wander freely, or `quit` to leave.";

/// Step one cell in `direction`, then queue the outcome, the redrawn map and the status panel.
pub fn move_handler(session: &mut QuestSession, view: &mut View, direction: Direction) {
    let was_complete = session.is_complete();
    let before = session.snapshot().position;
    let outcome = session.attempt_move(direction);
    info!("player moved {direction}: {before} -> {}", outcome.snapshot.position);

    if outcome.events.is_empty() && outcome.snapshot.position == before {
        view.push(ViewItem::EngineMessage(MSG_EDGE.to_string()));
    }
    for event in outcome.events {
        view.push(ViewItem::QuestEvent(event));
    }
    if was_complete {
        view.push(ViewItem::EngineMessage(MSG_QUEST_OVER.to_string()));
    }

    view.wander_critter(session.map());
    view.push(ViewItem::Scene(SceneFrame::compose(
        session.map(),
        &outcome.snapshot,
        view.critter,
    )));
    view.push(ViewItem::Status(outcome.snapshot));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pxlslyr_data::WorldMap;

    #[test]
    fn edge_bump_queues_notice() {
        let mut session = QuestSession::new(WorldMap::builtin());
        let mut view = View::new();
        move_handler(&mut session, &mut view, Direction::Down);
        assert_eq!(view.items[0].view_item, ViewItem::EngineMessage(MSG_EDGE.to_string()));
        assert!(view.items.iter().any(|entry| entry.view_item.is_scene()));
        assert!(view.items.iter().any(|entry| entry.view_item.is_status()));
    }

    #[test]
    fn real_step_queues_events() {
        let mut session = QuestSession::new(WorldMap::builtin());
        let mut view = View::new();
        move_handler(&mut session, &mut view, Direction::Up);
        assert!(view.items[0].view_item.is_quest_event());
        assert!(!view.items.iter().any(|entry| entry.view_item.is_engine_message()));
    }
}
