//! `repl::system` module
//!
//! Contains repl loop handlers for commands that don't move the hero.

use log::info;

use crate::player::ProgressFlag;
use crate::quest::QuestSession;
use crate::repl::ReplControl;
use crate::view::{SceneFrame, View, ViewItem};

/// Redraw the map and status panel.
pub fn look_handler(session: &QuestSession, view: &mut View) {
    let snapshot = session.snapshot();
    view.push(ViewItem::Scene(SceneFrame::compose(session.map(), &snapshot, view.critter)));
    view.push(ViewItem::Status(snapshot));
}

pub fn status_handler(session: &QuestSession, view: &mut View) {
    view.push(ViewItem::Status(session.snapshot()));
}

/// List the characters of the story.
pub fn cast_handler(session: &QuestSession, view: &mut View) {
    view.push(ViewItem::Cast(session.map().cast().to_vec()));
}

/// Show the quest checklist with completed steps marked.
pub fn quest_flow_handler(session: &QuestSession, view: &mut View) {
    view.push(ViewItem::QuestFlow {
        steps: session.map().quest_flow().to_vec(),
        snapshot: session.snapshot(),
    });
}

pub fn help_handler(view: &mut View) {
    view.push(ViewItem::Help);
}

/// Quit the game.
pub fn quit_handler(session: &QuestSession, view: &mut View) -> ReplControl {
    let snapshot = session.snapshot();
    info!(
        "player quit at stage {} after {} moves and {} deaths",
        snapshot.stage,
        session.moves_taken(),
        session.deaths()
    );
    let flags: Vec<&str> = snapshot.flags.set_flags().map(ProgressFlag::label).collect();
    info!("ending flags: [{}]", flags.join(", "));
    view.push(ViewItem::QuitSummary {
        stage: snapshot.stage,
        moves: session.moves_taken(),
        deaths: session.deaths(),
    });
    ReplControl::Quit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::QuestStage;
    use pxlslyr_data::WorldMap;

    #[test]
    fn quit_reports_progress() {
        let session = QuestSession::new(WorldMap::builtin());
        let mut view = View::new();
        assert!(matches!(quit_handler(&session, &mut view), ReplControl::Quit));
        assert_eq!(
            view.items[0].view_item,
            ViewItem::QuitSummary {
                stage: QuestStage::Start,
                moves: 0,
                deaths: 0
            }
        );
    }

    #[test]
    fn reference_handlers_copy_map_text() {
        let session = QuestSession::new(WorldMap::builtin());
        let mut view = View::new();
        cast_handler(&session, &mut view);
        quest_flow_handler(&session, &mut view);
        match &view.items[0].view_item {
            ViewItem::Cast(members) => assert_eq!(members.len(), session.map().cast().len()),
            other => panic!("expected cast, got {other:?}"),
        }
        assert!(matches!(view.items[1].view_item, ViewItem::QuestFlow { .. }));
    }
}
