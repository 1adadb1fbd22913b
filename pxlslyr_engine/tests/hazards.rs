use pxlslyr_data::{GridPos, WorldMap};
use pxlslyr_engine::{Direction, EventKind, QuestSession, QuestStage};

use Direction::{Down, Left, Right, Up};

fn steps(session: &mut QuestSession, dir: Direction, count: usize) {
    for _ in 0..count {
        session.attempt_move(dir);
    }
}

/// Put an unarmed player on the cell above Flamwyrm.
fn beside_flamwyrm() -> QuestSession {
    let mut session = QuestSession::new(WorldMap::builtin());
    steps(&mut session, Up, 1);
    steps(&mut session, Right, 8);
    assert_eq!(session.snapshot().position, GridPos::new(8, 6));
    session
}

#[test]
fn unarmed_player_dies_on_third_encounter() {
    let mut session = beside_flamwyrm();

    let first = session.attempt_move(Down);
    assert_eq!(first.events.len(), 1);
    assert_eq!(first.events[0].kind, EventKind::Failure);
    assert_eq!(first.snapshot.health, 2);

    session.attempt_move(Up);
    let second = session.attempt_move(Down);
    assert_eq!(second.snapshot.health, 1);

    session.attempt_move(Up);
    let third = session.attempt_move(Down);
    let kinds: Vec<_> = third.events.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![EventKind::Failure, EventKind::Death]);
    assert_eq!(third.snapshot.position, GridPos::new(0, 7));
    assert_eq!(third.snapshot.health, 3);
    assert_eq!(third.snapshot.stage, QuestStage::Explore);
    assert!(!third.snapshot.flags.first_monster_defeated);
    assert_eq!(session.deaths(), 1);
}

#[test]
fn castle_stays_shut_until_flamwyrm_falls() {
    let mut session = QuestSession::new(WorldMap::builtin());
    steps(&mut session, Up, 1);
    steps(&mut session, Right, 12);
    let outcome = session.attempt_move(Down);
    assert_eq!(outcome.snapshot.position, GridPos::new(12, 7));
    assert!(outcome.events.is_empty());
    assert_eq!(session.stage(), QuestStage::Explore);
}

#[test]
fn revisiting_the_chest_is_quiet() {
    let mut session = QuestSession::new(WorldMap::builtin());
    steps(&mut session, Right, 4);
    session.attempt_move(Right);
    let back = session.attempt_move(Left);
    assert_eq!(back.snapshot.position, GridPos::new(4, 7));
    assert!(back.events.is_empty());
}

#[test]
fn every_edge_absorbs_moves() {
    let mut session = QuestSession::new(WorldMap::builtin());
    let map = session.map().clone();
    for dir in [Left, Down] {
        let outcome = session.attempt_move(dir);
        assert!(outcome.events.is_empty());
        assert_eq!(outcome.snapshot.position, map.start());
    }
    assert_eq!(session.stage(), QuestStage::Start);

    steps(&mut session, Up, 20);
    assert_eq!(session.snapshot().position.row, 0);
    steps(&mut session, Right, 40);
    assert_eq!(session.snapshot().position.col, map.width() - 1);
    let bump = session.attempt_move(Right);
    assert!(bump.events.is_empty());
    assert!(map.in_bounds(bump.snapshot.position));
}

#[test]
fn raw_deltas_are_checked() {
    let mut session = QuestSession::new(WorldMap::builtin());
    assert!(session.attempt_move_delta(2, 0).is_err());
    assert!(session.attempt_move_delta(0, 0).is_err());
    assert_eq!(session.moves_taken(), 0);
    assert!(session.attempt_move_delta(1, 0).is_ok());
    assert_eq!(session.moves_taken(), 1);
}

#[test]
fn snapshot_serializes_for_front_ends() {
    let mut session = QuestSession::new(WorldMap::builtin());
    let outcome = session.attempt_move(Right);
    let json = serde_json::to_value(outcome.snapshot).expect("snapshot to json");
    assert_eq!(json["stage"], "explore");
    assert_eq!(json["position"]["col"], 1);
    assert_eq!(json["health"], 3);
    assert_eq!(json["flags"]["has_weapon"], false);
}
