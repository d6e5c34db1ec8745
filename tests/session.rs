//! Tests for session-level editing: drops, deletes and undo history.
mod common;
use common::*;
use flowboard::prelude::*;

#[test]
fn test_drop_creates_node_at_canvas_point() {
    let config = EditorConfig {
        canvas_origin: Point::new(200.0, 50.0),
        ..EditorConfig::default()
    };
    let mut session = EditorSession::new(config, RecordingSurface::new());

    let payload = Toolbox::item(NodeKind::Question).drag_payload();
    let id = session.drop_payload(&payload, Point::new(500.0, 350.0)).unwrap();

    let node = session.graph().find_node(id).unwrap();
    assert_eq!(id, NodeId(2));
    assert_eq!(node.kind, NodeKind::Question);
    assert_eq!(node.title, "Question");
    assert_eq!(node.position, Point::new(300.0, 300.0));
    assert_eq!(node.data, NodeKind::Question.default_data());
}

#[test]
fn test_drop_without_default_data() {
    let config = EditorConfig {
        seed_defaults: false,
        ..EditorConfig::default()
    };
    let mut session = EditorSession::new(config, RecordingSurface::new());
    let id = session
        .drop_payload(&DragPayload("delay".into()), Point::new(0.0, 0.0))
        .unwrap();
    assert!(session.graph().find_node(id).unwrap().data.is_empty());
}

#[test]
fn test_drop_of_unknown_tag_is_ignored() {
    let mut session = seeded_session();
    let before = session.graph().clone();

    assert_eq!(session.drop_payload(&DragPayload("teleport".into()), Point::new(10.0, 10.0)), None);
    assert_eq!(session.graph(), &before);
    assert!(!session.can_undo());
}

#[test]
fn test_empty_session_starts_blank() {
    let session = empty_session();
    assert_eq!(session.graph().node_count(), 0);
    assert_eq!(session.surface().clears, 1);
}

#[test]
fn test_delete_asks_with_connection_count() {
    let mut session = seeded_session();
    let end = session
        .drop_payload(&Toolbox::item(NodeKind::End).drag_payload(), Point::new(400.0, 100.0))
        .unwrap();
    let from = output_of(session.graph(), 1);
    let to = input_of(session.graph(), end.0);
    session.pointer(PointerEvent::Down(from));
    session.pointer(PointerEvent::Up(to));

    let mut prompts = Vec::new();
    let mut confirm = |prompt: &str| {
        prompts.push(prompt.to_string());
        false
    };
    assert!(!session.delete_node(NodeId(1), &mut confirm));
    assert_eq!(
        prompts,
        vec!["Delete \"Start\" (#1)? 1 connection(s) will also be removed.".to_string()]
    );
    assert_eq!(session.graph().node_count(), 2);
    assert_eq!(session.graph().connection_count(), 1);
}

#[test]
fn test_confirmed_delete_cascades_and_clears_selection() {
    let mut session = seeded_session();
    session.drop_payload(&Toolbox::item(NodeKind::End).drag_payload(), Point::new(400.0, 100.0));
    let from = output_of(session.graph(), 1);
    let to = input_of(session.graph(), 2);
    session.pointer(PointerEvent::Down(from));
    session.pointer(PointerEvent::Up(to));

    let grab = body_of(session.graph(), 2);
    session.pointer(PointerEvent::Down(grab));
    session.pointer(PointerEvent::Up(grab));
    assert_eq!(session.selection(), Some(NodeId(2)));

    assert!(session.delete_node(NodeId(2), &mut answer(true)));
    assert_eq!(session.graph().node_count(), 1);
    assert_eq!(session.graph().connection_count(), 0);
    assert_eq!(session.selection(), None);
    assert_eq!(session.surface().beziers().count(), 0);
}

#[test]
fn test_delete_of_missing_node_does_not_prompt() {
    let mut session = seeded_session();
    let mut asked = false;
    let mut confirm = |_: &str| {
        asked = true;
        true
    };
    assert!(!session.delete_node(NodeId(42), &mut confirm));
    assert!(!asked);
}

#[test]
fn test_undo_and_redo_walk_through_edits() {
    let mut session = seeded_session();
    session.drop_payload(&Toolbox::item(NodeKind::End).drag_payload(), Point::new(400.0, 100.0));

    let grab = body_of(session.graph(), 1);
    session.pointer(PointerEvent::Down(grab));
    session.pointer(PointerEvent::Move(Point::new(grab.x, grab.y + 100.0)));
    session.pointer(PointerEvent::Up(Point::new(grab.x, grab.y + 100.0)));
    assert!(session.delete_node(NodeId(2), &mut answer(true)));

    // delete
    assert!(session.undo().unwrap());
    assert_eq!(session.graph().node_count(), 2);
    // drag
    assert!(session.undo().unwrap());
    assert_eq!(
        session.graph().find_node(NodeId(1)).unwrap().position,
        Point::new(100.0, 100.0)
    );
    // drop
    assert!(session.undo().unwrap());
    assert_eq!(session.graph().node_count(), 1);
    assert!(!session.can_undo());
    assert!(!session.undo().unwrap());

    assert!(session.redo().unwrap());
    assert!(session.redo().unwrap());
    assert_eq!(
        session.graph().find_node(NodeId(1)).unwrap().position,
        Point::new(100.0, 200.0)
    );
    assert!(session.redo().unwrap());
    assert_eq!(session.graph().node_count(), 1);
    assert!(!session.can_redo());
}

#[test]
fn test_new_edit_after_undo_discards_redo() {
    let mut session = seeded_session();
    session.drop_payload(&Toolbox::item(NodeKind::End).drag_payload(), Point::new(400.0, 100.0));
    session.undo().unwrap();
    assert!(session.can_redo());

    session.drop_payload(&Toolbox::item(NodeKind::Delay).drag_payload(), Point::new(400.0, 100.0));
    assert!(!session.can_redo());
    // The undone node's id is not reused.
    assert!(session.graph().find_node(NodeId(3)).is_some());
}

#[test]
fn test_click_without_movement_adds_no_history() {
    let mut session = seeded_session();
    let grab = body_of(session.graph(), 1);
    session.pointer(PointerEvent::Down(grab));
    session.pointer(PointerEvent::Up(grab));
    assert!(!session.can_undo());
}

#[test]
fn test_history_limit_is_respected() {
    let config = EditorConfig {
        history_limit: 2,
        ..EditorConfig::default()
    };
    let mut session = EditorSession::new(config, RecordingSurface::new());
    for _ in 0..4 {
        session.drop_payload(&Toolbox::item(NodeKind::End).drag_payload(), Point::new(0.0, 0.0));
    }

    assert!(session.undo().unwrap());
    assert!(session.undo().unwrap());
    assert!(!session.undo().unwrap());
    assert_eq!(session.graph().node_count(), 3);
}
