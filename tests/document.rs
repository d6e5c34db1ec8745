//! Tests for saving, loading and snapshotting flow documents.
mod common;
use common::*;
use flowboard::document::read_document;
use flowboard::prelude::*;

#[test]
fn test_save_hands_document_to_store() {
    let mut session = seeded_session();
    session.drop_payload(&Toolbox::item(NodeKind::End).drag_payload(), Point::new(400.0, 100.0));
    session.set_name("  Welcome call  ");
    session.set_trigger_type(TriggerType::Webhook);

    let mut store: Vec<FlowDocument> = Vec::new();
    let saved = session.save_flow(&mut store).expect("save succeeds");

    assert_eq!(store.len(), 1);
    assert_eq!(store[0], saved);
    assert_eq!(saved.name, "Welcome call");
    assert_eq!(saved.trigger_type, TriggerType::Webhook);
    let ids: Vec<_> = saved.nodes.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![NodeId(1), NodeId(2)]);
    assert_eq!(saved.nodes[1].kind, "end");
}

#[test]
fn test_save_without_name_is_blocked() {
    let mut session = seeded_session();
    let mut store: Vec<FlowDocument> = Vec::new();

    assert!(matches!(session.save_flow(&mut store), Err(SaveError::MissingName)));
    session.set_name("   ");
    assert!(matches!(session.save_flow(&mut store), Err(SaveError::MissingName)));
    assert!(store.is_empty());
}

#[test]
fn test_load_restores_ids_and_connections() {
    let document = FlowDocument::from_json(SAMPLE_FLOW_JSON).unwrap();
    assert_eq!(document.trigger_type, TriggerType::Outbound);

    let mut graph = document.into_graph().expect("sample flow is valid");
    let ids: Vec<_> = graph.nodes().map(|n| n.id).collect();
    assert_eq!(ids, vec![NodeId(1), NodeId(4), NodeId(7)]);

    let edges: Vec<_> = graph
        .connections()
        .iter()
        .map(|c| (c.source.0, c.target.0, c.label.as_str()))
        .collect();
    assert_eq!(edges, vec![(1, 4, ""), (4, 7, "no"), (4, 7, "")]);

    let question = graph.find_node(NodeId(4)).unwrap();
    assert_eq!(question.size, Size::NODE);
    assert_eq!(question.data.get("variable").map(String::as_str), Some("interest"));

    let next = graph.add_node(NodeKind::Delay, "Delay", 0.0, 0.0).unwrap().id;
    assert_eq!(next, NodeId(8));
}

#[test]
fn test_load_accepts_name_alias_and_missing_sections() {
    let json = r#"{ "name": "Tiny", "nodes": [
        { "id": 3, "type": "ai", "name": "Classifier", "position": { "x": 0, "y": 0 } }
    ] }"#;
    let document = FlowDocument::from_json(json).unwrap();
    assert_eq!(document.trigger_type, TriggerType::Inbound);
    assert!(document.connections.is_empty());

    let graph = document.into_graph().unwrap();
    let node = graph.find_node(NodeId(3)).unwrap();
    assert_eq!(node.kind, NodeKind::Ai);
    assert_eq!(node.title, "Classifier");
}

#[test]
fn test_load_rejects_unknown_node_type() {
    let json = r#"{ "name": "Bad", "nodes": [
        { "id": 1, "type": "trigger", "title": "Start", "position": { "x": 0, "y": 0 } },
        { "id": 2, "type": "teleport", "title": "??", "position": { "x": 0, "y": 0 } }
    ] }"#;
    let err = FlowDocument::from_json(json).unwrap().into_graph().unwrap_err();
    assert_eq!(
        err,
        LoadError::UnknownNodeType {
            node_id: NodeId(2),
            tag: "teleport".to_string()
        }
    );
}

#[test]
fn test_load_rejects_duplicate_ids() {
    let json = r#"{ "name": "Bad", "nodes": [
        { "id": 5, "type": "trigger", "title": "Start", "position": { "x": 0, "y": 0 } },
        { "id": 5, "type": "end", "title": "End", "position": { "x": 0, "y": 0 } }
    ] }"#;
    let err = FlowDocument::from_json(json).unwrap().into_graph().unwrap_err();
    assert_eq!(err, LoadError::DuplicateNodeId(NodeId(5)));
}

#[test]
fn test_load_rejects_dangling_connections() {
    let json = r#"{ "name": "Bad",
        "nodes": [
            { "id": 1, "type": "trigger", "title": "Start", "position": { "x": 0, "y": 0 } }
        ],
        "connections": [ { "source": 1, "target": 1 }, { "source": 1, "target": 9 } ] }"#;
    let err = FlowDocument::from_json(json).unwrap().into_graph().unwrap_err();
    assert_eq!(
        err,
        LoadError::DanglingConnection {
            index: 1,
            missing: NodeId(9)
        }
    );
}

#[test]
fn test_load_rejects_largest_possible_id() {
    let json = r#"{ "name": "Huge",
        "nodes": [
            { "id": 4294967295, "type": "end", "title": "End", "position": { "x": 0, "y": 0 } }
        ] }"#;
    let mut session = seeded_session();
    let before = session.graph().clone();

    let err = session.load_document(FlowDocument::from_json(json).unwrap()).unwrap_err();
    assert_eq!(err, LoadError::IdSpaceExhausted(NodeId(u32::MAX)));
    assert_eq!(session.graph(), &before);
}

#[test]
fn test_drop_after_last_id_is_refused() {
    let json = r#"{ "name": "Nearly full",
        "nodes": [
            { "id": 4294967294, "type": "trigger", "title": "Start",
              "position": { "x": 0, "y": 0 } }
        ] }"#;
    let mut session = seeded_session();
    session.load_document(FlowDocument::from_json(json).unwrap()).unwrap();

    let payload = Toolbox::item(NodeKind::End).drag_payload();
    assert_eq!(session.drop_payload(&payload, Point::new(0.0, 0.0)), Some(NodeId(u32::MAX)));

    let full = session.graph().clone();
    assert_eq!(session.drop_payload(&payload, Point::new(0.0, 0.0)), None);
    assert_eq!(session.graph(), &full);

    // Only the successful drop is an undo step.
    assert!(session.undo().unwrap());
    assert_eq!(session.graph().node_count(), 1);
}

#[test]
fn test_load_keeps_stored_self_loops() {
    let json = r#"{ "name": "Loop",
        "nodes": [ { "id": 1, "type": "delay", "title": "Wait", "position": { "x": 0, "y": 0 } } ],
        "connections": [ { "source": 1, "target": 1, "label": "again" } ] }"#;
    let graph = FlowDocument::from_json(json).unwrap().into_graph().unwrap();
    assert_eq!(graph.connection_count(), 1);
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let err = FlowDocument::from_json("{ not json").unwrap_err();
    assert!(matches!(err, LoadError::JsonParseError(_)));
}

#[test]
fn test_session_load_replaces_graph_and_is_undoable() {
    let mut session = seeded_session();
    let document = FlowDocument::from_json(SAMPLE_FLOW_JSON).unwrap();
    session.load_document(document).unwrap();

    assert_eq!(session.name(), "Lead qualification");
    assert_eq!(session.trigger_type(), TriggerType::Outbound);
    assert_eq!(session.graph().node_count(), 3);
    assert_eq!(session.surface().beziers().count(), 3);

    assert!(session.undo().unwrap());
    assert_eq!(session.graph().node_count(), 1);
    assert_eq!(session.graph().find_node(NodeId(1)).unwrap().title, "Start");
}

#[test]
fn test_failed_load_leaves_session_untouched() {
    let mut session = seeded_session();
    let before = session.graph().clone();
    let document = FlowDocument::from_json(
        r#"{ "name": "Bad", "nodes": [], "connections": [ { "source": 1, "target": 2 } ] }"#,
    )
    .unwrap();

    assert!(session.load_document(document).is_err());
    assert_eq!(session.graph(), &before);
    assert!(!session.can_undo());
}

#[test]
fn test_json_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path());

    let document = FlowDocument::from_json(SAMPLE_FLOW_JSON).unwrap();
    store.save(&document).unwrap();

    let path = store.path_for(&document.name);
    assert_eq!(path, dir.path().join("Lead_qualification.json"));
    let reread = read_document(&path).unwrap();
    assert_eq!(reread.name, document.name);
    assert_eq!(reread.connections, document.connections);
    assert_eq!(reread.into_graph().unwrap(), document.into_graph().unwrap());
}

#[test]
fn test_reading_a_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_document(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn test_snapshot_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.bin");
    let path = path.to_str().unwrap();

    let mut graph = trigger_and_end();
    graph.add_connection(NodeId(1), NodeId(2), "go");
    GraphSnapshot::capture(&graph).unwrap().save(path).unwrap();

    let restored = GraphSnapshot::from_file(path).unwrap().restore().unwrap();
    assert_eq!(restored, graph);
}
