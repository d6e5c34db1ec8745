//! Common test utilities for building sessions, graphs and documents.
use flowboard::prelude::*;

/// A session with the default seed (trigger #1 "Start" at 100,100) painting
/// onto a recording surface.
#[allow(dead_code)]
pub fn seeded_session() -> EditorSession<RecordingSurface> {
    EditorSession::new(EditorConfig::default(), RecordingSurface::new())
}

/// A session without a seed node.
#[allow(dead_code)]
pub fn empty_session() -> EditorSession<RecordingSurface> {
    let config = EditorConfig {
        seed: None,
        ..EditorConfig::default()
    };
    EditorSession::new(config, RecordingSurface::new())
}

/// Graph with trigger #1 at (100,100) and end #2 at (400,100).
#[allow(dead_code)]
pub fn trigger_and_end() -> GraphModel {
    let mut graph = GraphModel::new();
    graph.add_node(NodeKind::Trigger, "Start", 100.0, 100.0);
    graph.add_node(NodeKind::End, "End", 400.0, 100.0);
    graph
}

/// Centre of a node's output connector.
#[allow(dead_code)]
pub fn output_of(graph: &GraphModel, id: u32) -> Point {
    let node = graph.find_node(NodeId(id)).expect("node exists");
    Point::new(node.position.x + node.size.width, node.center().y)
}

/// Centre of a node's input connector.
#[allow(dead_code)]
pub fn input_of(graph: &GraphModel, id: u32) -> Point {
    let node = graph.find_node(NodeId(id)).expect("node exists");
    Point::new(node.position.x, node.center().y)
}

/// A point inside a node's body, away from both connectors.
#[allow(dead_code)]
pub fn body_of(graph: &GraphModel, id: u32) -> Point {
    let node = graph.find_node(NodeId(id)).expect("node exists");
    Point::new(node.position.x + 40.0, node.position.y + 20.0)
}

/// Confirmation callback that always answers `answer`.
#[allow(dead_code)]
pub fn answer(answer: bool) -> impl FnMut(&str) -> bool {
    move |_prompt: &str| answer
}

/// A saved flow with three nodes, a labeled branch, and a duplicate edge.
#[allow(dead_code)]
pub const SAMPLE_FLOW_JSON: &str = r#"{
  "name": "Lead qualification",
  "triggerType": "outbound",
  "nodes": [
    { "id": 1, "type": "trigger", "title": "Start", "position": { "x": 100, "y": 100 },
      "data": { "event": "outbound" } },
    { "id": 4, "type": "question", "title": "Interested?", "position": { "x": 400, "y": 100 },
      "size": { "width": 999, "height": 999 },
      "data": { "question": "Are you interested?", "options": "yes\nno", "variable": "interest" } },
    { "id": 7, "type": "end", "title": "Bye", "position": { "x": 700, "y": 250 } }
  ],
  "connections": [
    { "source": 1, "target": 4, "label": "" },
    { "sourceId": 4, "targetId": 7, "label": "no" },
    { "source": 4, "target": 7 }
  ]
}"#;
