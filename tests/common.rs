//! Common test utilities for building workflow graphs.
use chrono::{DateTime, TimeZone, Utc};
use saiyo::prelude::*;

#[allow(dead_code)]
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
}

/// Creates a node with a fixed id and default payload for its kind.
#[allow(dead_code)]
pub fn node(kind: NodeKind, id: &str) -> Node {
    Node::new(
        id,
        Position::default(),
        kind.default_data(kind.to_string(), fixed_time()),
    )
}

#[allow(dead_code)]
pub fn start(id: &str) -> Node {
    node(NodeKind::Start, id)
}

#[allow(dead_code)]
pub fn end(id: &str) -> Node {
    node(NodeKind::End, id)
}

#[allow(dead_code)]
pub fn notification(id: &str) -> Node {
    node(NodeKind::Notification, id)
}

#[allow(dead_code)]
pub fn assignment(id: &str) -> Node {
    node(NodeKind::Assignment, id)
}

#[allow(dead_code)]
pub fn interview(id: &str) -> Node {
    node(NodeKind::Interview, id)
}

/// Creates an edge whose id is derived from its endpoints and a sequence number.
#[allow(dead_code)]
pub fn make_edges(pairs: &[(&str, &str)]) -> Vec<Edge> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, (source, target))| Edge::with_id(format!("e{}", i), *source, *target))
        .collect()
}

/// Start -> t1 (twice) -> End: the smallest workflow with a task that passes.
#[allow(dead_code)]
pub fn create_valid_flow() -> (Vec<Node>, Vec<Edge>) {
    (
        vec![start("s1"), interview("t1"), end("e1")],
        make_edges(&[("s1", "t1"), ("s1", "t1"), ("t1", "e1")]),
    )
}

/// Start -> {t1, t2} -> End, where t2 also feeds t1 and t1 also feeds t2.
///
/// Every task has in-degree 2 and the graph contains a cycle.
#[allow(dead_code)]
pub fn create_cyclic_flow() -> (Vec<Node>, Vec<Edge>) {
    (
        vec![start("s1"), notification("t1"), assignment("t2"), end("e1")],
        make_edges(&[
            ("s1", "t1"),
            ("s1", "t2"),
            ("t1", "t2"),
            ("t2", "t1"),
            ("t1", "e1"),
            ("t2", "e1"),
        ]),
    )
}

/// A canvas export of a small workflow, as the builder UI sends it.
#[allow(dead_code)]
pub const CANVAS_JSON: &str = r#"{
  "nodes": [
    {
      "id": "start-1",
      "position": { "x": 250.0, "y": 0.0 },
      "sourcePosition": "bottom",
      "data": { "kind": "Start", "label": "Application received" }
    },
    {
      "id": "notify-1",
      "position": { "x": 100.0, "y": 150.0 },
      "data": {
        "kind": "Task",
        "taskKind": "Notification",
        "label": "Confirm receipt",
        "channels": ["email", "sms"]
      }
    },
    {
      "id": "interview-1",
      "position": { "x": 250.0, "y": 300.0 },
      "targetPosition": "top",
      "data": {
        "kind": "Task",
        "taskKind": "Interview",
        "label": "Technical interview",
        "meetingLink": "https://meet.example.com/abc",
        "scheduledAt": "2024-05-01T09:30:00Z",
        "description": "Pairing session",
        "attachments": [{ "fileId": "f-1", "name": "brief.pdf" }]
      }
    },
    {
      "id": "end-1",
      "position": { "x": 250.0, "y": 450.0 },
      "data": { "kind": "End", "label": "Hired" }
    }
  ],
  "edges": [
    { "id": "a", "source": "start-1", "target": "notify-1" },
    { "id": "b", "source": "start-1", "target": "notify-1" },
    { "id": "c", "source": "notify-1", "target": "interview-1", "sourceHandle": "out" },
    { "id": "d", "source": "start-1", "target": "interview-1" },
    { "id": "e", "source": "interview-1", "target": "end-1" }
  ]
}"#;
