//! Tests for builder sessions and the workflow store.
mod common;
use common::*;
use saiyo::prelude::*;
use saiyo::session::{activate, archive};

fn terminal_ids(session: &BuilderSession) -> (String, String) {
    let start = session.graph().nodes().find(|n| n.is_start()).unwrap();
    let end = session.graph().nodes().find(|n| n.is_end()).unwrap();
    (start.id().to_string(), end.id().to_string())
}

/// A session holding Start -> interview (twice) -> End.
fn valid_session() -> (BuilderSession, String) {
    let mut session = BuilderSession::new();
    let (start, end) = terminal_ids(&session);
    let task = session
        .add_node("interview", "Interview", Position::new(250.0, 200.0))
        .unwrap();
    session.connect(&start, &task).unwrap();
    session.connect(&start, &task).unwrap();
    session.connect(&task, &end).unwrap();
    (session, task)
}

#[test]
fn test_new_session_is_seeded() {
    let session = BuilderSession::new();
    assert_eq!(session.graph().node_count(), 2);
    assert!(session.workflow_id().is_none());
    assert!(session.validate().is_pass());
}

#[test]
fn test_add_unknown_node_type() {
    let mut session = BuilderSession::new();
    assert!(session.add_node("webhook", "Hook", Position::default()).is_none());
    assert_eq!(session.graph().node_count(), 2);
}

#[test]
fn test_drag_and_drop() {
    let mut session = BuilderSession::new();
    assert!(session.drop_at(Position::default()).is_none());

    session.begin_drag("notification");
    assert_eq!(session.drag_state().dragged(), Some("notification"));
    let id = session.drop_at(Position::new(5.0, 6.0)).expect("node created");
    assert!(!session.drag_state().is_dragging());

    let node = session.graph().node(&id).unwrap();
    assert_eq!(node.kind(), NodeKind::Notification);
    assert_eq!(node.position, Position::new(5.0, 6.0));

    session.begin_drag("webhook");
    assert!(session.drop_at(Position::default()).is_none());
    assert!(!session.drag_state().is_dragging());

    session.begin_drag("end");
    session.cancel_drag();
    assert!(session.drop_at(Position::default()).is_none());
    assert_eq!(session.graph().node_count(), 3);
}

#[test]
fn test_handle_drop_with_explicit_state() {
    let factory = NodeFactory::new();
    let mut graph = WorkflowGraph::new();
    let mut drag = DragState::default();

    drag.begin("assignment");
    let id = saiyo::session::handle_drop(&mut drag, &factory, &mut graph, Position::default())
        .expect("node created");
    assert_eq!(graph.node(&id).unwrap().kind(), NodeKind::Assignment);
    assert!(drag.dragged().is_none());
}

#[test]
fn test_connect_requires_existing_nodes() {
    let mut session = BuilderSession::new();
    let (start, _) = terminal_ids(&session);
    let err = session.connect(&start, "missing").unwrap_err();
    assert_eq!(
        err,
        SessionError::Graph(GraphError::NodeNotFound("missing".to_string()))
    );
    assert_eq!(session.graph().edge_count(), 0);
}

#[test]
fn test_remove_node_prunes_incident_edges() {
    let (mut session, task) = valid_session();
    assert_eq!(session.graph().edge_count(), 3);

    let removed = session.remove_node(&task).unwrap();
    assert_eq!(removed.kind(), NodeKind::Interview);
    assert_eq!(session.graph().edge_count(), 0);
    assert!(session.validate().is_pass());

    assert!(matches!(
        session.remove_node(&task),
        Err(SessionError::Graph(GraphError::NodeNotFound(_)))
    ));
}

#[test]
fn test_disconnect_breaks_validity() {
    let (mut session, _) = valid_session();
    assert!(session.validate().is_pass());

    let edge_id = session.graph().edges()[0].id.clone();
    assert!(session.disconnect(&edge_id).is_some());
    assert!(session.disconnect(&edge_id).is_none());
    assert_eq!(
        session.validate().category(),
        Some(FailureCategory::WrongFanIn)
    );
}

#[test]
fn test_save_rejects_invalid_graph() {
    let mut session = BuilderSession::new();
    session
        .add_node("notification", "Notify", Position::default())
        .unwrap();
    let mut store = MemoryStore::new();

    let err = session
        .save(&mut store, WorkflowMeta::new("Broken", "user-1"))
        .unwrap_err();
    match err {
        SessionError::Invalid(failure) => {
            assert_eq!(failure.category, FailureCategory::DisconnectedNodes)
        }
        other => panic!("Expected Invalid error, got {:?}", other),
    }
    assert!(store.is_empty());
    assert!(session.workflow_id().is_none());
}

#[test]
fn test_save_creates_then_updates() {
    let (mut session, task) = valid_session();
    let mut store = MemoryStore::new();

    let meta = WorkflowMeta::new("Backend hiring", "user-1")
        .with_description("Two interview rounds")
        .with_tags(["engineering", "backend"]);
    let created = session.save(&mut store, meta).unwrap();
    assert_eq!(created.status, WorkflowStatus::Draft);
    assert_eq!(created.tags, vec!["engineering", "backend"]);
    assert_eq!(session.workflow_id(), Some(created.id.as_str()));

    let stored_graph = store.get(&created.id).unwrap().graph().unwrap();
    assert_eq!(stored_graph.to_document(), session.graph().to_document());

    let mut form = session.open_form(&task).unwrap();
    form.set_label("Final interview");
    session.submit_form(form).unwrap();

    let updated = session
        .save(&mut store, WorkflowMeta::new("Backend hiring v2", "user-1"))
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(store.len(), 1);

    let stored = store.get(&created.id).unwrap();
    assert_eq!(stored.name, "Backend hiring v2");
    assert_eq!(
        stored.graph().unwrap().node(&task).unwrap().label(),
        "Final interview"
    );
}

#[test]
fn test_record_stores_nodes_and_edges_as_json_strings() {
    let (nodes, edges) = create_valid_flow();
    let graph = WorkflowGraph::from_parts(nodes.clone(), edges.clone()).unwrap();
    let record = WorkflowRecord::from_graph("wf-1", WorkflowMeta::new("Flow", "u"), &graph).unwrap();

    let decoded_nodes: Vec<Node> = serde_json::from_str(&record.nodes).unwrap();
    let decoded_edges: Vec<Edge> = serde_json::from_str(&record.edges).unwrap();
    assert_eq!(decoded_nodes, nodes);
    assert_eq!(decoded_edges, edges);

    let json = serde_json::to_value(&record).unwrap();
    assert!(json["nodes"].is_string());
    assert_eq!(json["status"], "draft");
    assert_eq!(json["createdBy"], "u");
    assert_eq!(json["isTemplate"], false);
}

#[test]
fn test_open_existing_workflow() {
    let (mut session, _) = valid_session();
    let mut store = MemoryStore::new();
    let record = session
        .save(&mut store, WorkflowMeta::new("Flow", "user-1"))
        .unwrap();

    let reopened =
        BuilderSession::open(&store, &record.id, NodeFactory::new(), Validator::default())
            .unwrap();
    assert_eq!(reopened.workflow_id(), Some(record.id.as_str()));
    assert_eq!(reopened.graph().node_count(), 3);
    assert!(reopened.validate().is_pass());

    let missing =
        BuilderSession::open(&store, "nope", NodeFactory::new(), Validator::default());
    assert!(matches!(
        missing,
        Err(SessionError::Store(StoreError::NotFound(id))) if id == "nope"
    ));
}

#[test]
fn test_activate_and_archive() {
    let (mut session, _) = valid_session();
    let mut store = MemoryStore::new();
    let record = session
        .save(&mut store, WorkflowMeta::new("Flow", "user-1"))
        .unwrap();

    let active = activate(&mut store, &Validator::default(), &record.id).unwrap();
    assert_eq!(active.status, WorkflowStatus::Active);
    assert_eq!(store.get(&record.id).unwrap().status, WorkflowStatus::Active);

    let archived = archive(&mut store, &record.id).unwrap();
    assert_eq!(archived.status, WorkflowStatus::Archived);
}

#[test]
fn test_activate_revalidates_stored_graph() {
    let mut store = MemoryStore::new();
    let graph = WorkflowGraph::from_parts(
        vec![start("s1"), notification("t1"), end("e1")],
        make_edges(&[("s1", "t1"), ("t1", "e1")]),
    )
    .unwrap();
    let record = WorkflowRecord::from_graph("wf-1", WorkflowMeta::new("Flow", "u"), &graph).unwrap();
    store.create(record).unwrap();

    let err = activate(&mut store, &Validator::default(), "wf-1").unwrap_err();
    assert!(matches!(err, SessionError::Invalid(ref f) if f.category == FailureCategory::WrongFanIn));
    assert_eq!(store.get("wf-1").unwrap().status, WorkflowStatus::Draft);

    let lenient = Validator::builder().with_required_fan_in(1).build();
    assert!(activate(&mut store, &lenient, "wf-1").is_ok());
}

#[test]
fn test_store_listing_and_delete() {
    let mut store = MemoryStore::new();
    let graph = WorkflowGraph::seeded(&NodeFactory::new());

    for (id, owner, template) in [("a", "alice", false), ("b", "bob", true), ("c", "alice", true)] {
        let mut meta = WorkflowMeta::new(id, owner);
        if template {
            meta = meta.as_template("engineering");
        }
        store
            .create(WorkflowRecord::from_graph(id, meta, &graph).unwrap())
            .unwrap();
    }

    let alice: Vec<String> = store
        .list_by_owner("alice")
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(alice.len(), 2);
    assert!(alice.contains(&"a".to_string()) && alice.contains(&"c".to_string()));

    let templates = store.list_templates().unwrap();
    assert_eq!(templates.len(), 2);
    assert!(templates
        .iter()
        .all(|r| r.template_category.as_deref() == Some("engineering")));

    let duplicate = WorkflowRecord::from_graph("a", WorkflowMeta::new("a", "x"), &graph).unwrap();
    assert_eq!(
        store.create(duplicate),
        Err(StoreError::AlreadyExists("a".to_string()))
    );

    store.delete("a").unwrap();
    assert_eq!(store.get("a"), Err(StoreError::NotFound("a".to_string())));
    assert_eq!(store.delete("a"), Err(StoreError::NotFound("a".to_string())));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_update_missing_record_fails() {
    let mut store = MemoryStore::new();
    let graph = WorkflowGraph::seeded(&NodeFactory::new());
    let record = WorkflowRecord::from_graph("ghost", WorkflowMeta::new("g", "u"), &graph).unwrap();
    assert_eq!(
        store.update(record),
        Err(StoreError::NotFound("ghost".to_string()))
    );
}

#[test]
fn test_store_snapshot_round_trip() {
    let (mut session, _) = valid_session();
    let mut store = MemoryStore::new();
    let record = session
        .save(&mut store, WorkflowMeta::new("Flow", "user-1").as_template("sales"))
        .unwrap();

    let path = std::env::temp_dir().join(format!("saiyo-store-{}.bin", generate_id()));
    let path = path.to_string_lossy().to_string();
    store.save(&path).unwrap();

    let loaded = MemoryStore::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.len(), 1);
    let restored = loaded.get(&record.id).unwrap();
    assert_eq!(restored, record);
    assert!(restored.graph().unwrap().node_count() == 3);

    assert!(matches!(
        MemoryStore::from_file("/definitely/not/here.bin"),
        Err(StoreError::Unavailable(_))
    ));
}
