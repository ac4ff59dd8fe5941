//! Tests for node configuration forms.
mod common;
use common::*;
use saiyo::prelude::*;

#[test]
fn test_submit_keeps_id_and_applies_edits() {
    let node = assignment("t1");
    let mut form = NodeForm::open(&node);
    assert!(!form.is_dirty());

    form.set_label("Coding challenge");
    form.set_url("https://tasks.example.com/42").unwrap();
    form.set_deadline(fixed_time()).unwrap();
    form.set_description("Build a small CLI").unwrap();
    form.add_attachment(Attachment::new("f-1", "readme.md")).unwrap();
    assert!(form.is_dirty());

    let updated = form.submit();
    assert_eq!(updated.id(), "t1");
    assert_eq!(updated.position, node.position);
    match &updated.data {
        NodeData::Task(TaskData::Assignment(task)) => {
            assert_eq!(task.label, "Coding challenge");
            assert_eq!(task.url, "https://tasks.example.com/42");
            assert_eq!(task.deadline, fixed_time());
            assert_eq!(task.description, "Build a small CLI");
            assert_eq!(task.attachments.len(), 1);
        }
        other => panic!("Expected assignment payload, got {:?}", other),
    }
}

#[test]
fn test_edits_do_not_touch_graph_until_submit() {
    let mut session = BuilderSession::new();
    let id = session
        .add_node("interview", "Interview", Position::default())
        .unwrap();

    let mut form = session.open_form(&id).unwrap();
    form.set_label("Culture fit");
    form.set_meeting_link("https://meet.example.com/xyz").unwrap();
    assert_eq!(session.graph().node(&id).unwrap().label(), "Interview");

    session.submit_form(form).unwrap();
    let node = session.graph().node(&id).unwrap();
    assert_eq!(node.label(), "Culture fit");
    match &node.data {
        NodeData::Task(TaskData::Interview(task)) => {
            assert_eq!(task.meeting_link, "https://meet.example.com/xyz")
        }
        other => panic!("Expected interview payload, got {:?}", other),
    }
}

#[test]
fn test_channel_selection() {
    let mut form = NodeForm::open(&notification("t1"));
    assert!(form.toggle_channel(Channel::WhatsApp).unwrap());
    assert!(form.toggle_channel(Channel::Email).unwrap());
    assert!(!form.toggle_channel(Channel::WhatsApp).unwrap());

    let node = form.submit();
    match &node.data {
        NodeData::Task(TaskData::Notification(task)) => {
            assert_eq!(task.channels.iter().copied().collect::<Vec<_>>(), vec![Channel::Email]);
        }
        other => panic!("Expected notification payload, got {:?}", other),
    }

    let mut form = NodeForm::open(&node);
    form.set_channels([Channel::Sms, Channel::Sms]).unwrap();
    assert_eq!(form.draft().data.as_task().map(|t| t.label()), Some("Notification"));
}

#[test]
fn test_fields_of_other_variants_are_rejected() {
    let mut form = NodeForm::open(&notification("t1"));
    assert_eq!(
        form.set_url("https://example.com"),
        Err(FormError::FieldNotApplicable {
            field: "url",
            kind: NodeKind::Notification,
        })
    );
    assert!(form.set_description("x").is_err());
    assert!(form.add_attachment(Attachment::new("f", "f")).is_err());

    let mut form = NodeForm::open(&start("s1"));
    assert!(form.toggle_channel(Channel::Email).is_err());
    assert!(form.set_scheduled_at(fixed_time()).is_err());
    form.set_label("Applied");
    assert_eq!(form.submit().label(), "Applied");

    let mut form = NodeForm::open(&interview("t2"));
    let err = form.set_deadline(fixed_time()).unwrap_err();
    assert!(err.to_string().contains("deadline"));
    assert!(err.to_string().contains("Interview"));
}

#[test]
fn test_reset_and_remove_attachment() {
    let mut form = NodeForm::open(&interview("t1"));
    form.add_attachment(Attachment::new("a", "a.pdf")).unwrap();
    form.add_attachment(Attachment::new("b", "b.pdf")).unwrap();
    assert!(form.remove_attachment("a").unwrap());
    assert!(!form.remove_attachment("missing").unwrap());

    form.reset();
    assert!(!form.is_dirty());
    assert_eq!(form.node_id(), "t1");
    assert_eq!(form.kind(), NodeKind::Interview);
}
