//! Per-variant editors for a single node's payload.
//!
//! A [`NodeForm`] works on a private draft. Nothing reaches the graph until
//! the form is submitted and the resulting node is handed to
//! [`WorkflowGraph::replace_node`](crate::graph::WorkflowGraph::replace_node).

use crate::error::FormError;
use crate::node::{Attachment, Channel, Node, NodeData, NodeKind, TaskData};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct NodeForm {
    original: Node,
    draft: Node,
}

impl NodeForm {
    pub fn open(node: &Node) -> Self {
        Self {
            original: node.clone(),
            draft: node.clone(),
        }
    }

    pub fn node_id(&self) -> &str {
        self.original.id()
    }

    pub fn kind(&self) -> NodeKind {
        self.original.kind()
    }

    /// The current, uncommitted state of the node.
    pub fn draft(&self) -> &Node {
        &self.draft
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    /// Discards all edits.
    pub fn reset(&mut self) {
        self.draft = self.original.clone();
    }

    /// Finishes editing and returns the updated node, same id as the original.
    pub fn submit(self) -> Node {
        self.draft
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        *self.draft.data.label_mut() = label.into();
    }

    pub fn set_channels(
        &mut self,
        channels: impl IntoIterator<Item = Channel>,
    ) -> Result<(), FormError> {
        let task = self.notification_mut("channels")?;
        task.channels = channels.into_iter().collect::<BTreeSet<_>>();
        Ok(())
    }

    /// Selects the channel if unselected, deselects it otherwise. Returns the new state.
    pub fn toggle_channel(&mut self, channel: Channel) -> Result<bool, FormError> {
        let task = self.notification_mut("channels")?;
        if task.channels.remove(&channel) {
            Ok(false)
        } else {
            task.channels.insert(channel);
            Ok(true)
        }
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> Result<(), FormError> {
        let kind = self.kind();
        match self.task_mut("url")? {
            TaskData::Assignment(task) => task.url = url.into(),
            _ => return Err(FormError::FieldNotApplicable { field: "url", kind }),
        }
        Ok(())
    }

    pub fn set_deadline(&mut self, deadline: DateTime<Utc>) -> Result<(), FormError> {
        let kind = self.kind();
        match self.task_mut("deadline")? {
            TaskData::Assignment(task) => task.deadline = deadline,
            _ => return Err(FormError::FieldNotApplicable { field: "deadline", kind }),
        }
        Ok(())
    }

    pub fn set_meeting_link(&mut self, link: impl Into<String>) -> Result<(), FormError> {
        let kind = self.kind();
        match self.task_mut("meetingLink")? {
            TaskData::Interview(task) => task.meeting_link = link.into(),
            _ => return Err(FormError::FieldNotApplicable { field: "meetingLink", kind }),
        }
        Ok(())
    }

    pub fn set_scheduled_at(&mut self, at: DateTime<Utc>) -> Result<(), FormError> {
        let kind = self.kind();
        match self.task_mut("scheduledAt")? {
            TaskData::Interview(task) => task.scheduled_at = at,
            _ => return Err(FormError::FieldNotApplicable { field: "scheduledAt", kind }),
        }
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), FormError> {
        let kind = self.kind();
        let description = description.into();
        match self.task_mut("description")? {
            TaskData::Assignment(task) => task.description = description,
            TaskData::Interview(task) => task.description = description,
            TaskData::Notification(_) => {
                return Err(FormError::FieldNotApplicable {
                    field: "description",
                    kind,
                });
            }
        }
        Ok(())
    }

    pub fn add_attachment(&mut self, attachment: Attachment) -> Result<(), FormError> {
        self.attachments_mut()?.push(attachment);
        Ok(())
    }

    /// Removes every attachment with `file_id`. Returns whether anything was removed.
    pub fn remove_attachment(&mut self, file_id: &str) -> Result<bool, FormError> {
        let attachments = self.attachments_mut()?;
        let before = attachments.len();
        attachments.retain(|a| a.file_id != file_id);
        Ok(attachments.len() != before)
    }

    fn attachments_mut(&mut self) -> Result<&mut Vec<Attachment>, FormError> {
        let kind = self.kind();
        match self.task_mut("attachments")? {
            TaskData::Assignment(task) => Ok(&mut task.attachments),
            TaskData::Interview(task) => Ok(&mut task.attachments),
            TaskData::Notification(_) => Err(FormError::FieldNotApplicable {
                field: "attachments",
                kind,
            }),
        }
    }

    fn notification_mut(
        &mut self,
        field: &'static str,
    ) -> Result<&mut crate::node::NotificationTask, FormError> {
        let kind = self.kind();
        match self.task_mut(field)? {
            TaskData::Notification(task) => Ok(task),
            _ => Err(FormError::FieldNotApplicable { field, kind }),
        }
    }

    fn task_mut(&mut self, field: &'static str) -> Result<&mut TaskData, FormError> {
        let kind = self.kind();
        match &mut self.draft.data {
            NodeData::Task(task) => Ok(task),
            _ => Err(FormError::FieldNotApplicable { field, kind }),
        }
    }
}
