use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Delivery channel of a notification step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Sms,
    #[serde(rename = "whatsapp", alias = "whatsApp")]
    WhatsApp,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Email => write!(f, "Email"),
            Channel::Sms => write!(f, "SMS"),
            Channel::WhatsApp => write!(f, "WhatsApp"),
        }
    }
}

/// Reference to a file held by the external file storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub file_id: String,
    pub name: String,
}

impl Attachment {
    pub fn new(file_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            name: name.into(),
        }
    }
}

/// Sends a message to the applicant over zero or more channels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationTask {
    pub label: String,
    #[serde(default)]
    pub channels: BTreeSet<Channel>,
}

/// Take-home assignment handed to the applicant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentTask {
    pub label: String,
    #[serde(default)]
    pub url: String,
    pub deadline: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Scheduled interview with the applicant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewTask {
    pub label: String,
    #[serde(default)]
    pub meeting_link: String,
    pub scheduled_at: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Payload of a task node, discriminated by `taskKind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "taskKind")]
pub enum TaskData {
    Notification(NotificationTask),
    Assignment(AssignmentTask),
    Interview(InterviewTask),
}

impl TaskData {
    pub fn label(&self) -> &str {
        match self {
            TaskData::Notification(t) => &t.label,
            TaskData::Assignment(t) => &t.label,
            TaskData::Interview(t) => &t.label,
        }
    }

    pub fn label_mut(&mut self) -> &mut String {
        match self {
            TaskData::Notification(t) => &mut t.label,
            TaskData::Assignment(t) => &mut t.label,
            TaskData::Interview(t) => &mut t.label,
        }
    }
}
