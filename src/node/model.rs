use super::layout::{HandleSide, LayoutHints, Position};
use super::task::{AssignmentTask, InterviewTask, NotificationTask, TaskData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of node variants a workflow can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Start,
    End,
    Notification,
    Assignment,
    Interview,
}

impl NodeKind {
    pub const ALL: [NodeKind; 5] = [
        NodeKind::Start,
        NodeKind::End,
        NodeKind::Notification,
        NodeKind::Assignment,
        NodeKind::Interview,
    ];

    /// The tag the builder UI uses when requesting a node of this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Start => "start",
            NodeKind::End => "end",
            NodeKind::Notification => "notification",
            NodeKind::Assignment => "assignment",
            NodeKind::Interview => "interview",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        NodeKind::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Start and End are the two structurally privileged variants.
    pub fn is_terminal(&self) -> bool {
        matches!(self, NodeKind::Start | NodeKind::End)
    }

    /// Variant-appropriate default payload: empty strings, empty lists and `now` for timestamps.
    pub fn default_data(&self, label: impl Into<String>, now: DateTime<Utc>) -> NodeData {
        let label = label.into();
        match self {
            NodeKind::Start => NodeData::Start { label },
            NodeKind::End => NodeData::End { label },
            NodeKind::Notification => NodeData::Task(TaskData::Notification(NotificationTask {
                label,
                channels: Default::default(),
            })),
            NodeKind::Assignment => NodeData::Task(TaskData::Assignment(AssignmentTask {
                label,
                url: String::new(),
                deadline: now,
                description: String::new(),
                attachments: Vec::new(),
            })),
            NodeKind::Interview => NodeData::Task(TaskData::Interview(InterviewTask {
                label,
                meeting_link: String::new(),
                scheduled_at: now,
                description: String::new(),
                attachments: Vec::new(),
            })),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Start => "Start",
            NodeKind::End => "End",
            NodeKind::Notification => "Notification",
            NodeKind::Assignment => "Assignment",
            NodeKind::Interview => "Interview",
        };
        write!(f, "{}", name)
    }
}

/// Node payload, discriminated by `kind` (and `taskKind` for tasks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum NodeData {
    Start { label: String },
    End { label: String },
    Task(TaskData),
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Start { .. } => NodeKind::Start,
            NodeData::End { .. } => NodeKind::End,
            NodeData::Task(TaskData::Notification(_)) => NodeKind::Notification,
            NodeData::Task(TaskData::Assignment(_)) => NodeKind::Assignment,
            NodeData::Task(TaskData::Interview(_)) => NodeKind::Interview,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            NodeData::Start { label } | NodeData::End { label } => label,
            NodeData::Task(task) => task.label(),
        }
    }

    pub fn label_mut(&mut self) -> &mut String {
        match self {
            NodeData::Start { label } | NodeData::End { label } => label,
            NodeData::Task(task) => task.label_mut(),
        }
    }

    pub fn as_task(&self) -> Option<&TaskData> {
        match self {
            NodeData::Task(task) => Some(task),
            _ => None,
        }
    }
}

/// A vertex of the workflow graph.
///
/// The identifier is fixed at construction; everything else may be replaced
/// by a configuration form or moved on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    id: String,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_position: Option<HandleSide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_position: Option<HandleSide>,
    pub data: NodeData,
}

impl Node {
    /// Builds a node from its parts. No payload contents are checked here.
    pub fn new(id: impl Into<String>, position: Position, data: NodeData) -> Self {
        Self {
            id: id.into(),
            position,
            source_position: None,
            target_position: None,
            data,
        }
    }

    pub fn with_layout(mut self, hints: LayoutHints) -> Self {
        self.source_position = hints.source;
        self.target_position = hints.target;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }

    pub fn label(&self) -> &str {
        self.data.label()
    }

    pub fn is_start(&self) -> bool {
        self.kind() == NodeKind::Start
    }

    pub fn is_end(&self) -> bool {
        self.kind() == NodeKind::End
    }

    pub fn is_terminal(&self) -> bool {
        self.kind().is_terminal()
    }
}
