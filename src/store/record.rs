use crate::error::StoreError;
use crate::graph::{Edge, WorkflowGraph};
use crate::node::Node;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a stored workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    #[default]
    Draft,
    Active,
    Archived,
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowStatus::Draft => write!(f, "draft"),
            WorkflowStatus::Active => write!(f, "active"),
            WorkflowStatus::Archived => write!(f, "archived"),
        }
    }
}

/// Descriptive fields supplied by the user when saving a workflow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowMeta {
    pub name: String,
    pub description: String,
    pub created_by: String,
    pub is_template: bool,
    pub template_category: Option<String>,
    pub tags: Vec<String>,
}

impl WorkflowMeta {
    pub fn new(name: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_by: created_by.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn as_template(mut self, category: impl Into<String>) -> Self {
        self.is_template = true;
        self.template_category = Some(category.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Durable workflow document as handed to the persistence collaborator.
///
/// Nodes and edges are each stored as an independently encoded JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub nodes: String,
    pub edges: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
    pub is_template: bool,
    pub template_category: Option<String>,
    pub status: WorkflowStatus,
    pub tags: Vec<String>,
}

impl WorkflowRecord {
    /// Serializes `graph` into a new draft record.
    pub fn from_graph(
        id: impl Into<String>,
        meta: WorkflowMeta,
        graph: &WorkflowGraph,
    ) -> Result<Self, StoreError> {
        let now = Utc::now();
        let mut record = Self {
            id: id.into(),
            name: meta.name,
            description: meta.description,
            nodes: String::new(),
            edges: String::new(),
            created_at: now,
            updated_at: now,
            created_by: meta.created_by,
            is_template: meta.is_template,
            template_category: meta.template_category,
            status: WorkflowStatus::Draft,
            tags: meta.tags,
        };
        record.set_graph(graph)?;
        Ok(record)
    }

    /// Replaces the stored nodes and edges with those of `graph`.
    pub fn set_graph(&mut self, graph: &WorkflowGraph) -> Result<(), StoreError> {
        let document = graph.to_document();
        self.nodes = serde_json::to_string(&document.nodes)?;
        self.edges = serde_json::to_string(&document.edges)?;
        Ok(())
    }

    pub fn decode_nodes(&self) -> Result<Vec<Node>, StoreError> {
        Ok(serde_json::from_str(&self.nodes)?)
    }

    pub fn decode_edges(&self) -> Result<Vec<Edge>, StoreError> {
        Ok(serde_json::from_str(&self.edges)?)
    }

    /// Decodes the stored nodes and edges back into a graph.
    pub fn graph(&self) -> Result<WorkflowGraph, StoreError> {
        WorkflowGraph::from_parts(self.decode_nodes()?, self.decode_edges()?)
            .map_err(|e| StoreError::Serialization(e.to_string()))
    }
}
