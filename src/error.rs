use crate::node::NodeKind;
use crate::validator::ValidationFailure;
use thiserror::Error;

/// Errors raised by the in-memory graph structure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("A node with id '{0}' already exists in the workflow")]
    DuplicateNodeId(String),

    #[error("Node '{0}' not found in the workflow")]
    NodeNotFound(String),

    #[error("Failed to convert custom data into a workflow graph: {0}")]
    ConversionError(String),
}

/// Errors raised by node configuration forms.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Field '{field}' does not exist on {kind} nodes")]
    FieldNotApplicable { field: &'static str, kind: NodeKind },
}

/// Errors reported by the workflow persistence collaborator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Workflow document '{0}' not found")]
    NotFound(String),

    #[error("Workflow document '{0}' already exists")]
    AlreadyExists(String),

    #[error("Failed to serialize workflow: {0}")]
    Serialization(String),

    #[error("Workflow store unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

/// Errors surfaced by a builder session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("Workflow is not valid: {0}")]
    Invalid(#[from] ValidationFailure),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
