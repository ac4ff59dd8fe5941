use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Workflow is valid and ready to be activated";

/// Which structural rule a workflow broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FailureCategory {
    /// Start or End count is not exactly one.
    MissingOrDuplicateTerminal,
    /// Edges reference node ids that are not in the graph. Only reported
    /// when the validator is configured to reject dangling edges.
    DanglingEdges,
    /// Task nodes without any incoming or without any outgoing edge.
    DisconnectedNodes,
    /// Task nodes whose in-degree differs from the required fan-in.
    WrongFanIn,
    StartHasIncoming,
    EndHasOutgoing,
}

impl fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureCategory::MissingOrDuplicateTerminal => "MissingOrDuplicateTerminal",
            FailureCategory::DanglingEdges => "DanglingEdges",
            FailureCategory::DisconnectedNodes => "DisconnectedNodes",
            FailureCategory::WrongFanIn => "WrongFanIn",
            FailureCategory::StartHasIncoming => "StartHasIncoming",
            FailureCategory::EndHasOutgoing => "EndHasOutgoing",
        };
        write!(f, "{}", name)
    }
}

/// The first rule a workflow violated, with a user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{message}")]
#[serde(rename_all = "camelCase")]
pub struct ValidationFailure {
    pub category: FailureCategory,
    pub message: String,
    /// Number of offending nodes or edges, for rules that count them.
    pub affected_count: Option<usize>,
    /// Ids of the offending nodes or edges, in graph order.
    pub affected_ids: Vec<String>,
}

impl ValidationFailure {
    pub(super) fn new(category: FailureCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            affected_count: None,
            affected_ids: Vec::new(),
        }
    }

    pub(super) fn with_affected(mut self, ids: Vec<String>) -> Self {
        self.affected_count = Some(ids.len());
        self.affected_ids = ids;
        self
    }
}

/// Outcome of one validation run. Invalid graphs are a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Pass,
    Fail(ValidationFailure),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn failure(&self) -> Option<&ValidationFailure> {
        match self {
            Verdict::Pass => None,
            Verdict::Fail(failure) => Some(failure),
        }
    }

    pub fn category(&self) -> Option<FailureCategory> {
        self.failure().map(|f| f.category)
    }

    /// The single message to show the user for this run.
    pub fn message(&self) -> &str {
        match self {
            Verdict::Pass => SUCCESS_MESSAGE,
            Verdict::Fail(failure) => &failure.message,
        }
    }

    pub fn into_result(self) -> Result<(), ValidationFailure> {
        match self {
            Verdict::Pass => Ok(()),
            Verdict::Fail(failure) => Err(failure),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS: {}", SUCCESS_MESSAGE),
            Verdict::Fail(failure) => write!(f, "FAIL [{}]: {}", failure.category, failure.message),
        }
    }
}
