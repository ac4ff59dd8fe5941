use crate::graph::{Edge, WorkflowGraph};
use crate::node::{Node, NodeKind};
use itertools::Itertools;

mod degree;
mod verdict;

pub use degree::DegreeTable;
pub use verdict::{FailureCategory, SUCCESS_MESSAGE, ValidationFailure, Verdict};

/// Number of incoming edges every task node must have unless configured otherwise.
pub const DEFAULT_REQUIRED_FAN_IN: usize = 2;

/// Decides whether a node/edge set is a well-formed workflow.
///
/// Rules are checked in a fixed order and the first one that fails is
/// reported:
///
/// 1. exactly one Start and exactly one End node
/// 2. (optional) no edge references an unknown node id
/// 3. every task node has at least one incoming and one outgoing edge
/// 4. every task node has exactly `required_fan_in` incoming edges
/// 5. the Start node has no incoming edges
/// 6. the End node has no outgoing edges
///
/// Reachability and acyclicity are not checked.
#[derive(Debug, Clone)]
pub struct Validator {
    required_fan_in: usize,
    reject_dangling_edges: bool,
}

pub struct ValidatorBuilder {
    required_fan_in: usize,
    reject_dangling_edges: bool,
}

impl ValidatorBuilder {
    pub fn new() -> Self {
        Self {
            required_fan_in: DEFAULT_REQUIRED_FAN_IN,
            reject_dangling_edges: false,
        }
    }

    pub fn with_required_fan_in(mut self, fan_in: usize) -> Self {
        self.required_fan_in = fan_in;
        self
    }

    /// When enabled, edges whose endpoints are not nodes of the graph fail
    /// validation instead of silently inflating degree counts.
    pub fn with_dangling_edge_check(mut self, enabled: bool) -> Self {
        self.reject_dangling_edges = enabled;
        self
    }

    pub fn build(self) -> Validator {
        Validator {
            required_fan_in: self.required_fan_in,
            reject_dangling_edges: self.reject_dangling_edges,
        }
    }
}

impl Default for ValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Validator {
    fn default() -> Self {
        ValidatorBuilder::new().build()
    }
}

/// Validates with the default rules.
pub fn validate<'a>(nodes: impl IntoIterator<Item = &'a Node>, edges: &[Edge]) -> Verdict {
    Validator::default().validate(nodes, edges)
}

impl Validator {
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    pub fn required_fan_in(&self) -> usize {
        self.required_fan_in
    }

    pub fn validate_graph(&self, graph: &WorkflowGraph) -> Verdict {
        self.validate(graph.nodes(), graph.edges())
    }

    /// Runs all rules against a read-only snapshot of the workflow.
    pub fn validate<'a>(&self, nodes: impl IntoIterator<Item = &'a Node>, edges: &[Edge]) -> Verdict {
        let nodes: Vec<&Node> = nodes.into_iter().collect();
        let verdict = match self.check(&nodes, edges) {
            Ok(()) => Verdict::Pass,
            Err(failure) => Verdict::Fail(failure),
        };
        log::info!(
            "Validated workflow ({} nodes, {} edges): {}",
            nodes.len(),
            edges.len(),
            verdict
        );
        verdict
    }

    fn check(&self, nodes: &[&Node], edges: &[Edge]) -> Result<(), ValidationFailure> {
        let (start, end) = Self::check_terminals(nodes)?;

        if self.reject_dangling_edges {
            Self::check_dangling_edges(nodes, edges)?;
        }

        let degrees = DegreeTable::build(nodes, edges);
        let tasks: Vec<&Node> = nodes.iter().copied().filter(|n| !n.is_terminal()).collect();

        let idle = Self::ids_where(&tasks, |n| {
            degrees.in_degree(n.id()) == 0 || degrees.out_degree(n.id()) == 0
        });
        if !idle.is_empty() {
            let message = format!(
                "{} node(s) are not connected. Every step needs at least one incoming and one outgoing connection",
                idle.len()
            );
            return Err(
                ValidationFailure::new(FailureCategory::DisconnectedNodes, message)
                    .with_affected(idle),
            );
        }

        let wrong_fan_in =
            Self::ids_where(&tasks, |n| degrees.in_degree(n.id()) != self.required_fan_in);
        if !wrong_fan_in.is_empty() {
            let message = format!(
                "{} node(s) must have exactly {} incoming connections",
                wrong_fan_in.len(),
                self.required_fan_in
            );
            return Err(
                ValidationFailure::new(FailureCategory::WrongFanIn, message)
                    .with_affected(wrong_fan_in),
            );
        }

        if degrees.in_degree(start.id()) != 0 {
            return Err(ValidationFailure::new(
                FailureCategory::StartHasIncoming,
                "The Start node cannot have incoming connections",
            )
            .with_affected(vec![start.id().to_string()]));
        }

        if degrees.out_degree(end.id()) != 0 {
            return Err(ValidationFailure::new(
                FailureCategory::EndHasOutgoing,
                "The End node cannot have outgoing connections",
            )
            .with_affected(vec![end.id().to_string()]));
        }

        Ok(())
    }

    /// Returns the Start and End node when each occurs exactly once.
    fn check_terminals<'a>(nodes: &[&'a Node]) -> Result<(&'a Node, &'a Node), ValidationFailure> {
        let counts = nodes
            .iter()
            .map(|n| n.kind())
            .filter(NodeKind::is_terminal)
            .counts();
        let starts = counts.get(&NodeKind::Start).copied().unwrap_or(0);
        let ends = counts.get(&NodeKind::End).copied().unwrap_or(0);

        let start = nodes.iter().copied().find(|n| n.is_start());
        let end = nodes.iter().copied().find(|n| n.is_end());
        match (start, end) {
            (Some(start), Some(end)) if starts == 1 && ends == 1 => Ok((start, end)),
            _ => Err(ValidationFailure::new(
                FailureCategory::MissingOrDuplicateTerminal,
                format!(
                    "A workflow needs exactly one Start and one End node (found {} Start, {} End)",
                    starts, ends
                ),
            )),
        }
    }

    fn check_dangling_edges(nodes: &[&Node], edges: &[Edge]) -> Result<(), ValidationFailure> {
        let dangling: Vec<String> = edges
            .iter()
            .filter(|e| {
                let known = |id: &str| nodes.iter().any(|n| n.id() == id);
                !known(&e.source) || !known(&e.target)
            })
            .map(|e| e.id.clone())
            .collect();
        if dangling.is_empty() {
            return Ok(());
        }
        let message = format!(
            "{} connection(s) point to nodes that are not part of the workflow",
            dangling.len()
        );
        Err(ValidationFailure::new(FailureCategory::DanglingEdges, message).with_affected(dangling))
    }

    fn ids_where(tasks: &[&Node], predicate: impl Fn(&Node) -> bool) -> Vec<String> {
        tasks
            .iter()
            .filter(|n| predicate(**n))
            .map(|n| n.id().to_string())
            .collect()
    }
}
