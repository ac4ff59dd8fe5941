use super::WorkflowGraph;
use super::edge::Edge;
use crate::error::GraphError;
use crate::node::Node;
use serde::{Deserialize, Serialize};

/// Serialized form of a workflow graph: the node list and edge list exactly as
/// the canvas exchanges them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphDocument {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// A trait for custom data models that can be converted into a [`WorkflowGraph`].
///
/// Implement it on your own structs when your canvas or storage layer uses a
/// different shape than [`GraphDocument`].
///
/// # Example
///
/// ```rust,no_run
/// use saiyo::prelude::*;
/// use saiyo::error::GraphError;
///
/// struct MyStep { id: String, kind: String }
/// struct MyPipeline { steps: Vec<MyStep>, links: Vec<(String, String)> }
///
/// impl IntoGraph for MyPipeline {
///     fn into_graph(self) -> std::result::Result<WorkflowGraph, GraphError> {
///         let factory = NodeFactory::new();
///         let mut graph = WorkflowGraph::new();
///         for step in self.steps {
///             let template = factory
///                 .create(&step.kind, step.id.clone(), Position::default())
///                 .ok_or_else(|| GraphError::ConversionError(format!("unknown step '{}'", step.kind)))?;
///             graph.add_node(Node::new(step.id, template.position, template.data))?;
///         }
///         for (source, target) in self.links {
///             graph.add_edge(Edge::new(source, target));
///         }
///         Ok(graph)
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into a workflow graph.
    fn into_graph(self) -> Result<WorkflowGraph, GraphError>;
}

impl IntoGraph for GraphDocument {
    fn into_graph(self) -> Result<WorkflowGraph, GraphError> {
        WorkflowGraph::from_parts(self.nodes, self.edges)
    }
}
