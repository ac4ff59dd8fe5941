use crate::error::GraphError;
use crate::factory::NodeFactory;
use crate::node::{LayoutHints, Node, NodeKind, Position};
use ahash::AHashMap;

pub mod document;
pub mod edge;

pub use document::{GraphDocument, IntoGraph};
pub use edge::Edge;

/// The node set and edge set maintained by one builder session.
///
/// Nodes are keyed by id and remember their insertion order so that a graph
/// serializes the same way it was built. Edges are an unordered multiset;
/// referential integrity of edge endpoints is left to the caller.
#[derive(Debug, Clone, Default)]
pub struct WorkflowGraph {
    nodes: AHashMap<String, Node>,
    order: Vec<String>,
    edges: Vec<Edge>,
}

impl WorkflowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// The starting point of every builder session: one Start and one End node.
    pub fn seeded(factory: &NodeFactory) -> Self {
        let mut graph = Self::new();
        let start = factory
            .create_kind(NodeKind::Start, "Start", Position::new(250.0, 0.0))
            .with_layout(LayoutHints::vertical());
        let end = factory
            .create_kind(NodeKind::End, "End", Position::new(250.0, 400.0))
            .with_layout(LayoutHints::vertical());
        graph.insert_unchecked(start);
        graph.insert_unchecked(end);
        graph
    }

    /// Builds a graph from node and edge lists, rejecting duplicate node ids.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node)?;
        }
        graph.edges = edges;
        Ok(graph)
    }

    pub fn to_document(&self) -> GraphDocument {
        GraphDocument {
            nodes: self.nodes().cloned().collect(),
            edges: self.edges.clone(),
        }
    }

    fn insert_unchecked(&mut self, node: Node) {
        self.order.push(node.id().to_string());
        self.nodes.insert(node.id().to_string(), node);
    }

    pub fn add_node(&mut self, node: Node) -> Result<(), GraphError> {
        if self.nodes.contains_key(node.id()) {
            return Err(GraphError::DuplicateNodeId(node.id().to_string()));
        }
        log::debug!("Adding {} node '{}'", node.kind(), node.id());
        self.insert_unchecked(node);
        Ok(())
    }

    /// Removes a node. Incident edges are NOT pruned; see [`WorkflowGraph::incident_edges`].
    pub fn remove_node(&mut self, node_id: &str) -> Option<Node> {
        let removed = self.nodes.remove(node_id)?;
        self.order.retain(|id| id != node_id);
        log::debug!("Removed node '{}'", node_id);
        Some(removed)
    }

    /// Appends an edge. Duplicate source/target pairs are kept as separate edges.
    pub fn add_edge(&mut self, edge: Edge) {
        log::debug!(
            "Adding edge '{}': {} -> {}",
            edge.id,
            edge.source,
            edge.target
        );
        self.edges.push(edge);
    }

    /// Connects two nodes with a new edge and returns the edge id.
    pub fn connect(&mut self, source: &str, target: &str) -> String {
        let edge = Edge::new(source, target);
        let id = edge.id.clone();
        self.add_edge(edge);
        id
    }

    pub fn remove_edge(&mut self, edge_id: &str) -> Option<Edge> {
        let index = self.edges.iter().position(|e| e.id == edge_id)?;
        log::debug!("Removed edge '{}'", edge_id);
        Some(self.edges.remove(index))
    }

    /// Replaces the node that has the same id as `node`, keeping its place in
    /// the node order, and returns the previous value.
    pub fn replace_node(&mut self, node: Node) -> Result<Node, GraphError> {
        match self.nodes.get_mut(node.id()) {
            Some(slot) => {
                log::debug!("Updating payload of node '{}'", node.id());
                Ok(std::mem::replace(slot, node))
            }
            None => Err(GraphError::NodeNotFound(node.id().to_string())),
        }
    }

    pub fn node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.get(node_id)
    }

    pub fn contains_node(&self, node_id: &str) -> bool {
        self.nodes.contains_key(node_id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn incident_edges<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a Edge> {
        self.edges.iter().filter(move |e| e.touches(node_id))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
