use crate::error::{GraphError, SessionError};
use crate::factory::{NodeFactory, generate_id};
use crate::forms::NodeForm;
use crate::graph::{Edge, WorkflowGraph};
use crate::node::{LayoutHints, Node, Position};
use crate::store::{WorkflowMeta, WorkflowRecord, WorkflowStatus, WorkflowStore};
use crate::validator::{Validator, Verdict};

mod drag;

pub use drag::{DragState, handle_drop};

/// One user's workflow-builder session.
///
/// The session exclusively owns its graph. Every mutation completes before
/// the next one is accepted, so validation always sees a consistent snapshot.
#[derive(Debug, Clone)]
pub struct BuilderSession {
    graph: WorkflowGraph,
    factory: NodeFactory,
    validator: Validator,
    drag: DragState,
    workflow_id: Option<String>,
}

impl Default for BuilderSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BuilderSession {
    /// Starts a new session seeded with one Start and one End node.
    pub fn new() -> Self {
        Self::with_config(NodeFactory::new(), Validator::default())
    }

    pub fn with_config(factory: NodeFactory, validator: Validator) -> Self {
        Self {
            graph: WorkflowGraph::seeded(&factory),
            factory,
            validator,
            drag: DragState::default(),
            workflow_id: None,
        }
    }

    /// Reopens a stored workflow for editing.
    pub fn open(
        store: &impl WorkflowStore,
        id: &str,
        factory: NodeFactory,
        validator: Validator,
    ) -> Result<Self, SessionError> {
        let record = store.get(id)?;
        let graph = record.graph()?;
        log::info!("Opened workflow '{}' ({} nodes)", id, graph.node_count());
        Ok(Self {
            graph,
            factory,
            validator,
            drag: DragState::default(),
            workflow_id: Some(record.id),
        })
    }

    pub fn graph(&self) -> &WorkflowGraph {
        &self.graph
    }

    /// Id of the stored workflow, once the session has been saved or opened.
    pub fn workflow_id(&self) -> Option<&str> {
        self.workflow_id.as_deref()
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Adds a node of the requested type. Returns `None` for unsupported types.
    pub fn add_node(&mut self, tag: &str, label: &str, position: Position) -> Option<String> {
        let node = self
            .factory
            .create_with_layout(tag, label, position, LayoutHints::vertical())?;
        let id = node.id().to_string();
        self.graph.add_node(node).ok()?;
        Some(id)
    }

    pub fn begin_drag(&mut self, tag: &str) {
        self.drag.begin(tag);
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    pub fn drop_at(&mut self, position: Position) -> Option<String> {
        handle_drop(&mut self.drag, &self.factory, &mut self.graph, position)
    }

    /// Connects two existing nodes.
    pub fn connect(&mut self, source: &str, target: &str) -> Result<String, SessionError> {
        for id in [source, target] {
            if !self.graph.contains_node(id) {
                return Err(GraphError::NodeNotFound(id.to_string()).into());
            }
        }
        Ok(self.graph.connect(source, target))
    }

    pub fn disconnect(&mut self, edge_id: &str) -> Option<Edge> {
        self.graph.remove_edge(edge_id)
    }

    /// Removes a node together with every edge touching it.
    pub fn remove_node(&mut self, node_id: &str) -> Result<Node, SessionError> {
        let node = self
            .graph
            .remove_node(node_id)
            .ok_or_else(|| GraphError::NodeNotFound(node_id.to_string()))?;
        let incident: Vec<String> = self
            .graph
            .incident_edges(node_id)
            .map(|e| e.id.clone())
            .collect();
        for edge_id in &incident {
            self.graph.remove_edge(edge_id);
        }
        log::debug!(
            "Removed node '{}' and {} incident edge(s)",
            node_id,
            incident.len()
        );
        Ok(node)
    }

    /// Opens an editor on a copy of the node. The graph is untouched until submit.
    pub fn open_form(&self, node_id: &str) -> Result<NodeForm, SessionError> {
        self.graph
            .node(node_id)
            .map(NodeForm::open)
            .ok_or_else(|| GraphError::NodeNotFound(node_id.to_string()).into())
    }

    pub fn submit_form(&mut self, form: NodeForm) -> Result<(), SessionError> {
        self.graph.replace_node(form.submit())?;
        Ok(())
    }

    pub fn validate(&self) -> Verdict {
        self.validator.validate_graph(&self.graph)
    }

    /// Validates the graph and, only if it passes, stores it.
    ///
    /// The first save creates a new draft document; later saves update it in
    /// place, keeping its status.
    pub fn save(
        &mut self,
        store: &mut impl WorkflowStore,
        meta: WorkflowMeta,
    ) -> Result<WorkflowRecord, SessionError> {
        self.validate().into_result()?;

        let record = match &self.workflow_id {
            Some(id) => {
                let mut record = store.get(id)?;
                record.name = meta.name;
                record.description = meta.description;
                record.is_template = meta.is_template;
                record.template_category = meta.template_category;
                record.tags = meta.tags;
                record.set_graph(&self.graph)?;
                store.update(record)?
            }
            None => store.create(WorkflowRecord::from_graph(
                generate_id(),
                meta,
                &self.graph,
            )?)?,
        };
        self.workflow_id = Some(record.id.clone());
        Ok(record)
    }
}

/// Marks a stored workflow as active after re-validating its graph.
pub fn activate(
    store: &mut impl WorkflowStore,
    validator: &Validator,
    id: &str,
) -> Result<WorkflowRecord, SessionError> {
    let mut record = store.get(id)?;
    validator.validate_graph(&record.graph()?).into_result()?;
    record.status = WorkflowStatus::Active;
    log::info!("Activating workflow '{}'", id);
    Ok(store.update(record)?)
}

pub fn archive(store: &mut impl WorkflowStore, id: &str) -> Result<WorkflowRecord, SessionError> {
    let mut record = store.get(id)?;
    record.status = WorkflowStatus::Archived;
    log::info!("Archiving workflow '{}'", id);
    Ok(store.update(record)?)
}
