use crate::factory::NodeFactory;
use crate::graph::WorkflowGraph;
use crate::node::{LayoutHints, Position};

/// The node type currently being dragged from the palette onto the canvas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragState {
    dragged: Option<String>,
}

impl DragState {
    pub fn begin(&mut self, tag: impl Into<String>) {
        self.dragged = Some(tag.into());
    }

    pub fn cancel(&mut self) {
        self.dragged = None;
    }

    pub fn dragged(&self) -> Option<&str> {
        self.dragged.as_deref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    /// Ends the drag and returns the tag that was being dragged.
    pub fn take(&mut self) -> Option<String> {
        self.dragged.take()
    }
}

/// Drop handler: ends the drag in `drag` and, if the dragged tag is a
/// supported node type, adds a new node at `position`.
///
/// Returns the id of the created node. The drag is always ended, even when
/// the tag was not supported.
pub fn handle_drop(
    drag: &mut DragState,
    factory: &NodeFactory,
    graph: &mut WorkflowGraph,
    position: Position,
) -> Option<String> {
    let tag = drag.take()?;
    let Some(kind) = factory.resolve(&tag) else {
        log::warn!("Dropped unsupported node type '{}'", tag);
        return None;
    };
    let node = factory
        .create_kind(kind, kind.to_string(), position)
        .with_layout(LayoutHints::vertical());
    let id = node.id().to_string();
    // Fresh ids never collide.
    graph.add_node(node).ok()?;
    Some(id)
}
