use crate::node::{LayoutHints, Node, NodeKind, Position};
use ahash::AHashMap;
use chrono::Utc;
use uuid::Uuid;

/// Generates a fresh, collision-resistant node or edge identifier.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Single entry point for creating new workflow nodes.
///
/// The factory resolves a tag requested by the builder UI to one of the known
/// [`NodeKind`]s. Besides the built-in tags (`"start"`, `"end"`,
/// `"notification"`, `"assignment"`, `"interview"`) additional aliases can be
/// registered through [`NodeFactory::builder`].
#[derive(Debug, Clone)]
pub struct NodeFactory {
    registry: AHashMap<String, NodeKind>,
}

pub struct NodeFactoryBuilder {
    registry: AHashMap<String, NodeKind>,
}

impl NodeFactoryBuilder {
    pub fn new() -> Self {
        let mut registry = AHashMap::new();
        register_default_tags(&mut registry);
        Self { registry }
    }

    /// Makes `user_tag` produce the same node as the built-in `known_tag`.
    /// Mappings onto an unknown tag are ignored.
    pub fn with_type_mapping(mut self, user_tag: &str, known_tag: &str) -> Self {
        if let Some(kind) = NodeKind::from_tag(known_tag) {
            self.registry.insert(user_tag.to_string(), kind);
        } else {
            log::warn!(
                "Ignoring type mapping '{}' -> '{}': unknown node type",
                user_tag,
                known_tag
            );
        }
        self
    }

    pub fn build(self) -> NodeFactory {
        NodeFactory {
            registry: self.registry,
        }
    }
}

impl Default for NodeFactoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn register_default_tags(registry: &mut AHashMap<String, NodeKind>) {
    for kind in NodeKind::ALL {
        registry.insert(kind.tag().to_string(), kind);
    }
}

impl NodeFactory {
    pub fn new() -> Self {
        NodeFactoryBuilder::new().build()
    }

    pub fn builder() -> NodeFactoryBuilder {
        NodeFactoryBuilder::new()
    }

    /// Resolves a requested tag to a node kind, if it is supported.
    pub fn resolve(&self, tag: &str) -> Option<NodeKind> {
        self.registry.get(tag).copied()
    }

    /// Creates a node for `tag` at `position`.
    ///
    /// Returns `None` for tags the factory does not know; callers should treat
    /// that as an unsupported type.
    pub fn create(&self, tag: &str, label: impl Into<String>, position: Position) -> Option<Node> {
        self.create_with_layout(tag, label, position, LayoutHints::default())
    }

    pub fn create_with_layout(
        &self,
        tag: &str,
        label: impl Into<String>,
        position: Position,
        hints: LayoutHints,
    ) -> Option<Node> {
        match self.resolve(tag) {
            Some(kind) => Some(self.create_kind(kind, label, position).with_layout(hints)),
            None => {
                log::warn!("Unsupported node type requested: '{}'", tag);
                None
            }
        }
    }

    /// Creates a node of a known kind. Never fails.
    pub fn create_kind(&self, kind: NodeKind, label: impl Into<String>, position: Position) -> Node {
        let node = Node::new(generate_id(), position, kind.default_data(label, Utc::now()));
        log::debug!("Created {} node '{}'", kind, node.id());
        node
    }
}

impl Default for NodeFactory {
    fn default() -> Self {
        Self::new()
    }
}
