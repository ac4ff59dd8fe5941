//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the saiyo crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use saiyo::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/workflow.json")?;
//! let graph = GraphDocument::from_json(&json)?.into_graph()?;
//!
//! let verdict = Validator::default().validate_graph(&graph);
//! println!("{}", verdict.message());
//! # Ok(())
//! # }
//! ```

// Node model and creation
pub use crate::factory::{NodeFactory, generate_id};
pub use crate::node::{
    Attachment, Channel, HandleSide, LayoutHints, Node, NodeData, NodeKind, Position, TaskData,
};

// Graph structure
pub use crate::graph::{Edge, GraphDocument, IntoGraph, WorkflowGraph};

// Validation
pub use crate::validator::{FailureCategory, ValidationFailure, Validator, Verdict, validate};

// Editing and sessions
pub use crate::forms::NodeForm;
pub use crate::session::{BuilderSession, DragState};

// Persistence
pub use crate::store::{MemoryStore, WorkflowMeta, WorkflowRecord, WorkflowStatus, WorkflowStore};

// Error types
pub use crate::error::{FormError, GraphError, SessionError, StoreError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
