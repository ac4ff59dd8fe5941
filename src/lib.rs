//! # Saiyo - Recruitment Workflow Graphs
//!
//! **Saiyo** models a hiring pipeline as a directed graph (Start → Tasks → End)
//! built interactively by a user, and decides whether such a graph is a
//! well-formed workflow before it may be activated.
//!
//! ## Core Workflow
//!
//! 1.  **Start a session**: [`BuilderSession::new`](session::BuilderSession::new) seeds a graph with one Start and one End node.
//! 2.  **Build**: add task nodes (Notification, Assignment, Interview) through the [`NodeFactory`](factory::NodeFactory), connect them, and edit their payload through [`NodeForm`](forms::NodeForm)s.
//! 3.  **Validate**: the [`Validator`](validator::Validator) checks a fixed list of structural rules and reports the first one that fails.
//! 4.  **Persist**: a valid graph is serialized into a [`WorkflowRecord`](store::WorkflowRecord) and handed to a [`WorkflowStore`](store::WorkflowStore).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use saiyo::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let mut session = BuilderSession::new();
//!     let start = session.graph().nodes().find(|n| n.is_start()).unwrap().id().to_string();
//!     let end = session.graph().nodes().find(|n| n.is_end()).unwrap().id().to_string();
//!
//!     // Every task needs exactly two incoming connections.
//!     let interview = session
//!         .add_node("interview", "Technical interview", Position::new(250.0, 200.0))
//!         .expect("known node type");
//!     session.connect(&start, &interview)?;
//!     session.connect(&start, &interview)?;
//!     session.connect(&interview, &end)?;
//!
//!     let verdict = session.validate();
//!     println!("{}", verdict.message());
//!
//!     let mut store = MemoryStore::new();
//!     let record = session.save(&mut store, WorkflowMeta::new("Backend hiring", "user-1"))?;
//!     println!("Stored workflow {} as {}", record.id, record.status);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod factory;
pub mod forms;
pub mod graph;
pub mod logger;
pub mod node;
pub mod prelude;
pub mod session;
pub mod store;
pub mod validator;
