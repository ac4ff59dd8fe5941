use crate::error::StoreError;

pub mod memory;
pub mod record;

pub use memory::MemoryStore;
pub use record::{WorkflowMeta, WorkflowRecord, WorkflowStatus};

/// The persistence collaborator that keeps workflow documents.
///
/// Implementations store records verbatim. Failures propagate to the caller
/// unchanged; nothing in this crate retries them.
pub trait WorkflowStore {
    fn create(&mut self, record: WorkflowRecord) -> Result<WorkflowRecord, StoreError>;

    fn update(&mut self, record: WorkflowRecord) -> Result<WorkflowRecord, StoreError>;

    /// Fails with [`StoreError::NotFound`] when no document has `id`.
    fn get(&self, id: &str) -> Result<WorkflowRecord, StoreError>;

    fn list_by_owner(&self, owner: &str) -> Result<Vec<WorkflowRecord>, StoreError>;

    fn list_templates(&self) -> Result<Vec<WorkflowRecord>, StoreError>;

    fn delete(&mut self, id: &str) -> Result<(), StoreError>;
}
