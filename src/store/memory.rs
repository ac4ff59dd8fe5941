use super::WorkflowStore;
use super::record::WorkflowRecord;
use crate::error::StoreError;
use ahash::AHashMap;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use chrono::Utc;
use itertools::Itertools;
use std::fs;
use std::io::{Read, Write};

/// In-process [`WorkflowStore`] keyed by record id.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: AHashMap<String, WorkflowRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn sorted<'a>(records: impl Iterator<Item = &'a WorkflowRecord>) -> Vec<WorkflowRecord> {
        records
            .sorted_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)))
            .cloned()
            .collect()
    }

    /// Saves every record to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), StoreError> {
        let records = Self::sorted(self.records.values());
        let bytes = encode_to_vec(&records, standard())
            .map_err(|e| StoreError::Serialization(format!("Encoding failed: {}", e)))?;
        let mut file = fs::File::create(path).map_err(|e| {
            StoreError::Unavailable(format!("Could not create file '{}': {}", path, e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            StoreError::Unavailable(format!("Could not write to file '{}': {}", path, e))
        })?;
        log::info!("Saved {} workflow(s) to '{}'", records.len(), path);
        Ok(())
    }

    /// Loads a store previously written with [`MemoryStore::save`].
    pub fn from_file(path: &str) -> Result<Self, StoreError> {
        let mut file = fs::File::open(path).map_err(|e| {
            StoreError::Unavailable(format!("Could not open file '{}': {}", path, e))
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            StoreError::Unavailable(format!("Could not read from file '{}': {}", path, e))
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        let (records, _): (Vec<WorkflowRecord>, usize) = decode_from_slice(bytes, standard())
            .map_err(|e| StoreError::Serialization(format!("Decoding failed: {}", e)))?;
        Ok(Self {
            records: records.into_iter().map(|r| (r.id.clone(), r)).collect(),
        })
    }
}

impl WorkflowStore for MemoryStore {
    fn create(&mut self, record: WorkflowRecord) -> Result<WorkflowRecord, StoreError> {
        if self.records.contains_key(&record.id) {
            return Err(StoreError::AlreadyExists(record.id));
        }
        log::info!("Created workflow '{}' ({})", record.name, record.id);
        self.records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&mut self, mut record: WorkflowRecord) -> Result<WorkflowRecord, StoreError> {
        let slot = self
            .records
            .get_mut(&record.id)
            .ok_or_else(|| StoreError::NotFound(record.id.clone()))?;
        record.created_at = slot.created_at;
        record.updated_at = Utc::now();
        *slot = record.clone();
        log::info!("Updated workflow '{}' ({})", record.name, record.id);
        Ok(record)
    }

    fn get(&self, id: &str) -> Result<WorkflowRecord, StoreError> {
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn list_by_owner(&self, owner: &str) -> Result<Vec<WorkflowRecord>, StoreError> {
        Ok(Self::sorted(
            self.records.values().filter(|r| r.created_by == owner),
        ))
    }

    fn list_templates(&self) -> Result<Vec<WorkflowRecord>, StoreError> {
        Ok(Self::sorted(self.records.values().filter(|r| r.is_template)))
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        self.records
            .remove(id)
            .map(|_| log::info!("Deleted workflow '{}'", id))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
