use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use menagerie_core::{AnimalDraft, AnimalRecord, RecordId, RecordStore, StoreError, StoreResult};

/// In-memory record store. Backing map lives behind a `tokio` RwLock so the
/// adapter is usable from concurrent test tasks; iteration order is
/// unspecified, matching the "backend order" contract.
#[derive(Default)]
pub struct MemoryRecordStore {
    records: RwLock<HashMap<RecordId, AnimalRecord>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded store, for tests.
    pub async fn seeded(records: Vec<AnimalRecord>) -> Self {
        let store = Self::new();
        {
            let mut map = store.records.write().await;
            for record in records {
                map.insert(record.id.clone(), record);
            }
        }
        store
    }

    // Mirrors the backend schema's non-empty constraint on name/species.
    fn check_required(draft: &AnimalDraft) -> StoreResult<()> {
        if draft.name.is_empty() {
            return Err(StoreError::invalid("name must not be empty"));
        }
        if draft.species.is_empty() {
            return Err(StoreError::invalid("species must not be empty"));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn list(&self) -> StoreResult<Vec<AnimalRecord>> {
        let map = self.records.read().await;
        Ok(map.values().cloned().collect())
    }

    async fn create(&self, draft: AnimalDraft) -> StoreResult<AnimalRecord> {
        Self::check_required(&draft)?;
        let record = AnimalRecord {
            id: RecordId::new(),
            name: draft.name,
            species: draft.species,
            image_url: draft.image_url,
        };

        let mut map = self.records.write().await;
        map.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn update(&self, id: &RecordId, draft: AnimalDraft) -> StoreResult<AnimalRecord> {
        Self::check_required(&draft)?;
        let mut map = self.records.write().await;
        if !map.contains_key(id) {
            return Err(StoreError::not_found(id.as_str()));
        }

        let record = AnimalRecord {
            id: id.clone(),
            name: draft.name,
            species: draft.species,
            image_url: draft.image_url,
        };
        map.insert(id.clone(), record.clone());
        Ok(record)
    }

    async fn remove(&self, id: &RecordId) -> StoreResult<AnimalRecord> {
        let mut map = self.records.write().await;
        map.remove(id)
            .ok_or_else(|| StoreError::not_found(id.as_str()))
    }
}
