use async_trait::async_trait;
use thiserror::Error;

use crate::record::{AnimalDraft, AnimalRecord, RecordId};

/// Result type for record store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors a record store operation can fail with.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Record not found: {id}")]
    NotFound { id: String },

    #[error("Invalid request: {message}")]
    Invalid { message: String },

    #[error("Record store backend error: {source}")]
    Backend {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Wrap any error type as a backend failure.
    pub fn backend<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend {
            source: Box::new(error),
        }
    }

    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    pub fn not_found<S: Into<String>>(id: S) -> Self {
        Self::NotFound { id: id.into() }
    }
}

/// The record store capability: four asynchronous remote operations over the
/// animal collection.
///
/// `list` ordering is whatever the backend returns; no client-side sort is
/// promised. `create` and `update` take only the editable fields — the store
/// owns id assignment. All operations may fail; callers catch and convert
/// failures to user-visible feedback rather than crash.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch all records.
    async fn list(&self) -> StoreResult<Vec<AnimalRecord>>;

    /// Create a new record from editable fields.
    async fn create(&self, draft: AnimalDraft) -> StoreResult<AnimalRecord>;

    /// Replace the editable fields of an existing record.
    async fn update(&self, id: &RecordId, draft: AnimalDraft) -> StoreResult<AnimalRecord>;

    /// Delete a record, returning the removed row.
    async fn remove(&self, id: &RecordId) -> StoreResult<AnimalRecord>;
}
