//! The record list: fetch phases plus the row-level delete action.

use std::sync::Arc;

use menagerie_core::{AnimalRecord, RecordId, RecordStore};

use crate::notify::{Notice, Notifier};

/// Where the list stands with respect to its backing fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum ListPhase {
    /// Fetch in flight (or not yet started).
    Loading,
    /// Fetch failed; the view degrades to a generic error.
    Failed,
    /// Records fetched, in backend order.
    Ready(Vec<AnimalRecord>),
}

pub struct ListView {
    store: Arc<dyn RecordStore>,
    notifier: Arc<dyn Notifier>,
    phase: ListPhase,
}

impl ListView {
    pub fn new(store: Arc<dyn RecordStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            phase: ListPhase::Loading,
        }
    }

    pub fn phase(&self) -> &ListPhase {
        &self.phase
    }

    /// Records currently displayed; empty unless `Ready`.
    pub fn records(&self) -> &[AnimalRecord] {
        match &self.phase {
            ListPhase::Ready(records) => records,
            _ => &[],
        }
    }

    /// Re-fetch from the store. Same contract as the initial load.
    pub async fn refresh(&mut self) {
        self.phase = ListPhase::Loading;
        match self.store.list().await {
            Ok(records) => {
                tracing::debug!(count = records.len(), "list loaded");
                self.phase = ListPhase::Ready(records);
            }
            Err(err) => {
                tracing::warn!(error = %err, "list load failed");
                self.phase = ListPhase::Failed;
            }
        }
    }

    /// Delete a row. On success the list refreshes; on failure the rows are
    /// left as they were and stay actionable.
    pub async fn remove(&mut self, id: &RecordId) -> bool {
        match self.store.remove(id).await {
            Ok(_) => {
                self.notifier
                    .notify(Notice::success("Animal deleted successfully"));
                self.refresh().await;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, id = %id, "delete failed");
                self.notifier.notify(Notice::error("Failed to delete animal"));
                false
            }
        }
    }

    /// Plain-text rendering of the current phase, one row per record.
    pub fn render(&self) -> String {
        match &self.phase {
            ListPhase::Loading => "Loading animals...".to_string(),
            ListPhase::Failed => "Error loading animals".to_string(),
            ListPhase::Ready(records) => {
                let mut out = String::from("Name\tSpecies\tImage\n");
                for record in records {
                    out.push_str(&format!(
                        "{}\t{}\t{}\n",
                        record.name,
                        record.species,
                        record.image_url.as_deref().unwrap_or("-")
                    ));
                }
                out
            }
        }
    }
}
