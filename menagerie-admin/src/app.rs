//! Wiring: pick backends from config and assemble the workflow.

use std::sync::Arc;

use anyhow::{Context, Result};

use menagerie_blob::{BlobAdapter, BlobConfig, MemoryBlobStore, S3CompatibleStore};
use menagerie_core::{AdminConfig, AdminConfigSnapshot, RecordStore};
use menagerie_store::{MemoryRecordStore, RestConfig, RestRecordStore};

use crate::form::FormController;
use crate::list::ListView;
use crate::notify::{Notifier, TracingNotifier};

/// The assembled admin workflow: one list view plus one form controller over
/// shared backends.
pub struct AdminApp {
    pub form: FormController,
    pub list: ListView,
    pub store: Arc<dyn RecordStore>,
    pub notifier: Arc<dyn Notifier>,
}

impl AdminApp {
    /// Build from config. `store.backend` selects `memory` (default) or
    /// `rest`; `blob.backend` selects `memory` (default) or `s3`.
    pub async fn build(config: &AdminConfig) -> Result<Self> {
        let snapshot = config.snapshot();

        let store = Self::record_store(&snapshot)?;
        let blobs = Self::blob_adapter(&snapshot).await?;
        let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);

        let form = FormController::new(store.clone(), blobs, notifier.clone());
        let list = ListView::new(store.clone(), notifier.clone());

        Ok(Self {
            form,
            list,
            store,
            notifier,
        })
    }

    fn record_store(snapshot: &AdminConfigSnapshot) -> Result<Arc<dyn RecordStore>> {
        match snapshot.get("store.backend") {
            Some("rest") => {
                let rest = RestConfig::from_snapshot(snapshot)
                    .context("configuring REST record store")?;
                tracing::info!(base_url = %rest.base_url, table = %rest.table, "using REST record store");
                Ok(Arc::new(RestRecordStore::new(rest)))
            }
            Some("memory") | None => {
                tracing::info!("using in-memory record store");
                Ok(Arc::new(MemoryRecordStore::new()))
            }
            Some(other) => anyhow::bail!("unknown store.backend: {other}"),
        }
    }

    async fn blob_adapter(snapshot: &AdminConfigSnapshot) -> Result<BlobAdapter> {
        let mut blob_config = BlobConfig::default();
        if let Some(max) = snapshot.get_u64("blob.max_bytes") {
            blob_config = blob_config.with_max_blob_bytes(max);
        }

        match snapshot.get("blob.backend") {
            Some("s3") => {
                let store = S3CompatibleStore::from_env()
                    .await
                    .context("configuring S3 blob store")?;
                tracing::info!("using S3-compatible blob store");
                Ok(BlobAdapter::new(store, blob_config))
            }
            Some("memory") | None => {
                let base_url = snapshot
                    .get_string("blob.public_base_url")
                    .unwrap_or_else(|| "https://blobs.invalid".to_string());
                tracing::info!(%base_url, "using in-memory blob store");
                Ok(BlobAdapter::new(MemoryBlobStore::new(base_url), blob_config))
            }
            Some(other) => anyhow::bail!("unknown blob.backend: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_build_uses_memory_backends() {
        let app = AdminApp::build(&AdminConfig::new()).await.unwrap();
        assert!(app.store.list().await.unwrap().is_empty());
        assert!(!app.form.is_open());
    }

    #[tokio::test]
    async fn unknown_store_backend_is_rejected() {
        let mut config = AdminConfig::new();
        config.set("store.backend", "carrier-pigeon");
        assert!(AdminApp::build(&config).await.is_err());
    }

    #[tokio::test]
    async fn rest_backend_requires_a_base_url() {
        let mut config = AdminConfig::new();
        config.set("store.backend", "rest");
        assert!(AdminApp::build(&config).await.is_err());
    }
}
