use std::sync::Arc;

use crate::{
    BlobConfig, BlobError, BlobKeyStrategy, BlobResult, BlobStore, BlobUpload, DefaultKeyStrategy,
    UploadReceipt,
};

/// The main blob adapter - what the form controller embeds.
///
/// Coordinates one upload: size check, key mint, store put, public URL.
pub struct BlobAdapter {
    store: Arc<dyn BlobStore>,
    keys: Arc<dyn BlobKeyStrategy>,
    config: BlobConfig,
}

impl BlobAdapter {
    pub fn new<S: BlobStore + 'static>(store: S, config: BlobConfig) -> Self {
        Self {
            store: Arc::new(store),
            keys: Arc::new(DefaultKeyStrategy::default()),
            config,
        }
    }

    /// Create with a custom key strategy.
    pub fn with_key_strategy<S: BlobStore + 'static, K: BlobKeyStrategy + 'static>(
        store: S,
        keys: K,
        config: BlobConfig,
    ) -> Self {
        Self {
            store: Arc::new(store),
            keys: Arc::new(keys),
            config,
        }
    }

    /// Store an upload and resolve its public URL.
    pub async fn upload(&self, upload: BlobUpload) -> BlobResult<UploadReceipt> {
        let size = upload.bytes.len() as u64;
        if size > self.config.max_blob_bytes {
            return Err(BlobError::invalid(format!(
                "Blob size {} exceeds maximum {}",
                size, self.config.max_blob_bytes
            )));
        }

        let key = self.keys.object_key(&upload.filename);

        let result = self
            .store
            .put(&key, upload.content_type.as_deref(), upload.bytes)
            .await?;

        let public_url = self.store.public_url(&key);
        tracing::debug!(%key, %public_url, size_bytes = result.size_bytes, "blob stored");

        Ok(UploadReceipt {
            key,
            public_url,
            size_bytes: result.size_bytes,
        })
    }

    /// Delete a previously stored upload.
    pub async fn delete(&self, key: &str) -> BlobResult<()> {
        self.store.delete(key).await
    }

    pub fn config(&self) -> &BlobConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBlobStore;

    #[tokio::test]
    async fn upload_returns_a_public_url_under_the_base() {
        let adapter = BlobAdapter::new(
            MemoryBlobStore::new("https://cdn.example.com"),
            BlobConfig::default(),
        );

        let receipt = adapter
            .upload(BlobUpload::new("cat.png", &b"pngbytes"[..]).with_content_type("image/png"))
            .await
            .unwrap();

        assert_eq!(receipt.size_bytes, 8);
        assert!(receipt.key.ends_with(".png"));
        assert_eq!(
            receipt.public_url,
            format!("https://cdn.example.com/{}", receipt.key)
        );
    }

    #[tokio::test]
    async fn same_named_uploads_do_not_collide() {
        let adapter = BlobAdapter::new(MemoryBlobStore::new("https://cdn"), BlobConfig::default());

        let a = adapter
            .upload(BlobUpload::new("cat.png", &b"one"[..]))
            .await
            .unwrap();
        let b = adapter
            .upload(BlobUpload::new("cat.png", &b"two"[..]))
            .await
            .unwrap();

        assert_ne!(a.key, b.key);
        assert_ne!(a.public_url, b.public_url);
    }

    #[tokio::test]
    async fn custom_key_strategy_controls_the_prefix() {
        let adapter = BlobAdapter::with_key_strategy(
            MemoryBlobStore::new("https://cdn"),
            crate::DefaultKeyStrategy::new("exhibits"),
            BlobConfig::default(),
        );

        let receipt = adapter
            .upload(BlobUpload::new("otter.jpg", &b"jpg"[..]))
            .await
            .unwrap();
        assert!(receipt.key.starts_with("exhibits/"));
    }

    #[tokio::test]
    async fn delete_forwards_to_the_store() {
        let adapter = BlobAdapter::new(MemoryBlobStore::new("https://cdn"), BlobConfig::default());
        let receipt = adapter
            .upload(BlobUpload::new("cat.png", &b"x"[..]))
            .await
            .unwrap();

        adapter.delete(&receipt.key).await.unwrap();
        let err = adapter.delete(&receipt.key).await.unwrap_err();
        assert!(matches!(err, BlobError::NotFound { .. }));
    }

    #[tokio::test]
    async fn oversized_upload_is_rejected_before_the_store_is_touched() {
        let store = MemoryBlobStore::new("https://cdn");
        let adapter = BlobAdapter::new(store, BlobConfig::default().with_max_blob_bytes(4));

        let err = adapter
            .upload(BlobUpload::new("big.png", &b"too large"[..]))
            .await
            .unwrap_err();
        assert!(matches!(err, BlobError::Invalid { .. }));
    }
}
