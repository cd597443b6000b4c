use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use crate::{BlobError, BlobResult, BlobStore, PutResult};

/// In-memory blob store for tests and demos. Resolves public URLs against a
/// configurable base, the way a bucket's public endpoint would.
pub struct MemoryBlobStore {
    base_url: String,
    blobs: RwLock<HashMap<String, Bytes>>,
}

impl MemoryBlobStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            blobs: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored blobs, for assertions.
    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.blobs.read().await.contains_key(key)
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(
        &self,
        key: &str,
        _content_type: Option<&str>,
        bytes: Bytes,
    ) -> BlobResult<PutResult> {
        let size_bytes = bytes.len() as u64;
        let mut blobs = self.blobs.write().await;
        blobs.insert(key.to_string(), bytes);
        Ok(PutResult {
            etag: None,
            size_bytes,
        })
    }

    async fn delete(&self, key: &str) -> BlobResult<()> {
        let mut blobs = self.blobs.write().await;
        blobs
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| BlobError::not_found(key))
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_delete_round_trips() {
        let store = MemoryBlobStore::new("https://cdn/");
        let result = store
            .put("animals/2026/08/abc.png", Some("image/png"), Bytes::from_static(b"x"))
            .await
            .unwrap();
        assert_eq!(result.size_bytes, 1);
        assert!(store.contains("animals/2026/08/abc.png").await);

        store.delete("animals/2026/08/abc.png").await.unwrap();
        assert_eq!(store.len().await, 0);

        let err = store.delete("animals/2026/08/abc.png").await.unwrap_err();
        assert!(matches!(err, BlobError::NotFound { .. }));
    }

    #[tokio::test]
    async fn public_url_has_no_double_slash() {
        let store = MemoryBlobStore::new("https://cdn/");
        assert_eq!(store.public_url("a/b.png"), "https://cdn/a/b.png");
    }
}
