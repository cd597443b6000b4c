use async_trait::async_trait;
use bytes::Bytes;

use crate::BlobResult;

/// Core blob storage operations - implemented by all storage backends.
///
/// The workflow only ever stores small images in one shot and hands out
/// public URLs, so the contract is buffered puts plus URL resolution.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store a blob under the given key.
    async fn put(
        &self,
        key: &str,
        content_type: Option<&str>,
        bytes: Bytes,
    ) -> BlobResult<PutResult>;

    /// Delete a blob.
    async fn delete(&self, key: &str) -> BlobResult<()>;

    /// Publicly resolvable URL for a previously stored key.
    fn public_url(&self, key: &str) -> String;
}

/// Result of a successful put operation
#[derive(Debug, Clone)]
pub struct PutResult {
    pub etag: Option<String>,
    pub size_bytes: u64,
}
