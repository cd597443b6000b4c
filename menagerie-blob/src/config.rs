/// Limits and policy for blob uploads.
#[derive(Debug, Clone)]
pub struct BlobConfig {
    /// Maximum accepted upload size in bytes.
    pub max_blob_bytes: u64,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            // Images only; anything past this is a mis-sent file.
            max_blob_bytes: 10 * 1024 * 1024,
        }
    }
}

impl BlobConfig {
    pub fn with_max_blob_bytes(mut self, max: u64) -> Self {
        self.max_blob_bytes = max;
        self
    }
}
