use bytes::Bytes;

/// A file handed to the blob adapter for upload.
#[derive(Debug, Clone)]
pub struct BlobUpload {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl BlobUpload {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            content_type: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_content_type<S: Into<String>>(mut self, content_type: S) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Receipt for a stored upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadReceipt {
    pub key: String,
    pub public_url: String,
    pub size_bytes: u64,
}
