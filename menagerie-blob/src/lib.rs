//! menagerie-blob: image storage for the admin workflow.
//!
//! Uploads are single-shot: the form hands the adapter a buffered file, the
//! adapter mints a collision-resistant key, stores the bytes, and resolves a
//! publicly reachable URL for the record's `image_url` field. Storage is
//! backend-agnostic behind the `BlobStore` trait; an in-memory backend covers
//! tests and demos, an S3-compatible backend covers hosted buckets.

mod adapter;
mod config;
mod error;
mod keys;
mod memory;
mod s3;
mod store;
mod types;

pub use adapter::BlobAdapter;
pub use config::BlobConfig;
pub use error::{BlobError, BlobResult};
pub use keys::{BlobKeyStrategy, DefaultKeyStrategy};
pub use memory::MemoryBlobStore;
pub use s3::{S3CompatibleStore, S3Config};
pub use store::{BlobStore, PutResult};
pub use types::{BlobUpload, UploadReceipt};
