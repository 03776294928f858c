//! Object storage module
//!
//! Narrow seam over the blob store: a trait covering the uploads this
//! service performs, plus the rust-s3 backed client used in production.

mod s3_client;

pub use s3_client::S3Client;

use async_trait::async_trait;

use crate::core::error::Result;

/// Key-addressed blob store.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload raw bytes under the given key.
    async fn put_object(&self, key: &str, data: &[u8], content_type: &str) -> Result<()>;

    /// Deterministic public URL for a stored object. Built locally from the
    /// bucket name and key, never fetched back from the storage service.
    fn object_url(&self, key: &str) -> String;
}
