use async_trait::async_trait;

use crate::domain::error::StorageError;

/// Bucketed binary object storage. The registration flow keeps its
/// verification documents and payment proofs here; the core never talks to
/// a concrete backend directly so tests can swap in an in-memory fake.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Stores `bytes` and returns the path actually written. With
    /// `overwrite` false an existing object is an error.
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: &[u8],
        overwrite: bool,
    ) -> Result<String, StorageError>;

    /// Publicly reachable URL for an object. Pure string construction, no
    /// existence check.
    fn public_url(&self, bucket: &str, path: &str) -> String;

    async fn delete(&self, bucket: &str, path: &str) -> Result<(), StorageError>;
}
