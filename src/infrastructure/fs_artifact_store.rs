use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::domain::{error::StorageError, services::artifact_store::ArtifactStore};

/// Filesystem-backed artifact store. Buckets are directories under the
/// storage root; public URLs are served by the static file host fronting
/// that root.
#[derive(Clone)]
pub struct FsArtifactStore {
    root: PathBuf,
    public_base_url: String,
}

impl FsArtifactStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        let public_base_url = public_base_url.into().trim_end_matches('/').to_string();
        Self {
            root: root.into(),
            public_base_url,
        }
    }

    fn object_path(&self, bucket: &str, path: &str) -> Result<PathBuf, StorageError> {
        // Object paths come from ids and file extensions we build ourselves,
        // but a traversal component is still refused outright.
        if path.split('/').any(|part| part == "..") || bucket.contains("..") {
            return Err(StorageError::Io(format!("invalid object path '{path}'")));
        }
        Ok(self.root.join(bucket).join(path))
    }
}

#[async_trait]
impl ArtifactStore for FsArtifactStore {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: &[u8],
        overwrite: bool,
    ) -> Result<String, StorageError> {
        let full = self.object_path(bucket, path)?;
        if !overwrite
            && fs::try_exists(&full)
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?
        {
            return Err(StorageError::AlreadyExists(path.to_string()));
        }
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }
        fs::write(&full, bytes)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;
        Ok(path.to_string())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/{bucket}/{path}", self.public_base_url)
    }

    async fn delete(&self, bucket: &str, path: &str) -> Result<(), StorageError> {
        let full = self.object_path(bucket, path)?;
        fs::remove_file(&full)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn temp_store() -> FsArtifactStore {
        let root = std::env::temp_dir().join(format!("artifact-store-{}", Uuid::new_v4()));
        FsArtifactStore::new(root, "https://cdn.example.test/")
    }

    #[tokio::test]
    async fn upload_writes_and_refuses_silent_overwrite() {
        let store = temp_store();
        let path = store
            .upload("artist-documents", "abc/profile-photo.png", b"img", false)
            .await
            .unwrap();
        assert_eq!(path, "abc/profile-photo.png");

        let second = store
            .upload("artist-documents", "abc/profile-photo.png", b"img2", false)
            .await;
        assert!(matches!(second, Err(StorageError::AlreadyExists(_))));

        store
            .upload("artist-documents", "abc/profile-photo.png", b"img2", true)
            .await
            .expect("overwrite allowed when requested");
    }

    #[tokio::test]
    async fn delete_removes_the_object() {
        let store = temp_store();
        store
            .upload("artist-documents", "x/proof.png", b"img", false)
            .await
            .unwrap();
        store.delete("artist-documents", "x/proof.png").await.unwrap();
        assert!(store.delete("artist-documents", "x/proof.png").await.is_err());
    }

    #[test]
    fn public_url_joins_base_bucket_and_path() {
        let store = temp_store();
        assert_eq!(
            store.public_url("artist-documents", "abc/id-document.jpg"),
            "https://cdn.example.test/artist-documents/abc/id-document.jpg"
        );
    }

    #[tokio::test]
    async fn traversal_components_are_refused() {
        let store = temp_store();
        let result = store.upload("artist-documents", "../escape.png", b"img", false).await;
        assert!(matches!(result, Err(StorageError::Io(_))));
    }
}
