use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    error::StorageError,
    models::registration::FileUpload,
    services::{
        artifact_store::ArtifactStore,
        image_service::{ImageTransformer, StoredImage, Transformation, Visibility},
    },
};

/// Image transformer layered over the artifact store. Originals land in the
/// store; rendition URLs carry a `tr` query string interpreted by the image
/// proxy in front of it.
#[derive(Clone)]
pub struct StorageImageTransformer<F: ArtifactStore> {
    store: F,
    bucket: String,
}

impl<F: ArtifactStore> StorageImageTransformer<F> {
    pub fn new(store: F, bucket: impl Into<String>) -> Self {
        Self {
            store,
            bucket: bucket.into(),
        }
    }
}

fn transformation_query(t: &Transformation) -> String {
    let mut parts = vec![format!("w_{}", t.width)];
    if let Some(height) = t.height {
        parts.push(format!("h_{height}"));
    }
    parts.push(format!("c_{}", t.crop.as_str()));
    if t.auto_quality {
        parts.push("q_auto".to_string());
    }
    if t.auto_gravity {
        parts.push("g_auto".to_string());
    }
    parts.join(",")
}

#[async_trait]
impl<F: ArtifactStore> ImageTransformer for StorageImageTransformer<F> {
    async fn upload(
        &self,
        image: &FileUpload,
        folder: &str,
        visibility: Visibility,
    ) -> Result<StoredImage, StorageError> {
        let id = match visibility {
            Visibility::Public => format!("{folder}/{}.{}", Uuid::new_v4(), image.extension()),
            Visibility::Private => {
                format!("private/{folder}/{}.{}", Uuid::new_v4(), image.extension())
            }
        };
        let stored = self.store.upload(&self.bucket, &id, &image.bytes, false).await?;
        let url = self.store.public_url(&self.bucket, &stored);
        Ok(StoredImage { id: stored, url })
    }

    fn build_url(&self, id: &str, transformation: &Transformation) -> String {
        format!(
            "{}?tr={}",
            self.store.public_url(&self.bucket, id),
            transformation_query(transformation)
        )
    }

    async fn destroy(&self, id: &str) -> Result<(), StorageError> {
        self.store.delete(&self.bucket, id).await
    }
}
