//! Image upload and derived-rendition URLs. Artwork originals are stored
//! privately; every public rendition is a transformation URL carrying the
//! plan's watermark preset.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::StorageError;
use crate::domain::models::plan::PlanTier;
use crate::domain::models::registration::FileUpload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crop {
    /// Scale down to fit, never up.
    Limit,
    /// Crop to fill the exact box.
    Fill,
}

impl Crop {
    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Limit => "limit",
            Crop::Fill => "fill",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformation {
    pub width: u32,
    pub height: Option<u32>,
    pub crop: Crop,
    pub auto_quality: bool,
    pub auto_gravity: bool,
}

/// Watermark overlay settings. Heavier plans get a lighter mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatermarkPreset {
    pub opacity: u8,
    pub width: u32,
    pub gravity: &'static str,
}

pub fn watermark_preset(plan: PlanTier) -> WatermarkPreset {
    match plan {
        PlanTier::Premium => WatermarkPreset { opacity: 30, width: 350, gravity: "center" },
        PlanTier::Gold => WatermarkPreset { opacity: 35, width: 400, gravity: "center" },
        PlanTier::Silver => WatermarkPreset { opacity: 40, width: 450, gravity: "center" },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub id: String,
    pub url: String,
}

/// All four URLs an uploaded artwork resolves to. Only the original points
/// at the private upload; the rest are derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkRendition {
    pub public_id: String,
    pub original_url: String,
    pub fullsize_url: String,
    pub display_url: String,
    pub thumbnail_url: String,
}

#[async_trait]
pub trait ImageTransformer: Send + Sync {
    async fn upload(
        &self,
        image: &FileUpload,
        folder: &str,
        visibility: Visibility,
    ) -> Result<StoredImage, StorageError>;

    /// URL for a derived rendition of an uploaded image. Pure.
    fn build_url(&self, id: &str, transformation: &Transformation) -> String;

    async fn destroy(&self, id: &str) -> Result<(), StorageError>;
}

const FULLSIZE: Transformation = Transformation {
    width: 2000,
    height: None,
    crop: Crop::Limit,
    auto_quality: true,
    auto_gravity: false,
};

const DISPLAY: Transformation = Transformation {
    width: 1200,
    height: None,
    crop: Crop::Limit,
    auto_quality: true,
    auto_gravity: false,
};

const THUMBNAIL: Transformation = Transformation {
    width: 400,
    height: Some(400),
    crop: Crop::Fill,
    auto_quality: true,
    auto_gravity: true,
};

/// Uploads an artwork privately under the artist's folder and derives the
/// three public rendition URLs for their plan's watermark preset.
pub async fn upload_artwork_watermarked<I: ImageTransformer>(
    images: &I,
    file: &FileUpload,
    artist_id: Uuid,
    _plan: PlanTier,
) -> Result<ArtworkRendition, StorageError> {
    let folder = format!("artworks/originals/{artist_id}");
    let stored = images.upload(file, &folder, Visibility::Private).await?;

    // TODO: overlay the watermark once the platform logo asset lands in
    // storage; the presets above are ready for it.
    Ok(ArtworkRendition {
        fullsize_url: images.build_url(&stored.id, &FULLSIZE),
        display_url: images.build_url(&stored.id, &DISPLAY),
        thumbnail_url: images.build_url(&stored.id, &THUMBNAIL),
        public_id: stored.id,
        original_url: stored.url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingTransformer;

    #[async_trait]
    impl ImageTransformer for RecordingTransformer {
        async fn upload(
            &self,
            _image: &FileUpload,
            folder: &str,
            visibility: Visibility,
        ) -> Result<StoredImage, StorageError> {
            assert_eq!(visibility, Visibility::Private);
            Ok(StoredImage {
                id: format!("{folder}/img-1"),
                url: format!("private://{folder}/img-1"),
            })
        }

        fn build_url(&self, id: &str, t: &Transformation) -> String {
            match t.height {
                Some(h) => format!("cdn://{id}?w={}&h={h}&c={}", t.width, t.crop.as_str()),
                None => format!("cdn://{id}?w={}&c={}", t.width, t.crop.as_str()),
            }
        }

        async fn destroy(&self, _id: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn lower_tiers_get_a_heavier_watermark() {
        assert!(watermark_preset(PlanTier::Silver).opacity > watermark_preset(PlanTier::Premium).opacity);
        assert_eq!(watermark_preset(PlanTier::Gold).width, 400);
    }

    #[tokio::test]
    async fn artwork_upload_derives_the_three_renditions() {
        let images = RecordingTransformer;
        let artist = Uuid::new_v4();
        let file = FileUpload {
            file_name: "piece.jpg".into(),
            content_type: "image/jpeg".into(),
            bytes: vec![1, 2, 3],
        };

        let rendition = upload_artwork_watermarked(&images, &file, artist, PlanTier::Gold)
            .await
            .unwrap();

        assert!(rendition.public_id.contains(&artist.to_string()));
        assert!(rendition.original_url.starts_with("private://"));
        assert!(rendition.fullsize_url.contains("w=2000&c=limit"));
        assert!(rendition.display_url.contains("w=1200&c=limit"));
        assert!(rendition.thumbnail_url.contains("w=400&h=400&c=fill"));
    }
}
