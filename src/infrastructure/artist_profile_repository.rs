use async_trait::async_trait;
use chrono::Utc;
use entity::artist_profiles;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError,
    models::artist::{ArtistProfile, ArtistStatus, Availability, NewArtistProfile},
    models::plan::PlanTier,
    repositories::artist_profile_repository::ArtistProfileRepository,
};

#[derive(Clone)]
pub struct PostgresArtistProfileRepository {
    db: DatabaseConnection,
}

impl PostgresArtistProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ArtistProfileRepository for PostgresArtistProfileRepository {
    async fn insert(&self, profile: NewArtistProfile) -> Result<(), RepositoryError> {
        let model = artist_profiles::ActiveModel {
            id: Set(profile.id),
            status: Set(ArtistStatus::Pending.as_str().to_string()),
            plan: Set(profile.plan.as_str().to_string()),
            plan_expires_at: Set(None),
            full_name: Set(profile.full_name),
            display_name: Set(profile.display_name),
            bio: Set(Some(profile.bio)),
            age: Set(i16::from(profile.age)),
            nationality: Set(profile.nationality),
            country: Set(profile.country),
            city: Set(profile.city),
            whatsapp: Set(profile.whatsapp),
            website_url: Set(profile.website_url),
            profile_photo_url: Set(profile.profile_photo_url),
            verification_selfie_url: Set(profile.verification_selfie_url),
            id_document_url: Set(profile.id_document_url),
            availability: Set(Availability::Available.as_str().to_string()),
            created_at: Set(Utc::now().fixed_offset()),
        };
        artist_profiles::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ArtistProfile>, RepositoryError> {
        let model = artist_profiles::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        match model {
            Some(model) => {
                let status = ArtistStatus::parse(&model.status).ok_or_else(|| {
                    RepositoryError::Database(format!("unknown artist status '{}'", model.status))
                })?;
                let plan = PlanTier::parse(&model.plan).ok_or_else(|| {
                    RepositoryError::Database(format!("unknown plan '{}'", model.plan))
                })?;
                let availability = Availability::parse(&model.availability).ok_or_else(|| {
                    RepositoryError::Database(format!(
                        "unknown availability '{}'",
                        model.availability
                    ))
                })?;
                Ok(Some(ArtistProfile {
                    id: model.id,
                    status,
                    plan,
                    full_name: model.full_name,
                    display_name: model.display_name,
                    age: model.age as u8,
                    nationality: model.nationality,
                    country: model.country,
                    city: model.city,
                    bio: model.bio,
                    whatsapp: model.whatsapp,
                    website_url: model.website_url,
                    profile_photo_url: model.profile_photo_url,
                    availability,
                    created_at: model.created_at.to_utc(),
                }))
            }
            None => Ok(None),
        }
    }
}
