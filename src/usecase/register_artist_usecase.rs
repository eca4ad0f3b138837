//! The submission dispatcher: turns a fully-accumulated registration into
//! backend state through a strict sequence of remote calls. Each step gates
//! on the previous one; nothing compensates on failure, so a mid-pipeline
//! error can leave an orphaned credential or user row behind (see
//! DESIGN.md).

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    error::{DispatchError, DomainError},
    models::{
        artist::NewArtistProfile,
        registration::{ArtistRegistration, FileUpload},
        subscription::{NewSubscription, SubscriptionStatus},
        user::UserRole,
    },
    repositories::{
        artist_profile_repository::ArtistProfileRepository,
        credential_repository::CredentialRepository,
        subscription_repository::SubscriptionRepository, user_repository::UserRepository,
    },
    services::{artifact_store::ArtifactStore, password_service::PasswordHasher},
};

/// Bucket holding verification documents and payment proofs, namespaced by
/// artist id.
pub const ARTIST_DOCUMENTS_BUCKET: &str = "artist-documents";

pub struct RegisterArtistUsecase<C, U, A, S, F, P>
where
    C: CredentialRepository,
    U: UserRepository,
    A: ArtistProfileRepository,
    S: SubscriptionRepository,
    F: ArtifactStore,
    P: PasswordHasher,
{
    credential_repository: C,
    user_repository: U,
    artist_profile_repository: A,
    subscription_repository: S,
    artifact_store: F,
    password_hasher: P,
}

impl<C, U, A, S, F, P> RegisterArtistUsecase<C, U, A, S, F, P>
where
    C: CredentialRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    A: ArtistProfileRepository + Send + Sync,
    S: SubscriptionRepository + Send + Sync,
    F: ArtifactStore,
    P: PasswordHasher + Send + Sync,
{
    pub fn new(
        credential_repository: C,
        user_repository: U,
        artist_profile_repository: A,
        subscription_repository: S,
        artifact_store: F,
        password_hasher: P,
    ) -> Self {
        Self {
            credential_repository,
            user_repository,
            artist_profile_repository,
            subscription_repository,
            artifact_store,
            password_hasher,
        }
    }

    /// Runs the five-step pipeline and returns the new artist's id for the
    /// payment-instructions screen.
    pub async fn register(&self, registration: ArtistRegistration) -> Result<Uuid, DomainError> {
        let password_hash = self.password_hasher.hash(&registration.password)?;
        let artist_id = Uuid::new_v4();

        // 1. Credential, tagged with the artist role.
        self.credential_repository
            .create_credential(artist_id, &registration.email, password_hash, UserRole::Artist)
            .await
            .map_err(DispatchError::CreateCredential)?;

        // 2. Users row linked to the credential.
        self.user_repository
            .create_user(artist_id, &registration.email, UserRole::Artist)
            .await
            .map_err(DispatchError::CreateUser)?;

        // 3. Verification uploads. A missing file means a missing URL; a
        // failed upload degrades the same way rather than aborting the
        // pipeline.
        let profile_photo_url = self
            .upload_document(artist_id, "profile-photo", registration.profile_photo.as_ref())
            .await;
        let verification_selfie_url = self
            .upload_document(
                artist_id,
                "selfie-verification",
                registration.verification_selfie.as_ref(),
            )
            .await;
        let id_document_url = self
            .upload_document(artist_id, "id-document", registration.id_document.as_ref())
            .await;

        // 4. Artist profile, pending until staff approve.
        self.artist_profile_repository
            .insert(NewArtistProfile {
                id: artist_id,
                plan: registration.plan,
                full_name: registration.full_name,
                display_name: registration.display_name,
                age: registration.age,
                nationality: registration.nationality,
                country: registration.country,
                city: registration.city,
                bio: registration.bio,
                whatsapp: registration.whatsapp,
                website_url: registration.website_url,
                profile_photo_url,
                verification_selfie_url,
                id_document_url,
            })
            .await
            .map_err(DispatchError::CreateProfile)?;

        // 5. Subscription awaiting manual payment.
        self.subscription_repository
            .insert(NewSubscription {
                artist_id,
                plan: registration.plan,
                billing_period: registration.billing_period,
                status: SubscriptionStatus::PendingPayment,
            })
            .await
            .map_err(DispatchError::CreateSubscription)?;

        info!(%artist_id, plan = registration.plan.as_str(), "artist registered, awaiting payment");
        Ok(artist_id)
    }

    async fn upload_document(
        &self,
        artist_id: Uuid,
        kind: &str,
        file: Option<&FileUpload>,
    ) -> Option<String> {
        let file = file?;
        let path = format!("{artist_id}/{kind}.{}", file.extension());
        match self
            .artifact_store
            .upload(ARTIST_DOCUMENTS_BUCKET, &path, &file.bytes, false)
            .await
        {
            Ok(stored) => Some(self.artifact_store.public_url(ARTIST_DOCUMENTS_BUCKET, &stored)),
            Err(err) => {
                warn!(%artist_id, kind, error = %err, "verification upload failed, profile keeps a null url");
                None
            }
        }
    }
}
