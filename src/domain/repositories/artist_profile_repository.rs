use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError,
    models::artist::{ArtistProfile, NewArtistProfile},
};

#[async_trait]
pub trait ArtistProfileRepository {
    /// Inserts with status `pending`; activation happens through staff
    /// review, never here.
    async fn insert(&self, profile: NewArtistProfile) -> Result<(), RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ArtistProfile>, RepositoryError>;
}
