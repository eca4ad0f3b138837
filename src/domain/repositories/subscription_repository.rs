use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError,
    models::subscription::{NewSubscription, Subscription, SubscriptionStatus},
};

#[async_trait]
pub trait SubscriptionRepository {
    async fn insert(&self, subscription: NewSubscription) -> Result<Subscription, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Subscription>, RepositoryError>;

    /// Most recent subscription for an artist, by creation time.
    async fn latest_for_artist(
        &self,
        artist_id: Uuid,
    ) -> Result<Option<Subscription>, RepositoryError>;

    async fn set_status(
        &self,
        id: Uuid,
        status: SubscriptionStatus,
    ) -> Result<(), RepositoryError>;
}
