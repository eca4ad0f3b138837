use serde::Serialize;
use uuid::Uuid;

use crate::domain::{
    error::{DomainError, RepositoryError},
    models::plan::{BillingPeriod, PlanTier},
    repositories::{
        artist_profile_repository::ArtistProfileRepository,
        plan_pricing_repository::PlanPricingRepository,
        subscription_repository::SubscriptionRepository, user_repository::UserRepository,
    },
};

/// Everything the payment-instructions screen needs for a freshly
/// registered artist.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentInstructions {
    pub artist_id: Uuid,
    pub subscription_id: Uuid,
    pub email: String,
    pub display_name: String,
    pub plan: PlanTier,
    pub billing_period: BillingPeriod,
    pub amount: i64,
}

pub struct PaymentInstructionsUsecase<A, U, S, PP>
where
    A: ArtistProfileRepository,
    U: UserRepository,
    S: SubscriptionRepository,
    PP: PlanPricingRepository,
{
    artist_profile_repository: A,
    user_repository: U,
    subscription_repository: S,
    plan_pricing_repository: PP,
}

impl<A, U, S, PP> PaymentInstructionsUsecase<A, U, S, PP>
where
    A: ArtistProfileRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    S: SubscriptionRepository + Send + Sync,
    PP: PlanPricingRepository + Send + Sync,
{
    pub fn new(
        artist_profile_repository: A,
        user_repository: U,
        subscription_repository: S,
        plan_pricing_repository: PP,
    ) -> Self {
        Self {
            artist_profile_repository,
            user_repository,
            subscription_repository,
            plan_pricing_repository,
        }
    }

    /// Loads the artist, their latest subscription and its pricing. Any
    /// missing row fails the guard; the caller redirects to the wizard.
    pub async fn load(&self, artist_id: Uuid) -> Result<PaymentInstructions, DomainError> {
        let artist = self
            .artist_profile_repository
            .find_by_id(artist_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let user = self
            .user_repository
            .find_by_id(artist_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let subscription = self
            .subscription_repository
            .latest_for_artist(artist_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let pricing = self
            .plan_pricing_repository
            .find_by_plan(subscription.plan)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(PaymentInstructions {
            artist_id,
            subscription_id: subscription.id,
            email: user.email,
            display_name: artist.display_name,
            plan: subscription.plan,
            billing_period: subscription.billing_period,
            amount: pricing.amount_for(subscription.billing_period),
        })
    }
}
