use serde::Serialize;
use uuid::Uuid;

use crate::domain::{
    error::{DomainError, RepositoryError},
    models::{
        payment::PaymentMethod,
        plan::{BillingPeriod, PlanTier},
    },
    repositories::{
        artist_profile_repository::ArtistProfileRepository,
        plan_pricing_repository::PlanPricingRepository,
        subscription_repository::SubscriptionRepository, user_repository::UserRepository,
    },
};

/// Prefilled context for the upload-proof form, resolved from the deep
/// link's subscription id and chosen payment method.
#[derive(Debug, Clone, Serialize)]
pub struct ProofContext {
    pub subscription_id: Uuid,
    pub artist_id: Uuid,
    pub email: String,
    pub display_name: String,
    pub plan: PlanTier,
    pub billing_period: BillingPeriod,
    pub amount: i64,
    pub payment_method: PaymentMethod,
}

pub struct UploadProofContextUsecase<S, A, U, PP>
where
    S: SubscriptionRepository,
    A: ArtistProfileRepository,
    U: UserRepository,
    PP: PlanPricingRepository,
{
    subscription_repository: S,
    artist_profile_repository: A,
    user_repository: U,
    plan_pricing_repository: PP,
}

impl<S, A, U, PP> UploadProofContextUsecase<S, A, U, PP>
where
    S: SubscriptionRepository + Send + Sync,
    A: ArtistProfileRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    PP: PlanPricingRepository + Send + Sync,
{
    pub fn new(
        subscription_repository: S,
        artist_profile_repository: A,
        user_repository: U,
        plan_pricing_repository: PP,
    ) -> Self {
        Self {
            subscription_repository,
            artist_profile_repository,
            user_repository,
            plan_pricing_repository,
        }
    }

    pub async fn load(
        &self,
        subscription_id: Uuid,
        method: PaymentMethod,
    ) -> Result<ProofContext, DomainError> {
        let subscription = self
            .subscription_repository
            .find_by_id(subscription_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let artist = self
            .artist_profile_repository
            .find_by_id(subscription.artist_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let user = self
            .user_repository
            .find_by_id(subscription.artist_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let pricing = self
            .plan_pricing_repository
            .find_by_plan(subscription.plan)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(ProofContext {
            subscription_id,
            artist_id: subscription.artist_id,
            email: user.email,
            display_name: artist.display_name,
            plan: subscription.plan,
            billing_period: subscription.billing_period,
            amount: pricing.amount_for(subscription.billing_period),
            payment_method: method,
        })
    }
}
