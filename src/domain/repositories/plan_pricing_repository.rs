use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::plan::{PlanPricing, PlanTier},
};

#[async_trait]
pub trait PlanPricingRepository {
    async fn find_by_plan(&self, plan: PlanTier) -> Result<Option<PlanPricing>, RepositoryError>;

    async fn all(&self) -> Result<Vec<PlanPricing>, RepositoryError>;
}
