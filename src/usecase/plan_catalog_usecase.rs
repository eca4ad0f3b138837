use serde::Serialize;

use crate::domain::{
    error::DomainError,
    models::plan::{PlanLimits, PlanPricing, PlanTier},
    repositories::plan_pricing_repository::PlanPricingRepository,
};

#[derive(Debug, Clone, Serialize)]
pub struct PlanCatalogEntry {
    pub plan: PlanTier,
    pub limits: PlanLimits,
    /// None when the pricing table has no row for the tier yet.
    pub pricing: Option<PlanPricing>,
}

/// Read-only catalog backing the plan-selection step.
pub struct PlanCatalogUsecase<PP: PlanPricingRepository> {
    plan_pricing_repository: PP,
}

impl<PP: PlanPricingRepository + Send + Sync> PlanCatalogUsecase<PP> {
    pub fn new(plan_pricing_repository: PP) -> Self {
        Self { plan_pricing_repository }
    }

    pub async fn catalog(&self) -> Result<Vec<PlanCatalogEntry>, DomainError> {
        let pricing = self.plan_pricing_repository.all().await?;
        Ok(PlanTier::ALL
            .into_iter()
            .map(|tier| PlanCatalogEntry {
                plan: tier,
                limits: tier.limits(),
                pricing: pricing.iter().find(|row| row.plan == tier).cloned(),
            })
            .collect())
    }
}
