use async_trait::async_trait;
use entity::plan_pricing;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::domain::{
    error::RepositoryError,
    models::plan::{PlanPricing, PlanTier},
    repositories::plan_pricing_repository::PlanPricingRepository,
};

#[derive(Clone)]
pub struct PostgresPlanPricingRepository {
    db: DatabaseConnection,
}

impl PostgresPlanPricingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: plan_pricing::Model) -> Result<PlanPricing, RepositoryError> {
    let plan = PlanTier::parse(&model.plan_type)
        .ok_or_else(|| RepositoryError::Database(format!("unknown plan '{}'", model.plan_type)))?;
    Ok(PlanPricing {
        plan,
        monthly_price: model.monthly_price,
        quarterly_price: model.quarterly_price,
        quarterly_discount_percentage: model.quarterly_discount_percentage,
    })
}

#[async_trait]
impl PlanPricingRepository for PostgresPlanPricingRepository {
    async fn find_by_plan(&self, plan: PlanTier) -> Result<Option<PlanPricing>, RepositoryError> {
        let model = plan_pricing::Entity::find_by_id(plan.as_str().to_string())
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        model.map(to_domain).transpose()
    }

    async fn all(&self) -> Result<Vec<PlanPricing>, RepositoryError> {
        let models = plan_pricing::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        models.into_iter().map(to_domain).collect()
    }
}
