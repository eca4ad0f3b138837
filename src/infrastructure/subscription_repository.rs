use async_trait::async_trait;
use chrono::Utc;
use entity::plan_subscriptions;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError,
    models::plan::{BillingPeriod, PlanTier},
    models::subscription::{NewSubscription, Subscription, SubscriptionStatus},
    repositories::subscription_repository::SubscriptionRepository,
};

#[derive(Clone)]
pub struct PostgresSubscriptionRepository {
    db: DatabaseConnection,
}

impl PostgresSubscriptionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: plan_subscriptions::Model) -> Result<Subscription, RepositoryError> {
    let plan = PlanTier::parse(&model.plan_type)
        .ok_or_else(|| RepositoryError::Database(format!("unknown plan '{}'", model.plan_type)))?;
    let billing_period = BillingPeriod::parse(&model.billing_period).ok_or_else(|| {
        RepositoryError::Database(format!("unknown billing period '{}'", model.billing_period))
    })?;
    let status = SubscriptionStatus::parse(&model.status).ok_or_else(|| {
        RepositoryError::Database(format!("unknown subscription status '{}'", model.status))
    })?;
    Ok(Subscription {
        id: model.id,
        artist_id: model.artist_id,
        plan,
        billing_period,
        status,
        created_at: model.created_at.to_utc(),
    })
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn insert(&self, subscription: NewSubscription) -> Result<Subscription, RepositoryError> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let model = plan_subscriptions::ActiveModel {
            id: Set(id),
            artist_id: Set(subscription.artist_id),
            plan_type: Set(subscription.plan.as_str().to_string()),
            billing_period: Set(subscription.billing_period.as_str().to_string()),
            status: Set(subscription.status.as_str().to_string()),
            created_at: Set(now.fixed_offset()),
        };
        plan_subscriptions::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        Ok(Subscription {
            id,
            artist_id: subscription.artist_id,
            plan: subscription.plan,
            billing_period: subscription.billing_period,
            status: subscription.status,
            created_at: now,
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Subscription>, RepositoryError> {
        let model = plan_subscriptions::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        model.map(to_domain).transpose()
    }

    async fn latest_for_artist(
        &self,
        artist_id: Uuid,
    ) -> Result<Option<Subscription>, RepositoryError> {
        let model = plan_subscriptions::Entity::find()
            .filter(plan_subscriptions::Column::ArtistId.eq(artist_id))
            .order_by_desc(plan_subscriptions::Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        model.map(to_domain).transpose()
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: SubscriptionStatus,
    ) -> Result<(), RepositoryError> {
        let model = plan_subscriptions::ActiveModel {
            id: Set(id),
            status: Set(status.as_str().to_string()),
            ..Default::default()
        };
        plan_subscriptions::Entity::update(model)
            .exec(&self.db)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        Ok(())
    }
}
