use async_trait::async_trait;
use chrono::Utc;
use entity::payment_requests;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError, models::payment::NewPaymentRequest,
    repositories::payment_request_repository::PaymentRequestRepository,
};

#[derive(Clone)]
pub struct PostgresPaymentRequestRepository {
    db: DatabaseConnection,
}

impl PostgresPaymentRequestRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaymentRequestRepository for PostgresPaymentRequestRepository {
    async fn insert(&self, request: NewPaymentRequest) -> Result<(), RepositoryError> {
        let model = payment_requests::ActiveModel {
            id: Set(Uuid::new_v4()),
            subscription_id: Set(request.subscription_id),
            artist_id: Set(request.artist_id),
            plan_type: Set(request.plan.as_str().to_string()),
            billing_period: Set(request.billing_period.as_str().to_string()),
            amount: Set(request.amount),
            currency: Set(request.currency.to_string()),
            payment_method: Set(request.payment_method.as_str().to_string()),
            proof_of_payment_url: Set(request.proof_of_payment_url),
            payment_reference: Set(request.payment_reference),
            paid_at: Set(request.paid_at),
            status: Set(request.status.as_str().to_string()),
            created_at: Set(Utc::now().fixed_offset()),
        };
        payment_requests::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        Ok(())
    }
}
