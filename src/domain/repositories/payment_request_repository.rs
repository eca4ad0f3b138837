use async_trait::async_trait;

use crate::domain::{error::RepositoryError, models::payment::NewPaymentRequest};

#[async_trait]
pub trait PaymentRequestRepository {
    /// Payment requests are append-only; the review process mutates them
    /// out of band.
    async fn insert(&self, request: NewPaymentRequest) -> Result<(), RepositoryError>;
}
