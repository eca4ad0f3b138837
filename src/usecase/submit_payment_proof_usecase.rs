use chrono::Utc;
use tracing::{info, warn};

use crate::domain::{
    error::{DispatchError, DomainError},
    models::{
        payment::{CURRENCY_CLP, NewPaymentRequest, PaymentStatus},
        subscription::SubscriptionStatus,
    },
    repositories::{
        payment_request_repository::PaymentRequestRepository,
        subscription_repository::SubscriptionRepository,
    },
    services::artifact_store::ArtifactStore,
    validation::ProofSubmissionForm,
};
use crate::usecase::register_artist_usecase::ARTIST_DOCUMENTS_BUCKET;

/// Payment-proof dispatcher: validate locally, upload the proof, record the
/// payment request, then nudge the subscription status. Sequential with
/// short-circuit, no rollback.
pub struct SubmitPaymentProofUsecase<R, S, F>
where
    R: PaymentRequestRepository,
    S: SubscriptionRepository,
    F: ArtifactStore,
{
    payment_request_repository: R,
    subscription_repository: S,
    artifact_store: F,
}

impl<R, S, F> SubmitPaymentProofUsecase<R, S, F>
where
    R: PaymentRequestRepository + Send + Sync,
    S: SubscriptionRepository + Send + Sync,
    F: ArtifactStore,
{
    pub fn new(payment_request_repository: R, subscription_repository: S, artifact_store: F) -> Self {
        Self {
            payment_request_repository,
            subscription_repository,
            artifact_store,
        }
    }

    pub async fn submit(&self, form: ProofSubmissionForm) -> Result<(), DomainError> {
        // Local validation gates every remote call.
        let submission = form.validate()?;

        let path = format!(
            "{}/payment-proof-{}.{}",
            submission.artist_id,
            Utc::now().timestamp_millis(),
            submission.proof.extension()
        );
        let stored = self
            .artifact_store
            .upload(ARTIST_DOCUMENTS_BUCKET, &path, &submission.proof.bytes, false)
            .await
            .map_err(DispatchError::UploadProof)?;
        let proof_url = self.artifact_store.public_url(ARTIST_DOCUMENTS_BUCKET, &stored);

        self.payment_request_repository
            .insert(NewPaymentRequest {
                subscription_id: submission.subscription_id,
                artist_id: submission.artist_id,
                plan: submission.plan,
                billing_period: submission.billing_period,
                amount: submission.amount,
                currency: CURRENCY_CLP,
                payment_method: submission.payment_method,
                proof_of_payment_url: proof_url,
                payment_reference: submission.payment_reference,
                paid_at: submission.paid_at,
                status: PaymentStatus::AwaitingVerification,
            })
            .await
            .map_err(DispatchError::CreatePaymentRequest)?;

        // Best effort: the proof is already recorded, so a failed status
        // update is logged and swallowed.
        if let Err(err) = self
            .subscription_repository
            .set_status(submission.subscription_id, SubscriptionStatus::PendingPayment)
            .await
        {
            warn!(
                subscription_id = %submission.subscription_id,
                error = %err,
                "subscription status update failed after proof was recorded"
            );
        }

        info!(
            subscription_id = %submission.subscription_id,
            artist_id = %submission.artist_id,
            "payment proof received, awaiting verification"
        );
        Ok(())
    }
}
