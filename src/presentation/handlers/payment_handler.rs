use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;
use uuid::Uuid;

use crate::{
    domain::{
        models::{
            payment::PaymentMethod,
            plan::{BillingPeriod, PlanTier},
            registration::FileUpload,
        },
        repositories::{
            artist_profile_repository::ArtistProfileRepository,
            payment_request_repository::PaymentRequestRepository,
            plan_pricing_repository::PlanPricingRepository,
            subscription_repository::SubscriptionRepository, user_repository::UserRepository,
        },
        services::artifact_store::ArtifactStore,
        validation::ProofSubmissionForm,
    },
    presentation::handlers::error_response,
    usecase::{
        payment_instructions_usecase::PaymentInstructionsUsecase,
        plan_catalog_usecase::PlanCatalogUsecase,
        submit_payment_proof_usecase::SubmitPaymentProofUsecase,
        upload_proof_context_usecase::UploadProofContextUsecase,
    },
};

/// A single proof image at up to 5 MiB plus the prefilled text fields.
const MAX_PROOF_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Where every failed page guard sends the browser.
const WIZARD_PATH: &str = "/register-artist";

#[derive(Clone)]
pub struct PaymentState<
    R: PaymentRequestRepository,
    S: SubscriptionRepository,
    A: ArtistProfileRepository,
    U: UserRepository,
    PP: PlanPricingRepository,
    F: ArtifactStore,
> {
    pub submit_proof_usecase: Arc<SubmitPaymentProofUsecase<R, S, F>>,
    pub instructions_usecase: Arc<PaymentInstructionsUsecase<A, U, S, PP>>,
    pub proof_context_usecase: Arc<UploadProofContextUsecase<S, A, U, PP>>,
    pub plan_catalog_usecase: Arc<PlanCatalogUsecase<PP>>,
}

pub fn create_payment_router<
    R: PaymentRequestRepository + Clone + Send + Sync + 'static,
    S: SubscriptionRepository + Clone + Send + Sync + 'static,
    A: ArtistProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    PP: PlanPricingRepository + Clone + Send + Sync + 'static,
    F: ArtifactStore + Clone + 'static,
>(
    submit_proof_usecase: SubmitPaymentProofUsecase<R, S, F>,
    instructions_usecase: PaymentInstructionsUsecase<A, U, S, PP>,
    proof_context_usecase: UploadProofContextUsecase<S, A, U, PP>,
    plan_catalog_usecase: PlanCatalogUsecase<PP>,
) -> Router {
    let state = PaymentState {
        submit_proof_usecase: Arc::new(submit_proof_usecase),
        instructions_usecase: Arc::new(instructions_usecase),
        proof_context_usecase: Arc::new(proof_context_usecase),
        plan_catalog_usecase: Arc::new(plan_catalog_usecase),
    };

    Router::new()
        .route("/plans", get(plans::<R, S, A, U, PP, F>))
        .route(
            "/payments/instructions",
            get(payment_instructions::<R, S, A, U, PP, F>),
        )
        .route(
            "/payments/proof-context",
            get(proof_context::<R, S, A, U, PP, F>),
        )
        .route("/payments/proof", post(submit_proof::<R, S, A, U, PP, F>))
        .layer(DefaultBodyLimit::max(MAX_PROOF_BODY_BYTES))
        .with_state(state)
}

async fn plans<
    R: PaymentRequestRepository + Send + Sync,
    S: SubscriptionRepository + Send + Sync,
    A: ArtistProfileRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    PP: PlanPricingRepository + Send + Sync,
    F: ArtifactStore,
>(
    State(state): State<PaymentState<R, S, A, U, PP, F>>,
) -> Response {
    match state.plan_catalog_usecase.catalog().await {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(err) => error_response(err),
    }
}

#[derive(Deserialize)]
struct InstructionsQuery {
    artist_id: Option<String>,
}

/// Page guard plus data load for the payment-instructions screen. Any
/// hole in the chain sends the visitor back to the start of the wizard
/// instead of erroring.
async fn payment_instructions<
    R: PaymentRequestRepository + Send + Sync,
    S: SubscriptionRepository + Send + Sync,
    A: ArtistProfileRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    PP: PlanPricingRepository + Send + Sync,
    F: ArtifactStore,
>(
    State(state): State<PaymentState<R, S, A, U, PP, F>>,
    Query(query): Query<InstructionsQuery>,
) -> Response {
    let Some(artist_id) = query.artist_id.as_deref().and_then(|raw| Uuid::parse_str(raw).ok())
    else {
        return Redirect::to(WIZARD_PATH).into_response();
    };
    match state.instructions_usecase.load(artist_id).await {
        Ok(instructions) => (StatusCode::OK, Json(instructions)).into_response(),
        Err(err) => {
            warn!(%artist_id, error = %err, "payment instructions guard failed");
            Redirect::to(WIZARD_PATH).into_response()
        }
    }
}

#[derive(Deserialize)]
struct ProofContextQuery {
    subscription_id: Option<String>,
    method: Option<String>,
}

async fn proof_context<
    R: PaymentRequestRepository + Send + Sync,
    S: SubscriptionRepository + Send + Sync,
    A: ArtistProfileRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    PP: PlanPricingRepository + Send + Sync,
    F: ArtifactStore,
>(
    State(state): State<PaymentState<R, S, A, U, PP, F>>,
    Query(query): Query<ProofContextQuery>,
) -> Response {
    let Some(subscription_id) = query
        .subscription_id
        .as_deref()
        .and_then(|raw| Uuid::parse_str(raw).ok())
    else {
        return Redirect::to(WIZARD_PATH).into_response();
    };
    let Some(method) = query.method.as_deref().and_then(PaymentMethod::parse) else {
        return Redirect::to(WIZARD_PATH).into_response();
    };
    match state.proof_context_usecase.load(subscription_id, method).await {
        Ok(context) => (StatusCode::OK, Json(context)).into_response(),
        Err(err) => {
            warn!(%subscription_id, error = %err, "proof context guard failed");
            Redirect::to(WIZARD_PATH).into_response()
        }
    }
}

/// Raw multipart fields of the upload-proof form. The identifying fields
/// are prefilled by the proof-context screen, so a hole there is a broken
/// client, not a user mistake.
#[derive(Default)]
struct ProofForm {
    subscription_id: Option<String>,
    artist_id: Option<String>,
    plan: Option<String>,
    billing_period: Option<String>,
    amount: Option<String>,
    payment_method: Option<String>,
    payment_reference: Option<String>,
    payment_date: String,
    proof: Option<FileUpload>,
}

impl ProofForm {
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, Response> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            if name == "proof" {
                let file_name = field.file_name().unwrap_or("proof").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await.map_err(bad_multipart)?.to_vec();
                form.proof = Some(FileUpload { file_name, content_type, bytes });
                continue;
            }
            let text = field.text().await.map_err(bad_multipart)?;
            match name.as_str() {
                "subscription_id" => form.subscription_id = Some(text),
                "artist_id" => form.artist_id = Some(text),
                "plan" => form.plan = Some(text),
                "billing_period" => form.billing_period = Some(text),
                "amount" => form.amount = Some(text),
                "payment_method" => form.payment_method = Some(text),
                "payment_reference" => form.payment_reference = Some(text),
                "payment_date" => form.payment_date = text,
                _ => {}
            }
        }
        Ok(form)
    }

    /// Parses the prefilled fields; the user-entered ones stay raw for the
    /// dispatcher's own validation.
    fn into_submission(self) -> Result<ProofSubmissionForm, Response> {
        let subscription_id = parse_field(self.subscription_id, "subscription_id", |raw| {
            Uuid::parse_str(raw).ok()
        })?;
        let artist_id =
            parse_field(self.artist_id, "artist_id", |raw| Uuid::parse_str(raw).ok())?;
        let plan = parse_field(self.plan, "plan", PlanTier::parse)?;
        let billing_period =
            parse_field(self.billing_period, "billing_period", BillingPeriod::parse)?;
        let amount = parse_field(self.amount, "amount", |raw| raw.parse::<i64>().ok())?;
        let payment_method =
            parse_field(self.payment_method, "payment_method", PaymentMethod::parse)?;

        Ok(ProofSubmissionForm {
            subscription_id,
            artist_id,
            plan,
            billing_period,
            amount,
            payment_method,
            payment_reference: self.payment_reference,
            payment_date: self.payment_date,
            proof: self.proof,
        })
    }
}

fn parse_field<T>(
    raw: Option<String>,
    name: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, Response> {
    raw.as_deref().and_then(parse).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": format!("missing or invalid field: {name}") })),
        )
            .into_response()
    })
}

fn bad_multipart(err: axum::extract::multipart::MultipartError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": format!("malformed multipart body: {err}") })),
    )
        .into_response()
}

async fn submit_proof<
    R: PaymentRequestRepository + Send + Sync,
    S: SubscriptionRepository + Send + Sync,
    A: ArtistProfileRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    PP: PlanPricingRepository + Send + Sync,
    F: ArtifactStore,
>(
    State(state): State<PaymentState<R, S, A, U, PP, F>>,
    multipart: Multipart,
) -> Response {
    let form = match ProofForm::from_multipart(multipart).await {
        Ok(form) => form,
        Err(response) => return response,
    };
    let submission = match form.into_submission() {
        Ok(submission) => submission,
        Err(response) => return response,
    };

    match state.submit_proof_usecase.submit(submission).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({ "next": "/register-artist/pending-verification" })),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
