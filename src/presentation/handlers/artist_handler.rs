use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    domain::{
        error::{DomainError, ValidationError},
        models::{
            plan::{BillingPeriod, PlanTier},
            registration::FileUpload,
        },
        repositories::{
            artist_profile_repository::ArtistProfileRepository,
            credential_repository::CredentialRepository,
            subscription_repository::SubscriptionRepository, user_repository::UserRepository,
        },
        services::{artifact_store::ArtifactStore, password_service::PasswordHasher},
        validation::{
            AccountStep, ContactBioStep, PersonalInfoStep, PlanSelection, VerificationStep,
            check_image_file,
        },
        wizard::RegistrationWizard,
    },
    presentation::handlers::error_response,
    usecase::register_artist_usecase::RegisterArtistUsecase,
};

/// Three verification images at up to 5 MiB each plus the text fields.
const MAX_REGISTER_BODY_BYTES: usize = 32 * 1024 * 1024;

#[derive(Clone)]
pub struct ArtistState<
    C: CredentialRepository,
    U: UserRepository,
    A: ArtistProfileRepository,
    S: SubscriptionRepository,
    F: ArtifactStore,
    P: PasswordHasher,
> {
    pub register_usecase: Arc<RegisterArtistUsecase<C, U, A, S, F, P>>,
}

pub fn create_artist_router<
    C: CredentialRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    A: ArtistProfileRepository + Clone + Send + Sync + 'static,
    S: SubscriptionRepository + Clone + Send + Sync + 'static,
    F: ArtifactStore + Clone + 'static,
    P: PasswordHasher + Send + Sync + 'static,
>(
    register_usecase: RegisterArtistUsecase<C, U, A, S, F, P>,
) -> Router {
    let state = ArtistState {
        register_usecase: Arc::new(register_usecase),
    };

    Router::new()
        .route("/artists/register", post(register::<C, U, A, S, F, P>))
        .route("/artists/register/steps/{step}", post(validate_step))
        .layer(DefaultBodyLimit::max(MAX_REGISTER_BODY_BYTES))
        .with_state(state)
}

/// Raw multipart fields before any validation. Missing text fields stay
/// empty so the step validators report them, not the parser.
#[derive(Default)]
struct RegisterForm {
    email: String,
    password: String,
    confirm_password: String,
    full_name: String,
    display_name: String,
    age: String,
    nationality: String,
    country: String,
    city: String,
    bio: String,
    whatsapp: Option<String>,
    website_url: Option<String>,
    plan: Option<String>,
    billing_period: Option<String>,
    profile_photo: Option<FileUpload>,
    verification_selfie: Option<FileUpload>,
    id_document: Option<FileUpload>,
}

impl RegisterForm {
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, Response> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            match name.as_str() {
                "profile_photo" | "verification_selfie" | "id_document" => {
                    let file_name = field.file_name().unwrap_or("upload").to_string();
                    let content_type = field
                        .content_type()
                        .unwrap_or("application/octet-stream")
                        .to_string();
                    let bytes = field.bytes().await.map_err(bad_multipart)?.to_vec();
                    let upload = FileUpload { file_name, content_type, bytes };
                    match name.as_str() {
                        "profile_photo" => form.profile_photo = Some(upload),
                        "verification_selfie" => form.verification_selfie = Some(upload),
                        _ => form.id_document = Some(upload),
                    }
                }
                _ => {
                    let text = field.text().await.map_err(bad_multipart)?;
                    match name.as_str() {
                        "email" => form.email = text,
                        "password" => form.password = text,
                        "confirm_password" => form.confirm_password = text,
                        "full_name" => form.full_name = text,
                        "display_name" => form.display_name = text,
                        "age" => form.age = text,
                        "nationality" => form.nationality = text,
                        "country" => form.country = text,
                        "city" => form.city = text,
                        "bio" => form.bio = text,
                        "whatsapp" => form.whatsapp = Some(text),
                        "website_url" => form.website_url = Some(text),
                        "plan" => form.plan = Some(text),
                        "billing_period" => form.billing_period = Some(text),
                        _ => {}
                    }
                }
            }
        }
        Ok(form)
    }

    /// Replays the form through the wizard, step by step in order. The
    /// first failing step aborts before any backend call.
    fn into_registration(
        self,
    ) -> Result<crate::domain::models::registration::ArtistRegistration, ValidationError> {
        let plan = match self.plan.as_deref() {
            Some(raw) => PlanTier::parse(raw).ok_or(ValidationError::MissingFields)?,
            None => PlanTier::default(),
        };
        let billing_period = match self.billing_period.as_deref() {
            Some(raw) => BillingPeriod::parse(raw).ok_or(ValidationError::MissingFields)?,
            None => BillingPeriod::default(),
        };

        let mut wizard = RegistrationWizard::new();
        wizard.advance(
            AccountStep {
                email: self.email,
                password: self.password,
                confirm_password: self.confirm_password,
            }
            .validate()?,
        );
        wizard.advance(
            PersonalInfoStep {
                full_name: self.full_name,
                display_name: self.display_name,
                age: self.age,
                nationality: self.nationality,
                country: self.country,
                city: self.city,
            }
            .validate()?,
        );
        wizard.advance(
            VerificationStep {
                profile_photo: self.profile_photo,
                verification_selfie: self.verification_selfie,
                id_document: self.id_document,
            }
            .validate()?,
        );
        wizard.advance(
            ContactBioStep {
                bio: self.bio,
                whatsapp: self.whatsapp,
                website_url: self.website_url,
            }
            .validate()?,
        );
        wizard.complete(PlanSelection { plan, billing_period }.into_patch())
    }
}

fn bad_multipart(err: axum::extract::multipart::MultipartError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": format!("malformed multipart body: {err}") })),
    )
        .into_response()
}

async fn register<
    C: CredentialRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    A: ArtistProfileRepository + Send + Sync,
    S: SubscriptionRepository + Send + Sync,
    F: ArtifactStore,
    P: PasswordHasher + Send + Sync,
>(
    State(state): State<ArtistState<C, U, A, S, F, P>>,
    multipart: Multipart,
) -> Response {
    let form = match RegisterForm::from_multipart(multipart).await {
        Ok(form) => form,
        Err(response) => return response,
    };
    let registration = match form.into_registration() {
        Ok(registration) => registration,
        Err(err) => return error_response(err.into()),
    };

    match state.register_usecase.register(registration).await {
        Ok(artist_id) => (
            StatusCode::CREATED,
            Json(json!({
                "artist_id": artist_id,
                "next": format!("/register-artist/payment-instructions?artist_id={artist_id}"),
            })),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

#[derive(Deserialize)]
struct AccountStepBody {
    email: String,
    password: String,
    confirm_password: String,
}

#[derive(Deserialize)]
struct PersonalInfoBody {
    full_name: String,
    display_name: String,
    age: String,
    nationality: String,
    country: String,
    city: String,
}

/// Step 3 is checked from metadata alone so the client can gate a file
/// before shipping its bytes.
#[derive(Deserialize)]
struct FileMetadata {
    #[allow(dead_code)]
    file_name: String,
    content_type: String,
    size_bytes: u64,
}

#[derive(Deserialize)]
struct VerificationBody {
    profile_photo: Option<FileMetadata>,
    verification_selfie: Option<FileMetadata>,
    id_document: Option<FileMetadata>,
}

#[derive(Deserialize)]
struct ContactBioBody {
    bio: String,
    whatsapp: Option<String>,
    website_url: Option<String>,
}

#[derive(Deserialize)]
struct PlanBody {
    plan: PlanTier,
    #[allow(dead_code)]
    billing_period: BillingPeriod,
}

/// Stateless per-step validation, one endpoint per wizard screen. A 204
/// means the client may advance; a 422 carries the first failing rule.
async fn validate_step(Path(step): Path<u8>, Json(body): Json<serde_json::Value>) -> Response {
    let result = match step {
        1 => serde_json::from_value::<AccountStepBody>(body).map(|b| {
            AccountStep {
                email: b.email,
                password: b.password,
                confirm_password: b.confirm_password,
            }
            .validate()
            .map(drop)
        }),
        2 => serde_json::from_value::<PersonalInfoBody>(body).map(|b| {
            PersonalInfoStep {
                full_name: b.full_name,
                display_name: b.display_name,
                age: b.age,
                nationality: b.nationality,
                country: b.country,
                city: b.city,
            }
            .validate()
            .map(drop)
        }),
        3 => serde_json::from_value::<VerificationBody>(body).map(validate_verification_metadata),
        4 => serde_json::from_value::<ContactBioBody>(body).map(|b| {
            ContactBioStep {
                bio: b.bio,
                whatsapp: b.whatsapp,
                website_url: b.website_url,
            }
            .validate()
            .map(drop)
        }),
        // The plan selectors always hold a valid value; deserialization is
        // the whole check.
        5 => serde_json::from_value::<PlanBody>(body).map(|_| Ok(())),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };

    match result {
        Ok(Ok(())) => StatusCode::NO_CONTENT.into_response(),
        Ok(Err(err)) => error_response(DomainError::Validation(err)),
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": format!("invalid step body: {err}") })),
        )
            .into_response(),
    }
}

fn validate_verification_metadata(body: VerificationBody) -> Result<(), ValidationError> {
    let (Some(photo), Some(selfie), Some(document)) =
        (body.profile_photo, body.verification_selfie, body.id_document)
    else {
        return Err(ValidationError::MissingDocuments);
    };
    for file in [&photo, &selfie, &document] {
        check_image_file(&file.content_type, file.size_bytes)?;
    }
    Ok(())
}
