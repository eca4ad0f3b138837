mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use axum::Router;
use sea_orm::{ConnectOptions, Database};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    infrastructure::{
        argon2_password_hasher::Argon2PasswordHasher,
        artist_profile_repository::PostgresArtistProfileRepository,
        credential_repository::PostgresCredentialRepository, fs_artifact_store::FsArtifactStore,
        jwt_token_generator::JwtTokenIssuer,
        payment_request_repository::PostgresPaymentRequestRepository,
        plan_pricing_repository::PostgresPlanPricingRepository,
        subscription_repository::PostgresSubscriptionRepository,
        user_repository::PostgresUserRepository,
    },
    presentation::handlers::{
        artist_handler::create_artist_router, auth_handler::create_auth_router,
        payment_handler::create_payment_router,
    },
    usecase::{
        login_usecase::LoginUsecase, payment_instructions_usecase::PaymentInstructionsUsecase,
        plan_catalog_usecase::PlanCatalogUsecase, register_artist_usecase::RegisterArtistUsecase,
        register_visitor_usecase::RegisterVisitorUsecase,
        submit_payment_proof_usecase::SubmitPaymentProofUsecase,
        upload_proof_context_usecase::UploadProofContextUsecase,
    },
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database_url = dotenvy::var("DATABASE_URL")?;
    let jwt_secret = dotenvy::var("JWT_SECRET")?;
    let storage_root = dotenvy::var("STORAGE_ROOT").unwrap_or_else(|_| "storage".to_string());
    let public_storage_url = dotenvy::var("PUBLIC_STORAGE_URL")
        .unwrap_or_else(|_| "http://localhost:8080/storage".to_string());
    let bind_addr = dotenvy::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(10)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(opt).await?;

    let credential_repository = PostgresCredentialRepository::new(db.clone());
    let user_repository = PostgresUserRepository::new(db.clone());
    let artist_profile_repository = PostgresArtistProfileRepository::new(db.clone());
    let subscription_repository = PostgresSubscriptionRepository::new(db.clone());
    let payment_request_repository = PostgresPaymentRequestRepository::new(db.clone());
    let plan_pricing_repository = PostgresPlanPricingRepository::new(db.clone());
    let password_hasher = Argon2PasswordHasher::new();
    let token_issuer = JwtTokenIssuer::new(jwt_secret);
    let artifact_store = FsArtifactStore::new(storage_root, public_storage_url);

    let login_usecase = LoginUsecase::new(
        credential_repository.clone(),
        user_repository.clone(),
        password_hasher.clone(),
        token_issuer,
    );
    let register_visitor_usecase = RegisterVisitorUsecase::new(
        credential_repository.clone(),
        user_repository.clone(),
        password_hasher.clone(),
    );
    let register_artist_usecase = RegisterArtistUsecase::new(
        credential_repository,
        user_repository.clone(),
        artist_profile_repository.clone(),
        subscription_repository.clone(),
        artifact_store.clone(),
        password_hasher,
    );
    let submit_proof_usecase = SubmitPaymentProofUsecase::new(
        payment_request_repository,
        subscription_repository.clone(),
        artifact_store,
    );
    let instructions_usecase = PaymentInstructionsUsecase::new(
        artist_profile_repository.clone(),
        user_repository.clone(),
        subscription_repository.clone(),
        plan_pricing_repository.clone(),
    );
    let proof_context_usecase = UploadProofContextUsecase::new(
        subscription_repository,
        artist_profile_repository,
        user_repository,
        plan_pricing_repository.clone(),
    );
    let plan_catalog_usecase = PlanCatalogUsecase::new(plan_pricing_repository);

    let app = Router::new().nest(
        "/api",
        create_auth_router(login_usecase, register_visitor_usecase)
            .merge(create_artist_router(register_artist_usecase))
            .merge(create_payment_router(
                submit_proof_usecase,
                instructions_usecase,
                proof_context_usecase,
                plan_catalog_usecase,
            )),
    );

    let listener = TcpListener::bind(&bind_addr).await?;
    info!(%bind_addr, "listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
