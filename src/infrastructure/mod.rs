pub mod argon2_password_hasher;
pub mod artist_profile_repository;
pub mod credential_repository;
pub mod fs_artifact_store;
pub mod jwt_token_generator;
pub mod payment_request_repository;
pub mod plan_pricing_repository;
pub mod storage_image_transformer;
pub mod subscription_repository;
pub mod user_repository;
