pub mod artist_profile_repository;
pub mod credential_repository;
pub mod payment_request_repository;
pub mod plan_pricing_repository;
pub mod subscription_repository;
pub mod user_repository;
