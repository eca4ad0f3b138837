pub mod artist_profiles;
pub mod credentials;
pub mod payment_requests;
pub mod plan_pricing;
pub mod plan_subscriptions;
pub mod user_profiles;
pub mod users;
