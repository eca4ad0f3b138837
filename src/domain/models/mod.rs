pub mod artist;
pub mod credential;
pub mod payment;
pub mod plan;
pub mod registration;
pub mod subscription;
pub mod user;
