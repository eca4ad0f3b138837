use crate::domain::{error::DomainError, models::user::User};

pub type SessionToken = String;

/// Issues the bearer token a successful login hands back.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &User) -> Result<SessionToken, DomainError>;
}
