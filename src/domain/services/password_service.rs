use crate::domain::{error::DomainError, models::credential::HashedPassword};

/// Hashing and verification of plain-text passwords. Password policy
/// (minimum length) lives in step validation, not here.
pub trait PasswordHasher: Clone {
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError>;

    fn verify(
        &self,
        plain_password: &str,
        hashed_password: &HashedPassword,
    ) -> Result<bool, DomainError>;
}
