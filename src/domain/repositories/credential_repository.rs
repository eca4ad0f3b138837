use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError,
    models::{
        credential::{Credential, HashedPassword},
        user::UserRole,
    },
};

/// Credential storage. A duplicate email surfaces as an ordinary
/// `Database` failure from the unique constraint, not a dedicated variant.
#[async_trait]
pub trait CredentialRepository {
    async fn create_credential(
        &self,
        user_id: Uuid,
        email: &str,
        password_hash: HashedPassword,
        role: UserRole,
    ) -> Result<(), RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Credential, RepositoryError>;
}
