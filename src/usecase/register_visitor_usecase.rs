use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use crate::domain::{
    error::{DispatchError, DomainError},
    models::user::{User, UserRole},
    repositories::{
        credential_repository::CredentialRepository, user_repository::UserRepository,
    },
    services::password_service::PasswordHasher,
};

/// Visitor sign-up: credential, then users row, then an optional
/// display-name profile whose failure is logged but never fatal.
pub struct RegisterVisitorUsecase<C: CredentialRepository, U: UserRepository, P: PasswordHasher> {
    credential_repository: C,
    user_repository: U,
    password_hasher: P,
}

impl<C: CredentialRepository, U: UserRepository, P: PasswordHasher>
    RegisterVisitorUsecase<C, U, P>
{
    pub fn new(credential_repository: C, user_repository: U, password_hasher: P) -> Self {
        Self {
            credential_repository,
            user_repository,
            password_hasher,
        }
    }

    pub async fn register(
        &self,
        email: String,
        password: String,
        name: Option<String>,
    ) -> Result<User, DomainError>
    where
        C: Send + Sync,
        U: Send + Sync,
        P: Send + Sync,
    {
        let password_hash = self.password_hasher.hash(&password)?;
        let user_id = Uuid::new_v4();

        self.credential_repository
            .create_credential(user_id, &email, password_hash, UserRole::Visitor)
            .await
            .map_err(DispatchError::CreateCredential)?;

        self.user_repository
            .create_user(user_id, &email, UserRole::Visitor)
            .await
            .map_err(DispatchError::CreateUser)?;

        if let Some(name) = name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            if let Err(err) = self.user_repository.create_visitor_profile(user_id, name).await {
                warn!(%user_id, error = %err, "visitor profile insert failed, account kept");
            }
        }

        Ok(User {
            id: user_id,
            email,
            role: UserRole::Visitor,
            created_at: Utc::now(),
        })
    }
}
