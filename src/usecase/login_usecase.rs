use crate::domain::{
    error::{DomainError, RepositoryError},
    models::user::User,
    repositories::{
        credential_repository::CredentialRepository, user_repository::UserRepository,
    },
    services::{
        password_service::PasswordHasher,
        token_service::{SessionToken, TokenIssuer},
    },
};

#[derive(Debug)]
pub struct LoginResult {
    pub token: SessionToken,
    pub user: User,
}

pub struct LoginUsecase<C: CredentialRepository, U: UserRepository, P: PasswordHasher, T: TokenIssuer>
{
    credential_repository: C,
    user_repository: U,
    password_hasher: P,
    token_issuer: T,
}

impl<C: CredentialRepository, U: UserRepository, P: PasswordHasher, T: TokenIssuer>
    LoginUsecase<C, U, P, T>
{
    pub fn new(credential_repository: C, user_repository: U, password_hasher: P, token_issuer: T) -> Self {
        Self {
            credential_repository,
            user_repository,
            password_hasher,
            token_issuer,
        }
    }

    pub async fn login(&self, email: String, password: String) -> Result<LoginResult, DomainError>
    where
        C: Send + Sync,
        U: Send + Sync,
        P: Send + Sync,
        T: Send + Sync,
    {
        // An unknown email and a wrong password are indistinguishable to
        // the caller.
        let credential = self
            .credential_repository
            .find_by_email(&email)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => DomainError::AuthenticationFailed,
                other => DomainError::Repository(other),
            })?;

        let valid = self
            .password_hasher
            .verify(&password, credential.password_hash())?;
        if !valid {
            return Err(DomainError::AuthenticationFailed);
        }

        let user = self
            .user_repository
            .find_by_id(credential.user_id())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let token = self.token_issuer.issue(&user)?;

        Ok(LoginResult { token, user })
    }
}
