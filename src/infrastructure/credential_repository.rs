use async_trait::async_trait;
use chrono::Utc;
use entity::credentials;
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError,
    models::{
        credential::{Credential, HashedPassword},
        user::UserRole,
    },
    repositories::credential_repository::CredentialRepository,
};

#[derive(Clone)]
pub struct PostgresCredentialRepository {
    db: DatabaseConnection,
}

impl PostgresCredentialRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialRepository for PostgresCredentialRepository {
    async fn create_credential(
        &self,
        user_id: Uuid,
        email: &str,
        password_hash: HashedPassword,
        role: UserRole,
    ) -> Result<(), RepositoryError> {
        let now = Utc::now().fixed_offset();
        let credential = credentials::ActiveModel {
            user_id: Set(user_id),
            email: Set(email.to_string()),
            password_hash: Set(password_hash.as_str().to_string()),
            role: Set(role.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        credentials::Entity::insert(credential)
            .exec(&self.db)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Credential, RepositoryError> {
        let model = credentials::Entity::find()
            .filter(credentials::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?
            .ok_or(RepositoryError::NotFound)?;

        let role = UserRole::parse(&model.role)
            .ok_or_else(|| RepositoryError::Database(format!("unknown role '{}'", model.role)))?;

        Ok(Credential::reconstruct(
            model.user_id,
            model.email,
            HashedPassword::new(model.password_hash),
            role,
            model.created_at.to_utc(),
            model.updated_at.to_utc(),
        ))
    }
}
