use async_trait::async_trait;
use chrono::Utc;
use entity::{user_profiles, users};
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError,
    models::user::{User, UserRole},
    repositories::user_repository::UserRepository,
};

#[derive(Clone)]
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create_user(
        &self,
        id: Uuid,
        email: &str,
        role: UserRole,
    ) -> Result<(), RepositoryError> {
        let user = users::ActiveModel {
            id: Set(id),
            email: Set(email.to_string()),
            role: Set(role.as_str().to_string()),
            created_at: Set(Utc::now().fixed_offset()),
        };
        users::Entity::insert(user)
            .exec(&self.db)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let user = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        match user {
            Some(model) => {
                let role = UserRole::parse(&model.role).ok_or_else(|| {
                    RepositoryError::Database(format!("unknown role '{}'", model.role))
                })?;
                Ok(Some(User {
                    id: model.id,
                    email: model.email,
                    role,
                    created_at: model.created_at.to_utc(),
                }))
            }
            None => Ok(None),
        }
    }

    async fn create_visitor_profile(&self, id: Uuid, name: &str) -> Result<(), RepositoryError> {
        let profile = user_profiles::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
        };
        user_profiles::Entity::insert(profile)
            .exec(&self.db)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        Ok(())
    }
}
