use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError,
    models::user::{User, UserRole},
};

#[async_trait]
pub trait UserRepository {
    async fn create_user(&self, id: Uuid, email: &str, role: UserRole)
    -> Result<(), RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;

    /// Visitor display-name profile; optional at sign-up.
    async fn create_visitor_profile(&self, id: Uuid, name: &str) -> Result<(), RepositoryError>;
}
