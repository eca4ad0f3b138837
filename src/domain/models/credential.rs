use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::models::user::UserRole;

/// Value object holding an already-hashed password. Plain passwords never
/// cross a repository boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct Credential {
    user_id: Uuid,
    email: String,
    password_hash: HashedPassword,
    role: UserRole,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Credential {
    pub fn new(user_id: Uuid, email: String, password_hash: HashedPassword, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            email,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn reconstruct(
        user_id: Uuid,
        email: String,
        password_hash: HashedPassword,
        role: UserRole,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            email,
            password_hash,
            role,
            created_at,
            updated_at,
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
