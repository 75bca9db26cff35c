//! User entity model and DTOs.

use flicks_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub full_name: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub full_name: Option<String>,
    pub email: String,
    pub role: String,
    pub created_at: Timestamp,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        UserResponse {
            id: user.id,
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug)]
pub struct CreateUser {
    pub full_name: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
