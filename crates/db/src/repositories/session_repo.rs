//! Repository for the `user_sessions` table.

use flicks_core::types::DbId;
use sqlx::PgPool;

use crate::models::session::{CreateSession, UserSession};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, refresh_token_hash, expires_at, is_revoked, created_at";

/// Provides operations on refresh-token sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<UserSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_sessions (user_id, refresh_token_hash, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserSession>(&query)
            .bind(input.user_id)
            .bind(&input.refresh_token_hash)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find a live (unrevoked, unexpired) session by refresh-token hash.
    pub async fn find_by_refresh_token_hash(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<UserSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_sessions
             WHERE refresh_token_hash = $1 AND NOT is_revoked AND expires_at > NOW()"
        );
        sqlx::query_as::<_, UserSession>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Revoke a single session.
    pub async fn revoke(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE user_sessions SET is_revoked = TRUE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Revoke every session belonging to a user (logout-everywhere).
    pub async fn revoke_all_for_user(pool: &PgPool, user_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE user_sessions SET is_revoked = TRUE WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
