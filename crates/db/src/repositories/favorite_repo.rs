//! Repository for the `favorites` table.

use flicks_core::types::DbId;
use sqlx::PgPool;

use crate::models::favorite::{Favorite, FavoriteMediaRow, FavoriteWithMedia};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, media_id, created_at";

/// Provides operations on a user's favorites.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Insert a favorite, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        media_id: DbId,
    ) -> Result<Favorite, sqlx::Error> {
        let query = format!(
            "INSERT INTO favorites (user_id, media_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .bind(media_id)
            .fetch_one(pool)
            .await
    }

    /// Find a favorite by its `(user, media)` pair.
    pub async fn find_by_user_and_media(
        pool: &PgPool,
        user_id: DbId,
        media_id: DbId,
    ) -> Result<Option<Favorite>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM favorites WHERE user_id = $1 AND media_id = $2"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .bind(media_id)
            .fetch_optional(pool)
            .await
    }

    /// Remove a favorite by its `(user, media)` pair.
    ///
    /// Returns `true` if the row was deleted.
    pub async fn delete_by_user_and_media(
        pool: &PgPool,
        user_id: DbId,
        media_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND media_id = $2")
            .bind(user_id)
            .bind(media_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// A user's favorites with the media card embedded, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<FavoriteWithMedia>, sqlx::Error> {
        let rows = sqlx::query_as::<_, FavoriteMediaRow>(
            "SELECT f.id, f.media_id, f.created_at,
                    m.title, m.categories, m.main_image, m.logo
             FROM favorites f
             JOIN medias m ON f.media_id = m.id
             WHERE f.user_id = $1
             ORDER BY f.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(FavoriteWithMedia::from).collect())
    }
}
