//! Repository for the `medias` table.

use flicks_core::types::DbId;
use sqlx::PgPool;

use crate::models::media::{CreateMedia, Media, MediaCard, MediaRef, MediaSummary, UpdateMedia};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, media_type, description, categories, directors, casting, \
                       nb_episodes, main_image, logo, created_at, updated_at";

/// Provides CRUD and listing operations for medias.
pub struct MediaRepo;

impl MediaRepo {
    /// Insert a new media, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMedia) -> Result<Media, sqlx::Error> {
        let query = format!(
            "INSERT INTO medias (title, media_type, description, categories, directors, casting, nb_episodes)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(&input.title)
            .bind(&input.media_type)
            .bind(&input.description)
            .bind(&input.categories)
            .bind(&input.directors)
            .bind(&input.casting)
            .bind(input.nb_episodes)
            .fetch_one(pool)
            .await
    }

    /// Find a media by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Media>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM medias WHERE id = $1");
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a media. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMedia,
    ) -> Result<Option<Media>, sqlx::Error> {
        let query = format!(
            "UPDATE medias SET
                title = COALESCE($2, title),
                media_type = COALESCE($3, media_type),
                description = COALESCE($4, description),
                categories = COALESCE($5, categories),
                directors = COALESCE($6, directors),
                casting = COALESCE($7, casting),
                nb_episodes = COALESCE($8, nb_episodes),
                main_image = COALESCE($9, main_image),
                logo = COALESCE($10, logo),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.media_type)
            .bind(&input.description)
            .bind(&input.categories)
            .bind(&input.directors)
            .bind(&input.casting)
            .bind(input.nb_episodes)
            .bind(&input.main_image)
            .bind(&input.logo)
            .fetch_optional(pool)
            .await
    }

    /// Delete a media. Episodes and favorites cascade.
    ///
    /// Returns `true` if the row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM medias WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The `limit` most recently created medias, as home-page cards.
    pub async fn latest(pool: &PgPool, limit: i64) -> Result<Vec<MediaCard>, sqlx::Error> {
        sqlx::query_as::<_, MediaCard>(
            "SELECT id, title, categories, main_image, logo
             FROM medias
             ORDER BY created_at DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// All medias of a given type, newest first.
    pub async fn list_by_type(
        pool: &PgPool,
        media_type: &str,
    ) -> Result<Vec<MediaSummary>, sqlx::Error> {
        sqlx::query_as::<_, MediaSummary>(
            "SELECT id, title, categories, main_image
             FROM medias
             WHERE media_type = $1
             ORDER BY created_at DESC",
        )
        .bind(media_type)
        .fetch_all(pool)
        .await
    }

    /// Case-insensitive substring search on title, newest first.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<MediaRef>, sqlx::Error> {
        // Escape LIKE metacharacters so a literal '%' in the term cannot
        // widen the match.
        let escaped = term.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
        sqlx::query_as::<_, MediaRef>(
            "SELECT id, title, media_type
             FROM medias
             WHERE title ILIKE '%' || $1 || '%'
             ORDER BY created_at DESC",
        )
        .bind(escaped)
        .fetch_all(pool)
        .await
    }

    /// Every media as a minimal reference, newest first. Admin listing.
    pub async fn list_refs(pool: &PgPool) -> Result<Vec<MediaRef>, sqlx::Error> {
        sqlx::query_as::<_, MediaRef>(
            "SELECT id, title, media_type FROM medias ORDER BY created_at DESC",
        )
        .fetch_all(pool)
        .await
    }
}
