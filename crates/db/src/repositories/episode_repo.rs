//! Repository for the `episodes` table.

use flicks_core::types::DbId;
use sqlx::PgPool;

use crate::models::episode::{CreateEpisode, Episode, EpisodeWithSeries, UpdateEpisode};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, media_id, season_number, episode_number, title, description, image, \
                       created_at, updated_at";

/// Provides CRUD and listing operations for episodes.
pub struct EpisodeRepo;

impl EpisodeRepo {
    /// Insert a new episode, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEpisode) -> Result<Episode, sqlx::Error> {
        let query = format!(
            "INSERT INTO episodes (media_id, season_number, episode_number, title, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(input.media_id)
            .bind(input.season_number)
            .bind(input.episode_number)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find an episode by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM episodes WHERE id = $1");
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an episode by its natural key `(media, season, episode)`.
    pub async fn find_by_media_season_episode(
        pool: &PgPool,
        media_id: DbId,
        season_number: i32,
        episode_number: i32,
    ) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM episodes
             WHERE media_id = $1 AND season_number = $2 AND episode_number = $3"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(media_id)
            .bind(season_number)
            .bind(episode_number)
            .fetch_optional(pool)
            .await
    }

    /// Update an episode. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEpisode,
    ) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!(
            "UPDATE episodes SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                image = COALESCE($4, image),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Delete an episode. Returns `true` if the row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM episodes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All episodes of a series, ordered by season then episode number.
    pub async fn list_by_media(pool: &PgPool, media_id: DbId) -> Result<Vec<Episode>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM episodes
             WHERE media_id = $1
             ORDER BY season_number, episode_number"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(media_id)
            .fetch_all(pool)
            .await
    }

    /// Every episode joined to its series title. Admin listing.
    pub async fn list_with_series(pool: &PgPool) -> Result<Vec<EpisodeWithSeries>, sqlx::Error> {
        sqlx::query_as::<_, EpisodeWithSeries>(
            "SELECT e.id, e.title AS episode_title, m.title AS series_title
             FROM episodes e
             JOIN medias m ON e.media_id = m.id
             ORDER BY m.title, e.season_number, e.episode_number",
        )
        .fetch_all(pool)
        .await
    }
}
