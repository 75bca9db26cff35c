//! Episode entity model and DTOs.

use flicks_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full episode row from the `episodes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Episode {
    pub id: DbId,
    pub media_id: DbId,
    pub season_number: i32,
    pub episode_number: i32,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Episode joined to its series title, for the admin listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EpisodeWithSeries {
    pub id: DbId,
    pub episode_title: String,
    pub series_title: String,
}

/// DTO for creating a new episode.
#[derive(Debug)]
pub struct CreateEpisode {
    pub media_id: DbId,
    pub season_number: i32,
    pub episode_number: i32,
    pub title: String,
    pub description: Option<String>,
}

/// DTO for updating an existing episode. Only non-`None` fields are applied.
#[derive(Debug, Default)]
pub struct UpdateEpisode {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}
