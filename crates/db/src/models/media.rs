//! Media entity model and the reduced listing shapes.

use flicks_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full media row from the `medias` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Media {
    pub id: DbId,
    pub title: String,
    pub media_type: String,
    pub description: Option<String>,
    pub categories: Vec<String>,
    pub directors: Vec<String>,
    pub casting: Vec<String>,
    pub nb_episodes: Option<i32>,
    pub main_image: Option<String>,
    pub logo: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Card shape for the home-page carousel (`GET /medias/latest`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MediaCard {
    pub id: DbId,
    pub title: String,
    pub categories: Vec<String>,
    pub main_image: Option<String>,
    pub logo: Option<String>,
}

/// Card shape for type-filtered browsing (`GET /medias?type=`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MediaSummary {
    pub id: DbId,
    pub title: String,
    pub categories: Vec<String>,
    pub main_image: Option<String>,
}

/// Minimal reference shape for search results and admin listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MediaRef {
    pub id: DbId,
    pub title: String,
    pub media_type: String,
}

/// DTO for creating a new media.
#[derive(Debug)]
pub struct CreateMedia {
    pub title: String,
    pub media_type: String,
    pub description: Option<String>,
    pub categories: Vec<String>,
    pub directors: Vec<String>,
    pub casting: Vec<String>,
    pub nb_episodes: Option<i32>,
}

/// DTO for updating an existing media. Only non-`None` fields are applied.
#[derive(Debug, Default)]
pub struct UpdateMedia {
    pub title: Option<String>,
    pub media_type: Option<String>,
    pub description: Option<String>,
    pub categories: Option<Vec<String>>,
    pub directors: Option<Vec<String>>,
    pub casting: Option<Vec<String>>,
    pub nb_episodes: Option<i32>,
    pub main_image: Option<String>,
    pub logo: Option<String>,
}
