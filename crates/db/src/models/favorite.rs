//! Favorite entity model and the embedded-media listing shape.

use flicks_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::media::MediaCard;

/// Favorite row from the `favorites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub user_id: DbId,
    pub media_id: DbId,
    pub created_at: Timestamp,
}

/// Flat join row used internally by the repository.
#[derive(Debug, Clone, FromRow)]
pub struct FavoriteMediaRow {
    pub id: DbId,
    pub media_id: DbId,
    pub created_at: Timestamp,
    pub title: String,
    pub categories: Vec<String>,
    pub main_image: Option<String>,
    pub logo: Option<String>,
}

/// Favorite with its media embedded, as returned by `GET /favorites`.
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteWithMedia {
    pub id: DbId,
    pub media_id: DbId,
    pub created_at: Timestamp,
    pub media: MediaCard,
}

impl From<FavoriteMediaRow> for FavoriteWithMedia {
    fn from(row: FavoriteMediaRow) -> Self {
        FavoriteWithMedia {
            id: row.id,
            media_id: row.media_id,
            created_at: row.created_at,
            media: MediaCard {
                id: row.media_id,
                title: row.title,
                categories: row.categories,
                main_image: row.main_image,
                logo: row.logo,
            },
        }
    }
}
