//! Handlers for public catalog browsing: latest medias, type-filtered
//! listing, title search, and the media detail page.

use axum::extract::{Query, State};
use axum::Json;
use flicks_core::error::CoreError;
use flicks_core::media_types;
use flicks_core::types::{DbId, Timestamp};
use flicks_db::models::media::{MediaCard, MediaRef, MediaSummary};
use flicks_db::repositories::{EpisodeRepo, MediaRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Number of medias on the home-page carousel.
const LATEST_LIMIT: i64 = 5;

// ---------------------------------------------------------------------------
// Query / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ListByTypeParams {
    #[serde(rename = "type")]
    pub media_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DetailParams {
    pub id: Option<DbId>,
}

/// Episode entry on a series detail page.
#[derive(Debug, Serialize)]
pub struct EpisodeDetail {
    pub id: DbId,
    pub season_number: i32,
    pub episode_number: i32,
    pub title: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    /// Episode image, falling back to the media's main image.
    pub image: Option<String>,
}

/// Full media detail page payload.
#[derive(Debug, Serialize)]
pub struct MediaDetail {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub categories: Vec<String>,
    pub directors: Vec<String>,
    pub casting: Vec<String>,
    pub main_image: Option<String>,
    pub logo: Option<String>,
    pub media_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episodes: Option<Vec<EpisodeDetail>>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /medias/latest
///
/// The five most recently added medias, as home-page cards.
pub async fn latest(State(state): State<AppState>) -> AppResult<Json<Vec<MediaCard>>> {
    let medias = MediaRepo::latest(&state.pool, LATEST_LIMIT).await?;
    Ok(Json(medias))
}

/// GET /medias?type=film|series
///
/// All medias of the requested type, newest first. 400 on a missing or
/// unknown type.
pub async fn list_by_type(
    State(state): State<AppState>,
    Query(params): Query<ListByTypeParams>,
) -> AppResult<Json<Vec<MediaSummary>>> {
    let media_type = params.media_type.as_deref().ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "Missing media type. Expected one of: {:?}",
            media_types::VALID_MEDIA_TYPES
        )))
    })?;
    media_types::validate_media_type(media_type)?;

    let medias = MediaRepo::list_by_type(&state.pool, media_type).await?;
    Ok(Json(medias))
}

/// GET /search?q=term
///
/// Case-insensitive substring search on titles, newest first. 400 on a
/// missing or empty term.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<MediaRef>>> {
    let term = params.q.as_deref().map(str::trim).unwrap_or("");
    if term.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Missing search term 'q'".into(),
        )));
    }

    let results = MediaRepo::search(&state.pool, term).await?;
    Ok(Json(results))
}

/// GET /media?id=N
///
/// Full detail for one media. Series additionally carry their episodes,
/// ordered by season then episode number, with each episode's image falling
/// back to the media's main image.
pub async fn detail(
    State(state): State<AppState>,
    Query(params): Query<DetailParams>,
) -> AppResult<Json<MediaDetail>> {
    let id = params.id.ok_or_else(|| {
        AppError::Core(CoreError::Validation("Missing media id".into()))
    })?;

    let media = MediaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Media",
            id,
        }))?;

    let episodes = if media.media_type == media_types::MEDIA_TYPE_SERIES {
        let rows = EpisodeRepo::list_by_media(&state.pool, media.id).await?;
        Some(
            rows.into_iter()
                .map(|e| EpisodeDetail {
                    id: e.id,
                    season_number: e.season_number,
                    episode_number: e.episode_number,
                    title: e.title,
                    description: e.description,
                    created_at: e.created_at,
                    image: e.image.or_else(|| media.main_image.clone()),
                })
                .collect(),
        )
    } else {
        None
    };

    Ok(Json(MediaDetail {
        id: media.id,
        title: media.title,
        description: media.description,
        categories: media.categories,
        directors: media.directors,
        casting: media.casting,
        main_image: media.main_image,
        logo: media.logo,
        media_type: media.media_type,
        episodes,
    }))
}
