//! Handlers for the authenticated user's favorites.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use flicks_core::error::CoreError;
use flicks_core::types::DbId;
use flicks_db::models::favorite::{Favorite, FavoriteWithMedia};
use flicks_db::repositories::{FavoriteRepo, MediaRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /favorites`.
#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    pub media_id: DbId,
}

/// GET /favorites
///
/// The caller's favorites with their media embedded, newest first.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<FavoriteWithMedia>>> {
    let favorites = FavoriteRepo::list_for_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(favorites))
}

/// POST /favorites
///
/// Add a media to the caller's favorites. 404 when the media does not
/// exist, 409 when it is already favorited.
pub async fn add(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<AddFavoriteRequest>,
) -> AppResult<(StatusCode, Json<Favorite>)> {
    if MediaRepo::find_by_id(&state.pool, input.media_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Media",
            id: input.media_id,
        }));
    }

    if FavoriteRepo::find_by_user_and_media(&state.pool, auth_user.user_id, input.media_id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Media is already in favorites".into(),
        )));
    }

    let favorite = FavoriteRepo::create(&state.pool, auth_user.user_id, input.media_id).await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

/// DELETE /favorites/{media_id}
///
/// Remove a media from the caller's favorites. 404 when it was not there.
pub async fn remove(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(media_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed =
        FavoriteRepo::delete_by_user_and_media(&state.pool, auth_user.user_id, media_id).await?;

    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Favorite",
            id: media_id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}
