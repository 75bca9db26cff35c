//! Route definitions for admin catalog management.
//!
//! Every handler here enforces the admin role via `RequireAdmin`. The
//! multipart routes get a raised body limit so full-length film uploads
//! pass; axum's 2 MiB default would reject them.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::media_admin;
use crate::state::AppState;

/// Maximum multipart upload size (10 GiB, matching full-length films).
const UPLOAD_BODY_LIMIT: usize = 10 * 1024 * 1024 * 1024;

/// Admin catalog routes, mounted at the root.
///
/// ```text
/// GET    /medias/all             -> list_all_medias
/// GET    /episodes/all           -> list_all_episodes
/// POST   /media                  -> create_or_update_media
/// PUT    /media/{id}             -> update_media
/// DELETE /media/{id}             -> delete_media
/// POST   /episode                -> create_or_update_episode
/// PUT    /episode/{episode_id}   -> update_episode
/// DELETE /episode/{episode_id}   -> delete_episode
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/medias/all", get(media_admin::list_all_medias))
        .route("/episodes/all", get(media_admin::list_all_episodes))
        .route("/media", post(media_admin::create_or_update_media))
        .route(
            "/media/{id}",
            put(media_admin::update_media).delete(media_admin::delete_media),
        )
        .route("/episode", post(media_admin::create_or_update_episode))
        .route(
            "/episode/{episode_id}",
            put(media_admin::update_episode).delete(media_admin::delete_episode),
        )
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}
