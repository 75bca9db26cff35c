//! Route definitions for the `/favorites` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Routes mounted at `/favorites`. All require authentication.
///
/// ```text
/// GET    /             -> list
/// POST   /             -> add
/// DELETE /{media_id}   -> remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(favorites::list).post(favorites::add))
        .route("/{media_id}", delete(favorites::remove))
}
