//! Route definition for range-capable media file delivery.

use axum::routing::get;
use axum::Router;

use crate::handlers::stream;
use crate::state::AppState;

/// Static media delivery, mounted at the root.
///
/// ```text
/// GET /storage/media/{*path}   -> serve_media
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/storage/media/{*path}", get(stream::serve_media))
}
