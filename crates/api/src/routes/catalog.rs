//! Route definitions for public catalog browsing.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Public catalog routes, mounted at the root.
///
/// ```text
/// GET /medias/latest   -> latest
/// GET /medias?type=    -> list_by_type
/// GET /search?q=       -> search
/// GET /media?id=       -> detail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/medias/latest", get(catalog::latest))
        .route("/medias", get(catalog::list_by_type))
        .route("/search", get(catalog::search))
        .route("/media", get(catalog::detail))
}
