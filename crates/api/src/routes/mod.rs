//! Route definitions, one module per resource.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod favorites;
pub mod health;
pub mod stream;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                 register (public)
/// /auth/login                    login (public)
/// /auth/refresh                  refresh (public)
/// /auth/session                  current user (auth)
/// /auth/logout                   logout (auth)
/// /auth/promote                  grant admin role (admin)
/// /auth/users/{id}               delete account (self or admin)
///
/// /medias/latest                 newest medias (public)
/// /medias?type=                  type-filtered listing (public)
/// /search?q=                     title search (public)
/// /media?id=                     media detail (public)
///
/// /medias/all                    flat media listing (admin)
/// /episodes/all                  episodes with series titles (admin)
/// /media                         multipart create-or-update (admin)
/// /media/{id}                    multipart update, delete (admin)
/// /episode                       multipart upsert (admin)
/// /episode/{episode_id}          multipart update, delete (admin)
///
/// /favorites                     list, add (auth)
/// /favorites/{media_id}          remove (auth)
///
/// /storage/media/{*path}         range-capable file delivery (public)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(catalog::router())
        .merge(admin::router())
        .nest("/favorites", favorites::router())
        .merge(stream::router())
}
