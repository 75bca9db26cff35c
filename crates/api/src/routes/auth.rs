//! Route definitions for the `/auth` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST   /register    -> register
/// POST   /login       -> login
/// POST   /refresh     -> refresh
/// GET    /session     -> session (requires auth)
/// POST   /logout      -> logout (requires auth)
/// POST   /promote     -> promote (admin only)
/// DELETE /users/{id}  -> delete_account (self or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/session", get(auth::session))
        .route("/logout", post(auth::logout))
        .route("/promote", post(auth::promote))
        .route("/users/{id}", delete(auth::delete_account))
}
