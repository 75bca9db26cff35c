//! Shared test harness: router construction mirroring `main.rs`, request
//! helpers driving the app through `tower::ServiceExt::oneshot`, and
//! database seed helpers.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use flicks_api::auth::jwt::JwtConfig;
use flicks_api::auth::password::hash_password;
use flicks_api::config::ServerConfig;
use flicks_api::router::build_app_router;
use flicks_api::state::AppState;
use flicks_db::models::media::{CreateMedia, Media};
use flicks_db::models::user::{CreateUser, User};
use flicks_db::models::episode::{CreateEpisode, Episode};
use flicks_db::repositories::{EpisodeRepo, MediaRepo, UserRepo};

/// Password used for every seeded test user.
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults and the given storage root.
pub fn test_config(storage_root: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        storage_root,
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and storage root.
///
/// This goes through the same [`build_app_router`] as production, so tests
/// exercise the real middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery).
pub fn build_test_app_with_storage(pool: PgPool, storage_root: PathBuf) -> Router {
    let config = test_config(storage_root);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Build the test app with a default (unused) storage root.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_storage(pool, PathBuf::from("storage"))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a GET request with extra headers (e.g. `Range`).
pub async fn get_with_headers(
    app: Router,
    uri: &str,
    headers: &[(&str, &str)],
) -> Response {
    let mut builder = Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request with a Bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

/// Read a response body as raw bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

// ---------------------------------------------------------------------------
// Multipart helpers
// ---------------------------------------------------------------------------

/// Boundary used for hand-built multipart bodies.
pub const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

/// One part of a multipart form.
pub struct Part {
    pub name: &'static str,
    pub filename: Option<&'static str>,
    pub content_type: Option<&'static str>,
    pub data: Vec<u8>,
}

/// A text field.
pub fn text_part(name: &'static str, value: &str) -> Part {
    Part {
        name,
        filename: None,
        content_type: None,
        data: value.as_bytes().to_vec(),
    }
}

/// A file field.
pub fn file_part(
    name: &'static str,
    filename: &'static str,
    content_type: &'static str,
    data: Vec<u8>,
) -> Part {
    Part {
        name,
        filename: Some(filename),
        content_type: Some(content_type),
        data,
    }
}

/// Assemble a `multipart/form-data` body from parts.
pub fn multipart_body(parts: &[Part]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part.filename {
            Some(filename) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{filename}\"\r\n",
                    part.name
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n", part.name).as_bytes(),
            ),
        }
        if let Some(content_type) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(&part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Send a multipart request with a Bearer token.
pub async fn multipart_auth(
    app: Router,
    method: &str,
    uri: &str,
    parts: &[Part],
    token: &str,
) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(multipart_body(parts)))
            .unwrap(),
    )
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Create a user directly in the database with [`TEST_PASSWORD`].
pub async fn create_test_user(pool: &PgPool, email: &str, role: &str) -> User {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            full_name: Some("Test User".to_string()),
            email: email.to_string(),
            password_hash: hashed,
            role: role.to_string(),
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Log a user in via the API and return the JSON auth payload.
pub async fn login_user(app: Router, email: &str) -> serde_json::Value {
    let body = serde_json::json!({ "email": email, "password": TEST_PASSWORD });
    let response = post_json(app, "/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

/// Log a user in and return just the access token.
pub async fn access_token_for(app: Router, email: &str) -> String {
    login_user(app, email).await["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Seed a user and an admin, returning `(user_token, admin_token)`.
pub async fn seed_user_and_admin(pool: &PgPool, app: Router) -> (String, String) {
    create_test_user(pool, "user@test.com", "user").await;
    create_test_user(pool, "admin@test.com", "admin").await;
    let user_token = access_token_for(app.clone(), "user@test.com").await;
    let admin_token = access_token_for(app, "admin@test.com").await;
    (user_token, admin_token)
}

/// Insert a media directly through the repository.
pub async fn seed_media(pool: &PgPool, title: &str, media_type: &str) -> Media {
    MediaRepo::create(
        pool,
        &CreateMedia {
            title: title.to_string(),
            media_type: media_type.to_string(),
            description: Some(format!("{title} description")),
            categories: vec!["drama".to_string()],
            directors: vec!["A. Director".to_string()],
            casting: vec!["B. Actor".to_string()],
            nb_episodes: None,
        },
    )
    .await
    .expect("media creation should succeed")
}

/// Insert an episode directly through the repository.
pub async fn seed_episode(
    pool: &PgPool,
    media_id: i64,
    season: i32,
    episode: i32,
    title: &str,
) -> Episode {
    EpisodeRepo::create(
        pool,
        &CreateEpisode {
            media_id,
            season_number: season,
            episode_number: episode,
            title: title.to_string(),
            description: None,
        },
    )
    .await
    .expect("episode creation should succeed")
}

/// Backdate a media's `created_at` by the given number of minutes, so
/// ordering assertions have distinct timestamps to work with.
pub async fn age_media(pool: &PgPool, media_id: i64, minutes: i32) {
    sqlx::query("UPDATE medias SET created_at = NOW() - make_interval(mins => $1) WHERE id = $2")
        .bind(minutes)
        .bind(media_id)
        .execute(pool)
        .await
        .expect("backdating should succeed");
}
