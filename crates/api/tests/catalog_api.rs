//! HTTP-level integration tests for public catalog browsing.

mod common;

use axum::http::StatusCode;
use common::{age_media, body_json, get, seed_episode, seed_media};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// GET /medias/latest
// ---------------------------------------------------------------------------

/// An empty catalog yields an empty list.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_latest_empty(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/medias/latest").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

/// Latest returns at most five medias, newest first.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_latest_returns_five_newest(pool: PgPool) {
    for i in 0..7 {
        let media = seed_media(&pool, &format!("Film {i}"), "film").await;
        // Film 0 is the oldest, Film 6 the newest.
        age_media(&pool, media.id, 70 - i * 10).await;
    }
    let app = common::build_test_app(pool);

    let response = get(app, "/medias/latest").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["title"], "Film 6");
    assert_eq!(items[4]["title"], "Film 2");
    // Card shape: no description, but artwork fields present.
    assert!(items[0].get("description").is_none());
    assert!(items[0].as_object().unwrap().contains_key("logo"));
}

// ---------------------------------------------------------------------------
// GET /medias?type=
// ---------------------------------------------------------------------------

/// Type filtering only returns the requested kind.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_by_type_filters(pool: PgPool) {
    seed_media(&pool, "A Film", "film").await;
    seed_media(&pool, "A Series", "series").await;
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/medias?type=film").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "A Film");

    let response = get(app, "/medias?type=series").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap()[0]["title"], "A Series");
}

/// A missing or unknown type is a 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_by_type_validation(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/medias").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(app, "/medias?type=podcast").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// GET /search
// ---------------------------------------------------------------------------

/// Search matches substrings case-insensitively.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_matches_substring(pool: PgPool) {
    seed_media(&pool, "The Grand Voyage", "film").await;
    seed_media(&pool, "Voyagers", "series").await;
    seed_media(&pool, "Unrelated", "film").await;
    let app = common::build_test_app(pool);

    let response = get(app, "/search?q=voyag").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles.len(), 2);
    assert!(titles.contains(&"The Grand Voyage"));
    assert!(titles.contains(&"Voyagers"));
}

/// A missing or blank term is a 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_requires_term(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/search").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(app, "/search?q=%20%20").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A literal '%' in the term does not act as a wildcard.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_escapes_like_metacharacters(pool: PgPool) {
    seed_media(&pool, "100% Wolf", "film").await;
    seed_media(&pool, "Plain Title", "film").await;
    let app = common::build_test_app(pool);

    let response = get(app, "/search?q=0%25%20W").await; // "0% W"
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "100% Wolf");
}

// ---------------------------------------------------------------------------
// GET /media?id=
// ---------------------------------------------------------------------------

/// Detail of a film carries the full metadata and no episodes key.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_detail_film(pool: PgPool) {
    let media = seed_media(&pool, "A Film", "film").await;
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/media?id={}", media.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], media.id);
    assert_eq!(json["title"], "A Film");
    assert_eq!(json["media_type"], "film");
    assert_eq!(json["categories"], serde_json::json!(["drama"]));
    assert!(json.get("episodes").is_none());
}

/// Detail of a series lists episodes ordered by season then episode, with
/// the image falling back to the media's main image.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_detail_series_with_episodes(pool: PgPool) {
    let media = seed_media(&pool, "A Series", "series").await;
    seed_episode(&pool, media.id, 2, 1, "S2E1").await;
    seed_episode(&pool, media.id, 1, 2, "S1E2").await;
    let with_image = seed_episode(&pool, media.id, 1, 1, "S1E1").await;

    // Give the media a main image and one episode its own image.
    sqlx::query("UPDATE medias SET main_image = '/storage/media/images/media_1_main.jpg' WHERE id = $1")
        .bind(media.id)
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("UPDATE episodes SET image = '/storage/media/series/own.jpg' WHERE id = $1")
        .bind(with_image.id)
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/media?id={}", media.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let episodes = json["episodes"].as_array().unwrap();
    assert_eq!(episodes.len(), 3);

    let order: Vec<&str> = episodes
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(order, vec!["S1E1", "S1E2", "S2E1"]);

    // Own image wins; the others fall back to the media's main image.
    assert_eq!(episodes[0]["image"], "/storage/media/series/own.jpg");
    assert_eq!(
        episodes[1]["image"],
        "/storage/media/images/media_1_main.jpg"
    );
}

/// Unknown and missing ids are 404 and 400 respectively.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_detail_errors(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/media?id=42").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app, "/media").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
