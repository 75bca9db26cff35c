//! Admin handlers for catalog management: multipart create-or-update of
//! medias and episodes, deletions, and the flat admin listings.
//!
//! Media and episode uploads arrive as `multipart/form-data`: text fields
//! carry the metadata (list fields JSON-encoded), file fields carry the
//! artwork and videos. Files are written to the canonical storage layout
//! and only image paths are persisted on rows -- video locations are fully
//! determined by ids.

use axum::extract::multipart::Field;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use flicks_core::error::CoreError;
use flicks_core::listfield::parse_string_list;
use flicks_core::media_types::{self, MEDIA_TYPE_FILM, MEDIA_TYPE_SERIES};
use flicks_core::storage;
use flicks_core::types::DbId;
use flicks_db::models::episode::{CreateEpisode, Episode, EpisodeWithSeries, UpdateEpisode};
use flicks_db::models::media::{CreateMedia, Media, MediaRef, UpdateMedia};
use flicks_db::repositories::{EpisodeRepo, MediaRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Accepted artwork extensions.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
/// Accepted video extensions.
const VIDEO_EXTENSIONS: &[&str] = &["mp4"];

/// Size caps for artwork uploads.
const MAIN_IMAGE_MAX_BYTES: usize = 2 * 1024 * 1024;
const LOGO_MAX_BYTES: usize = 1024 * 1024;

// ---------------------------------------------------------------------------
// Multipart form collection
// ---------------------------------------------------------------------------

/// A file field pulled out of a multipart request.
struct UploadedFile {
    /// Lowercased filename extension.
    ext: String,
    data: Vec<u8>,
}

/// Collected `POST|PUT /media` form.
#[derive(Default)]
struct MediaForm {
    id: Option<DbId>,
    title: Option<String>,
    media_type: Option<String>,
    description: Option<String>,
    categories: Option<Vec<String>>,
    directors: Option<Vec<String>>,
    casting: Option<Vec<String>>,
    nb_episodes: Option<i32>,
    main_image: Option<UploadedFile>,
    logo: Option<UploadedFile>,
    video: Option<UploadedFile>,
}

/// Collected `POST|PUT /episode` form.
#[derive(Default)]
struct EpisodeForm {
    media_id: Option<DbId>,
    season_number: Option<i32>,
    episode_number: Option<i32>,
    title: Option<String>,
    description: Option<String>,
    video: Option<UploadedFile>,
    episode_image: Option<UploadedFile>,
}

/// Read a file field into memory, capturing its extension.
async fn read_file_field(field: Field<'_>) -> AppResult<UploadedFile> {
    let filename = field.file_name().unwrap_or("").to_string();
    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();
    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    Ok(UploadedFile {
        ext,
        data: data.to_vec(),
    })
}

/// Read a text field, mapping decode errors to 400.
async fn read_text_field(field: Field<'_>) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Parse a numeric text field, naming the field in the error.
fn parse_number<T: std::str::FromStr>(name: &str, raw: &str) -> AppResult<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| AppError::BadRequest(format!("Field '{name}' is not a valid number")))
}

async fn collect_media_form(mut multipart: Multipart) -> AppResult<MediaForm> {
    let mut form = MediaForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "id" => form.id = Some(parse_number("id", &read_text_field(field).await?)?),
            "title" => form.title = Some(read_text_field(field).await?),
            "media_type" => form.media_type = Some(read_text_field(field).await?),
            "description" => form.description = Some(read_text_field(field).await?),
            "categories" => {
                form.categories = Some(parse_string_list(&read_text_field(field).await?));
            }
            "directors" => {
                form.directors = Some(parse_string_list(&read_text_field(field).await?));
            }
            "casting" => form.casting = Some(parse_string_list(&read_text_field(field).await?)),
            "nb_episodes" => {
                form.nb_episodes =
                    Some(parse_number("nb_episodes", &read_text_field(field).await?)?);
            }
            "main_image" => form.main_image = Some(read_file_field(field).await?),
            "logo" => form.logo = Some(read_file_field(field).await?),
            "video" => form.video = Some(read_file_field(field).await?),
            _ => {} // ignore unknown fields
        }
    }

    Ok(form)
}

async fn collect_episode_form(mut multipart: Multipart) -> AppResult<EpisodeForm> {
    let mut form = EpisodeForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "media_id" => {
                form.media_id = Some(parse_number("media_id", &read_text_field(field).await?)?);
            }
            "season_number" => {
                form.season_number =
                    Some(parse_number("season_number", &read_text_field(field).await?)?);
            }
            "episode_number" => {
                form.episode_number =
                    Some(parse_number("episode_number", &read_text_field(field).await?)?);
            }
            "title" => form.title = Some(read_text_field(field).await?),
            "description" => form.description = Some(read_text_field(field).await?),
            "video" => form.video = Some(read_file_field(field).await?),
            "episode_image" => form.episode_image = Some(read_file_field(field).await?),
            _ => {} // ignore unknown fields
        }
    }

    Ok(form)
}

// ---------------------------------------------------------------------------
// File helpers
// ---------------------------------------------------------------------------

/// Reject an image upload with a bad extension or excessive size.
fn validate_image(name: &str, file: &UploadedFile, max_bytes: usize) -> AppResult<()> {
    if !IMAGE_EXTENSIONS.contains(&file.ext.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Field '{name}' must be one of: {IMAGE_EXTENSIONS:?}"
        )));
    }
    if file.data.len() > max_bytes {
        return Err(AppError::BadRequest(format!(
            "Field '{name}' exceeds the maximum size of {max_bytes} bytes"
        )));
    }
    Ok(())
}

/// Reject a video upload with a bad extension.
fn validate_video(name: &str, file: &UploadedFile) -> AppResult<()> {
    if !VIDEO_EXTENSIONS.contains(&file.ext.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Field '{name}' must be one of: {VIDEO_EXTENSIONS:?}"
        )));
    }
    Ok(())
}

/// Write an uploaded file at its media-root-relative path, creating parent
/// directories as needed.
async fn store_media_file(state: &AppState, rel: &str, data: &[u8]) -> AppResult<()> {
    let path = state.config.media_root().join(rel);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;
    }
    tokio::fs::write(&path, data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Media handlers
// ---------------------------------------------------------------------------

/// POST /media
///
/// Create a media, or update one when an `id` field is present in the form.
pub async fn create_or_update_media(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Media>)> {
    let form = collect_media_form(multipart).await?;
    let target = form.id;
    upsert_media(&state, admin.user_id, target, form).await
}

/// PUT /media/{id}
///
/// Update an existing media; 404 when it does not exist.
pub async fn update_media(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Media>)> {
    let form = collect_media_form(multipart).await?;
    upsert_media(&state, admin.user_id, Some(id), form).await
}

/// Shared create-or-update core for the media form.
async fn upsert_media(
    state: &AppState,
    admin_id: DbId,
    target: Option<DbId>,
    form: MediaForm,
) -> AppResult<(StatusCode, Json<Media>)> {
    if let Some(ref media_type) = form.media_type {
        media_types::validate_media_type(media_type)?;
    }

    let (status, mut media) = match target {
        Some(id) => {
            let update = UpdateMedia {
                title: form.title,
                media_type: form.media_type,
                description: form.description,
                categories: form.categories,
                directors: form.directors,
                casting: form.casting,
                nb_episodes: form.nb_episodes,
                ..UpdateMedia::default()
            };
            let media = MediaRepo::update(&state.pool, id, &update)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Media",
                    id,
                }))?;
            (StatusCode::OK, media)
        }
        None => {
            let title = form.title.filter(|t| !t.trim().is_empty()).ok_or_else(|| {
                AppError::Core(CoreError::Validation("Field 'title' is required".into()))
            })?;
            let media_type = form.media_type.ok_or_else(|| {
                AppError::Core(CoreError::Validation(format!(
                    "Field 'media_type' is required. Expected one of: {:?}",
                    media_types::VALID_MEDIA_TYPES
                )))
            })?;

            let media = MediaRepo::create(
                &state.pool,
                &CreateMedia {
                    title,
                    media_type,
                    description: form.description,
                    categories: form.categories.unwrap_or_default(),
                    directors: form.directors.unwrap_or_default(),
                    casting: form.casting.unwrap_or_default(),
                    nb_episodes: form.nb_episodes,
                },
            )
            .await?;
            (StatusCode::CREATED, media)
        }
    };

    // Artwork: stored on disk and referenced from the row.
    let mut artwork = UpdateMedia::default();

    if let Some(ref file) = form.main_image {
        validate_image("main_image", file, MAIN_IMAGE_MAX_BYTES)?;
        let rel = storage::main_image_rel(media.id, &file.ext);
        store_media_file(state, &rel, &file.data).await?;
        artwork.main_image = Some(storage::url_path(&rel));
    }

    if let Some(ref file) = form.logo {
        validate_image("logo", file, LOGO_MAX_BYTES)?;
        let rel = storage::logo_rel(media.id, &file.ext);
        store_media_file(state, &rel, &file.data).await?;
        artwork.logo = Some(storage::url_path(&rel));
    }

    if artwork.main_image.is_some() || artwork.logo.is_some() {
        media = MediaRepo::update(&state.pool, media.id, &artwork)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Media",
                id: media.id,
            }))?;
    }

    // Film video: location is computed from the id, nothing to persist.
    // A video field on a series upload is ignored; series videos belong to
    // episodes.
    if media.media_type == MEDIA_TYPE_FILM {
        if let Some(ref file) = form.video {
            validate_video("video", file)?;
            let rel = storage::film_video_rel(media.id);
            store_media_file(state, &rel, &file.data).await?;
        }
    }

    tracing::info!(
        media_id = media.id,
        title = %media.title,
        admin_id,
        "Media created/updated",
    );

    Ok((status, Json(media)))
}

/// DELETE /media/{id}
///
/// Remove a media. Episodes and favorites cascade in the database.
pub async fn delete_media(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !MediaRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Media",
            id,
        }));
    }

    tracing::info!(media_id = id, admin_id = admin.user_id, "Media deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /medias/all
///
/// Every media as a minimal reference. Admin listing.
pub async fn list_all_medias(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MediaRef>>> {
    let medias = MediaRepo::list_refs(&state.pool).await?;
    Ok(Json(medias))
}

// ---------------------------------------------------------------------------
// Episode handlers
// ---------------------------------------------------------------------------

/// POST /episode
///
/// Create or update an episode, keyed on `(media_id, season_number,
/// episode_number)`. The media must exist and be a series.
pub async fn create_or_update_episode(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Episode>)> {
    let form = collect_episode_form(multipart).await?;

    let (media_id, season_number, episode_number) =
        match (form.media_id, form.season_number, form.episode_number) {
            (Some(m), Some(s), Some(e)) => (m, s, e),
            _ => {
                return Err(AppError::Core(CoreError::Validation(
                    "media_id, season_number and episode_number are required".into(),
                )));
            }
        };

    let media = MediaRepo::find_by_id(&state.pool, media_id)
        .await?
        .filter(|m| m.media_type == MEDIA_TYPE_SERIES)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Series",
            id: media_id,
        }))?;

    let existing =
        EpisodeRepo::find_by_media_season_episode(&state.pool, media.id, season_number, episode_number)
            .await?;

    let (status, episode) = match existing {
        Some(existing) => {
            let update = UpdateEpisode {
                title: form.title,
                description: form.description,
                image: None,
            };
            let episode = EpisodeRepo::update(&state.pool, existing.id, &update)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Episode",
                    id: existing.id,
                }))?;
            (StatusCode::OK, episode)
        }
        None => {
            let title = form.title.filter(|t| !t.trim().is_empty()).ok_or_else(|| {
                AppError::Core(CoreError::Validation("Field 'title' is required".into()))
            })?;
            let episode = EpisodeRepo::create(
                &state.pool,
                &CreateEpisode {
                    media_id: media.id,
                    season_number,
                    episode_number,
                    title,
                    description: form.description,
                },
            )
            .await?;
            (StatusCode::CREATED, episode)
        }
    };

    let episode =
        store_episode_files(&state, episode, form.video.as_ref(), form.episode_image.as_ref())
            .await?;

    tracing::info!(
        episode_id = episode.id,
        media_id = media.id,
        admin_id = admin.user_id,
        "Episode created/updated",
    );

    Ok((status, Json(episode)))
}

/// PUT /episode/{episode_id}
///
/// Update an existing episode's metadata and files by id; 404 unknown.
pub async fn update_episode(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(episode_id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<Episode>> {
    let form = collect_episode_form(multipart).await?;

    let existing = EpisodeRepo::find_by_id(&state.pool, episode_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Episode",
            id: episode_id,
        }))?;

    let update = UpdateEpisode {
        title: form.title,
        description: form.description,
        image: None,
    };
    let episode = EpisodeRepo::update(&state.pool, existing.id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Episode",
            id: existing.id,
        }))?;

    let episode =
        store_episode_files(&state, episode, form.video.as_ref(), form.episode_image.as_ref())
            .await?;

    tracing::info!(
        episode_id = episode.id,
        admin_id = admin.user_id,
        "Episode updated",
    );

    Ok(Json(episode))
}

/// Write an episode's uploaded video/image at their computed paths, and
/// persist the image path on the row.
async fn store_episode_files(
    state: &AppState,
    episode: Episode,
    video: Option<&UploadedFile>,
    image: Option<&UploadedFile>,
) -> AppResult<Episode> {
    if let Some(file) = video {
        validate_video("video", file)?;
        let rel = storage::episode_video_rel(
            episode.media_id,
            episode.season_number,
            episode.episode_number,
        );
        store_media_file(state, &rel, &file.data).await?;
    }

    let Some(file) = image else {
        return Ok(episode);
    };

    validate_image("episode_image", file, MAIN_IMAGE_MAX_BYTES)?;
    let rel = storage::episode_image_rel(
        episode.media_id,
        episode.season_number,
        episode.episode_number,
        &file.ext,
    );
    store_media_file(state, &rel, &file.data).await?;

    let update = UpdateEpisode {
        image: Some(storage::url_path(&rel)),
        ..UpdateEpisode::default()
    };
    EpisodeRepo::update(&state.pool, episode.id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Episode",
            id: episode.id,
        }))
}

/// DELETE /episode/{episode_id}
pub async fn delete_episode(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(episode_id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !EpisodeRepo::delete(&state.pool, episode_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Episode",
            id: episode_id,
        }));
    }

    tracing::info!(
        episode_id,
        admin_id = admin.user_id,
        "Episode deleted",
    );

    Ok(StatusCode::NO_CONTENT)
}

/// GET /episodes/all
///
/// Every episode joined to its series title. Admin listing.
pub async fn list_all_episodes(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EpisodeWithSeries>>> {
    let episodes = EpisodeRepo::list_with_series(&state.pool).await?;
    Ok(Json(episodes))
}
