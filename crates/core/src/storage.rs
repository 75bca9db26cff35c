//! Canonical storage layout for media assets.
//!
//! Every uploaded file lives under `{storage_root}/media/` and is addressed
//! by a path computed from database ids, never stored as a row. The same
//! layout functions feed both the upload handlers (where to write) and the
//! URL paths persisted on media/episode rows (what to serve).
//!
//! Layout:
//!
//! ```text
//! media/images/media_{id}_main.{ext}
//! media/logos/media_{id}_logo.{ext}
//! media/film/{id}.mp4
//! media/series/{media_id}/season_{n}/episode_{m}.mp4
//! media/series/{media_id}/season_{n}/episode_{m}_image.{ext}
//! ```

use std::path::{Component, Path, PathBuf};

use crate::types::DbId;

/// URL prefix under which media assets are served.
pub const MEDIA_URL_PREFIX: &str = "/storage/media";

/// Relative path (under the media root) of a media's main image.
pub fn main_image_rel(media_id: DbId, ext: &str) -> String {
    format!("images/media_{media_id}_main.{ext}")
}

/// Relative path of a media's logo.
pub fn logo_rel(media_id: DbId, ext: &str) -> String {
    format!("logos/media_{media_id}_logo.{ext}")
}

/// Relative path of a film's video file.
pub fn film_video_rel(media_id: DbId) -> String {
    format!("film/{media_id}.mp4")
}

/// Relative path of an episode's video file.
pub fn episode_video_rel(media_id: DbId, season: i32, episode: i32) -> String {
    format!("series/{media_id}/season_{season}/episode_{episode}.mp4")
}

/// Relative path of an episode's image.
pub fn episode_image_rel(media_id: DbId, season: i32, episode: i32, ext: &str) -> String {
    format!("series/{media_id}/season_{season}/episode_{episode}_image.{ext}")
}

/// The URL path served for a media-root-relative path.
pub fn url_path(rel: &str) -> String {
    format!("{MEDIA_URL_PREFIX}/{rel}")
}

/// Resolve a client-supplied relative path against the media root.
///
/// Returns `None` when the path escapes the root: absolute paths, drive
/// prefixes, `..` components, or empty input are all rejected.
pub fn resolve_media_path(media_root: &Path, rel: &str) -> Option<PathBuf> {
    if rel.is_empty() {
        return None;
    }
    let rel_path = Path::new(rel);
    for component in rel_path.components() {
        match component {
            Component::Normal(_) => {}
            _ => return None,
        }
    }
    Some(media_root.join(rel_path))
}
