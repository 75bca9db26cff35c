//! Range-capable static delivery of media assets.
//!
//! Serves everything under `{storage_root}/media` -- artwork, logos, film
//! and episode videos -- at `GET /storage/media/{*path}`. Video playback
//! relies on single-range requests (RFC 7233): browsers seek by asking for
//! `bytes=start-end` slices and expect 206 responses with `Content-Range`.
//! Bodies are streamed from disk, never buffered in memory.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header::{self, HeaderMap};
use axum::http::StatusCode;
use axum::response::Response;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

use flicks_core::storage;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Guess a Content-Type from a file extension.
fn content_type_for_extension(path: &str) -> &'static str {
    let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();
    match ext.as_str() {
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Parse a `Range: bytes=START-END` header value.
/// Returns `(start, optional_end)`.
fn parse_range_header(range: &str) -> Option<(u64, Option<u64>)> {
    let range = range.strip_prefix("bytes=")?;
    let parts: Vec<&str> = range.splitn(2, '-').collect();
    if parts.len() != 2 {
        return None;
    }
    let start = parts[0].parse::<u64>().ok()?;
    let end = if parts[1].is_empty() {
        None
    } else {
        Some(parts[1].parse::<u64>().ok()?)
    };
    Some((start, end))
}

/// GET /storage/media/{*path}
///
/// Serve a file from the media storage tree.
///
/// - Without a `Range` header the whole file is streamed with 200.
/// - With `bytes=start-end` the slice is streamed with 206 and a
///   `Content-Range`; a missing `end` defaults to the last byte.
/// - An unsatisfiable range yields 416; a syntactically invalid one is
///   ignored and the full file served.
pub async fn serve_media(
    State(state): State<AppState>,
    Path(rel): Path<String>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let media_root = state.config.media_root();
    let path = storage::resolve_media_path(&media_root, &rel)
        .ok_or_else(|| AppError::BadRequest("Invalid media path".into()))?;

    let metadata = match tokio::fs::metadata(&path).await {
        Ok(m) if m.is_file() => m,
        _ => return Err(AppError::NotFound(format!("No media file at '{rel}'"))),
    };
    let file_size = metadata.len();
    let content_type = content_type_for_extension(&rel);

    // Check for a Range header.
    if let Some(range_value) = headers.get(header::RANGE) {
        let range_str = range_value
            .to_str()
            .map_err(|_| AppError::BadRequest("Invalid Range header".into()))?;

        if let Some((start, end)) = parse_range_header(range_str) {
            let end = end
                .map(|e| e.min(file_size.saturating_sub(1)))
                .unwrap_or_else(|| file_size.saturating_sub(1));

            if start >= file_size || start > end {
                return Ok(Response::builder()
                    .status(StatusCode::RANGE_NOT_SATISFIABLE)
                    .header(header::CONTENT_RANGE, format!("bytes */{file_size}"))
                    .body(Body::empty())
                    .unwrap());
            }

            let length = end - start + 1;

            let mut file = tokio::fs::File::open(&path)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;
            file.seek(std::io::SeekFrom::Start(start))
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;

            let limited = file.take(length);
            let stream = ReaderStream::new(limited);

            return Ok(Response::builder()
                .status(StatusCode::PARTIAL_CONTENT)
                .header(header::CONTENT_TYPE, content_type)
                .header(header::CONTENT_LENGTH, length.to_string())
                .header(
                    header::CONTENT_RANGE,
                    format!("bytes {start}-{end}/{file_size}"),
                )
                .header(header::ACCEPT_RANGES, "bytes")
                .body(Body::from_stream(stream))
                .unwrap());
        }
    }

    // No (usable) Range header -- serve the full file.
    let file = tokio::fs::File::open(&path)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    let stream = ReaderStream::new(file);

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, file_size.to_string())
        .header(header::ACCEPT_RANGES, "bytes")
        .body(Body::from_stream(stream))
        .unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_range() {
        assert_eq!(parse_range_header("bytes=0-499"), Some((0, Some(499))));
        assert_eq!(parse_range_header("bytes=500-999"), Some((500, Some(999))));
    }

    #[test]
    fn test_parse_open_ended_range() {
        assert_eq!(parse_range_header("bytes=100-"), Some((100, None)));
    }

    #[test]
    fn test_parse_rejects_malformed_ranges() {
        assert_eq!(parse_range_header("bytes=-500"), None); // suffix form unsupported
        assert_eq!(parse_range_header("bytes=abc-def"), None);
        assert_eq!(parse_range_header("items=0-10"), None);
        assert_eq!(parse_range_header("bytes="), None);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for_extension("film/3.mp4"), "video/mp4");
        assert_eq!(
            content_type_for_extension("images/media_3_main.jpg"),
            "image/jpeg"
        );
        assert_eq!(
            content_type_for_extension("logos/media_3_logo.png"),
            "image/png"
        );
        assert_eq!(
            content_type_for_extension("unknown.bin"),
            "application/octet-stream"
        );
    }
}
