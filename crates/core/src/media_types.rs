//! Well-known media type constants and validation.
//!
//! These must match the CHECK constraint in the medias migration.

use crate::error::CoreError;

pub const MEDIA_TYPE_FILM: &str = "film";
pub const MEDIA_TYPE_SERIES: &str = "series";

/// All valid media types, in display order.
pub const VALID_MEDIA_TYPES: &[&str] = &[MEDIA_TYPE_FILM, MEDIA_TYPE_SERIES];

/// Validate that `media_type` is one of the known types.
pub fn validate_media_type(media_type: &str) -> Result<(), CoreError> {
    if !VALID_MEDIA_TYPES.contains(&media_type) {
        return Err(CoreError::Validation(format!(
            "Invalid media_type '{media_type}'. Expected one of: {VALID_MEDIA_TYPES:?}"
        )));
    }
    Ok(())
}
