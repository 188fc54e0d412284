//! Field validation for media create/update payloads.
//!
//! Every error names the offending field so the admin form can point at it.
//! Validation runs before any store mutation.

use validator::ValidateUrl;

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum title length in characters.
pub const MAX_TITLE_LEN: usize = 255;

/// Maximum number of ids accepted by one bulk request.
pub const MAX_BULK_IDS: usize = 500;

/// Title must contain something other than whitespace.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("title: must not be empty".to_string()));
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "title: must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Whether `url` is a well-formed absolute http(s) URL.
pub fn is_http_url(url: &str) -> bool {
    (url.starts_with("http://") || url.starts_with("https://")) && url.to_string().validate_url()
}

/// Whether `path` is a root-relative asset path without parent traversal.
///
/// File names may contain spaces; control characters are rejected.
pub fn is_asset_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.chars().any(char::is_control)
        && path.split('/').all(|segment| segment != "..")
}

/// A playable link must be an absolute http(s) URL.
pub fn validate_play_url(field: &str, url: &str) -> Result<(), CoreError> {
    if is_http_url(url.trim()) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{field}: must be a well-formed http(s) URL"
        )))
    }
}

/// An image link is either an absolute http(s) URL or a root-relative
/// path under the public asset root (e.g. `/uploads/covers/1.jpg`).
pub fn validate_image_url(field: &str, url: &str) -> Result<(), CoreError> {
    let url = url.trim();
    if is_http_url(url) || is_asset_path(url) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{field}: must be an http(s) URL or a root-relative path ('/...') without '..' segments"
        )))
    }
}

/// Validate a list of image links, reporting the first bad index.
pub fn validate_image_urls(field: &str, urls: &[String]) -> Result<(), CoreError> {
    for (index, url) in urls.iter().enumerate() {
        validate_image_url(&format!("{field}[{index}]"), url)?;
    }
    Ok(())
}

/// Names of categories, tags and links must not be blank.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("name: must not be empty".to_string()));
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "name: must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_category_id(category_id: DbId) -> Result<(), CoreError> {
    if category_id <= 0 {
        return Err(CoreError::Validation(format!(
            "category_id: must be a positive id, got {category_id}"
        )));
    }
    Ok(())
}

/// Bulk requests need at least one id, all positive, and a bounded count.
pub fn validate_id_list(ids: &[DbId]) -> Result<(), CoreError> {
    if ids.is_empty() {
        return Err(CoreError::Validation("ids: must not be empty".to_string()));
    }
    if ids.len() > MAX_BULK_IDS {
        return Err(CoreError::Validation(format!(
            "ids: at most {MAX_BULK_IDS} ids per request"
        )));
    }
    if let Some(bad) = ids.iter().find(|id| **id <= 0) {
        return Err(CoreError::Validation(format!(
            "ids: must contain positive ids only, got {bad}"
        )));
    }
    Ok(())
}

/// Checks shared by every media kind: title, cover and category.
pub fn validate_media_fields(
    title: &str,
    cover_url: &str,
    category_id: DbId,
) -> Result<(), CoreError> {
    validate_title(title)?;
    validate_image_url("cover_url", cover_url)?;
    validate_category_id(category_id)
}
