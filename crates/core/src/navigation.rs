//! Helpers for navigation decorations (top tags, friend links).

/// Default number of tags shown in the top-tag strip.
pub const DEFAULT_TOP_TAGS_LIMIT: i64 = 20;

/// Default number of friend links shown in the header grid.
pub const DEFAULT_TOP_LINKS_LIMIT: i64 = 32;

/// Link target for a tag: its explicit URL, or a search for its name.
pub fn tag_href(name: &str, url: Option<&str>) -> String {
    match url.map(str::trim).filter(|u| !u.is_empty()) {
        Some(url) => url.to_string(),
        None => format!("/search?q={}", urlencoding::encode(name)),
    }
}
