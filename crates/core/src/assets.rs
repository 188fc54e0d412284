//! Mapping of stored cover links to files under the public asset root.

use std::path::{Component, Path, PathBuf};

use crate::validation::is_http_url;

/// Resolve a stored cover link to a file under `root`.
///
/// Remote (http/https) links, empty values and paths that would escape the
/// root yield `None`: there is nothing local to remove.
pub fn local_asset_path(root: &Path, cover_url: &str) -> Option<PathBuf> {
    let cover_url = cover_url.trim();
    if cover_url.is_empty() || is_http_url(cover_url) || cover_url.contains("://") {
        return None;
    }

    let relative = Path::new(cover_url.trim_start_matches('/'));
    let mut components = relative.components().peekable();
    components.peek()?;
    if !components.all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }

    Some(root.join(relative))
}
