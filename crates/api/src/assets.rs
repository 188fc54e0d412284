//! Best-effort removal of cover files after media rows are deleted.
//!
//! Failures are logged and swallowed; the database delete has already
//! happened and is not rolled back.

use std::path::Path;

use catalog_core::assets::local_asset_path;

/// Remove the local file behind `cover_url`, if there is one.
///
/// Returns `true` only when a file was actually removed.
pub async fn remove_cover_file(root: &Path, cover_url: &str) -> bool {
    let Some(path) = local_asset_path(root, cover_url) else {
        tracing::debug!(cover_url, "Cover is not a local asset, nothing to remove");
        return false;
    };

    match tokio::fs::remove_file(&path).await {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "Cover file removed");
            true
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Cover file already gone");
            false
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove cover file");
            false
        }
    }
}

/// Remove the cover files of several deleted rows. Returns how many were removed.
pub async fn remove_cover_files(root: &Path, cover_urls: &[&str]) -> usize {
    let mut removed = 0;
    for cover_url in cover_urls.iter().copied() {
        if remove_cover_file(root, cover_url).await {
            removed += 1;
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn removes_existing_local_cover() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("uploads")).unwrap();
        let file = root.path().join("uploads/a.jpg");
        std::fs::write(&file, b"jpeg").unwrap();

        assert!(remove_cover_file(root.path(), "/uploads/a.jpg").await);
        assert!(!file.exists());
    }

    #[tokio::test]
    async fn missing_file_is_not_an_error() {
        let root = tempfile::tempdir().unwrap();
        assert!(!remove_cover_file(root.path(), "/uploads/missing.jpg").await);
    }

    #[tokio::test]
    async fn unremovable_path_is_swallowed() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("uploads/dir.jpg")).unwrap();

        assert!(!remove_cover_file(root.path(), "/uploads/dir.jpg").await);
        assert!(root.path().join("uploads/dir.jpg").exists());
    }

    #[tokio::test]
    async fn remote_cover_is_left_alone() {
        let root = tempfile::tempdir().unwrap();
        assert!(!remove_cover_file(root.path(), "https://img.example.com/a.jpg").await);
    }

    #[tokio::test]
    async fn counts_only_removed_files() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("b.jpg"), b"jpeg").unwrap();

        let removed = remove_cover_files(root.path(), &["/b.jpg", "/gone.jpg"]).await;
        assert_eq!(removed, 1);
    }
}
