//! Video models and DTOs.

use catalog_core::error::CoreError;
use catalog_core::types::{DbId, Timestamp};
use catalog_core::validation::{validate_media_fields, validate_play_url};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::media::MediaInput;

/// Player used when the admin form leaves it unset.
pub const DEFAULT_PLAYER_TYPE: &str = "dplayer";

/// A row from the `videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub cover_url: String,
    pub play_url: String,
    pub category_id: DbId,
    pub is_active: bool,
    pub player_type: String,
    pub external_id: Option<String>,
    pub views: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a video.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVideo {
    pub title: String,
    pub description: Option<String>,
    pub cover_url: String,
    pub play_url: String,
    pub category_id: DbId,
    /// Defaults to `true` on create; left unchanged on update when omitted.
    pub is_active: Option<bool>,
    /// Defaults to [`DEFAULT_PLAYER_TYPE`] on create; left unchanged on update when omitted.
    pub player_type: Option<String>,
    pub external_id: Option<String>,
}

/// Updates replace every editable field.
pub type UpdateVideo = CreateVideo;

impl MediaInput for CreateVideo {
    fn validate(&self) -> Result<(), CoreError> {
        validate_media_fields(&self.title, &self.cover_url, self.category_id)?;
        validate_play_url("play_url", &self.play_url)
    }

    fn category_id(&self) -> DbId {
        self.category_id
    }
}

/// Body for `PUT /admin/videos/category`: move videos to another category.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateVideoCategory {
    pub ids: Vec<DbId>,
    pub category_id: DbId,
}

/// Query parameters for related/featured selections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionParams {
    pub limit: Option<i64>,
    /// Fixes the random sampling/tie-break for reproducible results.
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CreateVideo {
        CreateVideo {
            title: "Clip".to_string(),
            description: None,
            cover_url: "/uploads/video/clip.jpg".to_string(),
            play_url: "https://cdn.example.com/clip.m3u8".to_string(),
            category_id: 1,
            is_active: None,
            player_type: None,
            external_id: None,
        }
    }

    #[test]
    fn valid_video_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn malformed_play_url_fails() {
        let input = CreateVideo {
            play_url: "clip.m3u8".to_string(),
            ..valid()
        };
        let err = input.validate().unwrap_err().to_string();
        assert!(err.contains("play_url"), "{err}");
    }
}
