//! Comic models and DTOs.

use catalog_core::error::CoreError;
use catalog_core::types::{DbId, Timestamp};
use catalog_core::validation::{validate_image_urls, validate_media_fields};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::media::MediaInput;

/// A row from the `comics` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comic {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub cover_url: String,
    pub author: Option<String>,
    /// Page images in reading order.
    pub page_urls: Vec<String>,
    pub category_id: DbId,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a comic.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComic {
    pub title: String,
    pub description: Option<String>,
    pub cover_url: String,
    pub author: Option<String>,
    #[serde(default)]
    pub page_urls: Vec<String>,
    pub category_id: DbId,
    pub is_active: Option<bool>,
}

pub type UpdateComic = CreateComic;

impl MediaInput for CreateComic {
    fn validate(&self) -> Result<(), CoreError> {
        validate_media_fields(&self.title, &self.cover_url, self.category_id)?;
        validate_image_urls("page_urls", &self.page_urls)
    }

    fn category_id(&self) -> DbId {
        self.category_id
    }
}
