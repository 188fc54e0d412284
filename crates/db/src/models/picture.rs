//! Picture (gallery) models and DTOs.

use catalog_core::error::CoreError;
use catalog_core::types::{DbId, Timestamp};
use catalog_core::validation::{validate_image_urls, validate_media_fields};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::media::MediaInput;

/// A row from the `pictures` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Picture {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub cover_url: String,
    pub image_urls: Vec<String>,
    pub category_id: DbId,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a picture set.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePicture {
    pub title: String,
    pub description: Option<String>,
    pub cover_url: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub category_id: DbId,
    pub is_active: Option<bool>,
}

pub type UpdatePicture = CreatePicture;

impl MediaInput for CreatePicture {
    fn validate(&self) -> Result<(), CoreError> {
        validate_media_fields(&self.title, &self.cover_url, self.category_id)?;
        validate_image_urls("image_urls", &self.image_urls)
    }

    fn category_id(&self) -> DbId {
        self.category_id
    }
}
