//! Novel models and DTOs.

use catalog_core::error::CoreError;
use catalog_core::types::{DbId, Timestamp};
use catalog_core::validation::validate_media_fields;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::media::MediaInput;

/// A row from the `novels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Novel {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub cover_url: String,
    pub author: Option<String>,
    pub content: String,
    pub category_id: DbId,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a novel.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNovel {
    pub title: String,
    pub description: Option<String>,
    pub cover_url: String,
    pub author: Option<String>,
    #[serde(default)]
    pub content: String,
    pub category_id: DbId,
    pub is_active: Option<bool>,
}

pub type UpdateNovel = CreateNovel;

impl MediaInput for CreateNovel {
    fn validate(&self) -> Result<(), CoreError> {
        validate_media_fields(&self.title, &self.cover_url, self.category_id)
    }

    fn category_id(&self) -> DbId {
        self.category_id
    }
}
