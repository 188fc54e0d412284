//! Navigation tag models.

use catalog_core::navigation::tag_href;
use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
    pub url: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A tag as rendered in the top-tag strip, with its resolved link target.
#[derive(Debug, Clone, Serialize)]
pub struct TagLink {
    pub id: DbId,
    pub name: String,
    pub href: String,
}

impl From<Tag> for TagLink {
    fn from(tag: Tag) -> Self {
        let href = tag_href(&tag.name, tag.url.as_deref());
        Self {
            id: tag.id,
            name: tag.name,
            href,
        }
    }
}

/// DTO for creating a tag.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTag {
    pub name: String,
    pub url: Option<String>,
    pub sort_order: Option<i32>,
}
