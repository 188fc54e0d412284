//! Category models and DTOs.

use catalog_core::media::CategoryType;
use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type", try_from = "String")]
    pub category_type: CategoryType,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    pub sort_order: Option<i32>,
}

/// Query parameters for `GET /api/v1/categories?type=`.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryTypeParams {
    #[serde(rename = "type")]
    pub category_type: CategoryType,
}
