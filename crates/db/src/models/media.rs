//! Shapes shared by all four media tables (videos, novels, comics, pictures).

use catalog_core::error::CoreError;
use catalog_core::listing::{
    normalize_search, validate_category_filter, ListQuery, Sort, SortField, SortOrder,
};
use catalog_core::pagination::PageRequest;
use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// Lightweight projection of any media row, used for search results.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MediaCard {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub cover_url: String,
    pub category_id: DbId,
    pub created_at: Timestamp,
}

/// Identity and cover link of a row removed by a delete.
#[derive(Debug, Clone, FromRow)]
pub struct DeletedMedia {
    pub id: DbId,
    pub cover_url: String,
}

// ---------------------------------------------------------------------------
// Input validation seam
// ---------------------------------------------------------------------------

/// Create/update payloads validate themselves before touching the store.
pub trait MediaInput {
    fn validate(&self) -> Result<(), CoreError>;

    /// Category the row will reference.
    fn category_id(&self) -> DbId;
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Query parameters for media listings (`?page=&per_page=&category_id=...`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaListParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub category_id: Option<DbId>,
    pub search: Option<String>,
    pub is_active: Option<bool>,
    pub sort_by: Option<SortField>,
    pub sort_order: Option<SortOrder>,
}

impl MediaListParams {
    /// Validate the raw parameters against the sort fields the table supports.
    pub fn into_query(self, sort_fields: &[SortField]) -> Result<ListQuery, CoreError> {
        validate_category_filter(self.category_id)?;
        Ok(ListQuery {
            page: PageRequest::new(self.page, self.per_page)?,
            category_id: self.category_id,
            search: normalize_search(self.search.as_deref()),
            is_active: self.is_active,
            sort: Sort::new(self.sort_by, self.sort_order, sort_fields)?,
        })
    }
}

/// Body for `PUT /admin/{kind}/{id}/active`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleActive {
    pub is_active: bool,
}

/// Body for `POST /admin/{kind}/delete`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteManyRequest {
    pub ids: Vec<DbId>,
}

/// Result summary for bulk media operations.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BulkMediaResult {
    pub affected: u64,
}
