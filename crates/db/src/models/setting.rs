//! System settings: JSON values addressed by `(category, key)`.

use catalog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `system_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SystemSetting {
    pub id: DbId,
    pub category: String,
    pub key: String,
    pub value: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
