//! Friend link models.

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `friend_links` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FriendLink {
    pub id: DbId,
    pub name: String,
    pub url: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a friend link.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFriendLink {
    pub name: String,
    pub url: String,
    pub sort_order: Option<i32>,
}
