//! Repository for the `friend_links` table.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::friend_link::{CreateFriendLink, FriendLink};

const COLUMNS: &str = "id, name, url, sort_order, is_active, created_at, updated_at";

pub struct FriendLinkRepo;

impl FriendLinkRepo {
    /// Active links in display order, at most `limit`.
    pub async fn top(pool: &PgPool, limit: i64) -> Result<Vec<FriendLink>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM friend_links \
             WHERE is_active = true \
             ORDER BY sort_order, id \
             LIMIT $1"
        );
        sqlx::query_as::<_, FriendLink>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &CreateFriendLink,
    ) -> Result<FriendLink, sqlx::Error> {
        let query = format!(
            "INSERT INTO friend_links (name, url, sort_order) \
             VALUES ($1, $2, COALESCE($3, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FriendLink>(&query)
            .bind(input.name.trim())
            .bind(input.url.trim())
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Set the visibility flag. Returns `false` if no link has `id`.
    pub async fn set_active(pool: &PgPool, id: DbId, is_active: bool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE friend_links SET is_active = $2 WHERE id = $1")
            .bind(id)
            .bind(is_active)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
