//! Repository for the `tags` table.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::tag::{CreateTag, Tag};

const COLUMNS: &str = "id, name, url, sort_order, is_active, created_at, updated_at";

/// Provides read and create operations for navigation tags.
pub struct TagRepo;

impl TagRepo {
    /// Active tags in display order, at most `limit`.
    pub async fn top(pool: &PgPool, limit: i64) -> Result<Vec<Tag>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tags \
             WHERE is_active = true \
             ORDER BY sort_order, id \
             LIMIT $1"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Insert a tag. A duplicate name violates `uq_tags_name`.
    pub async fn create(pool: &PgPool, input: &CreateTag) -> Result<Tag, sqlx::Error> {
        let query = format!(
            "INSERT INTO tags (name, url, sort_order) \
             VALUES ($1, $2, COALESCE($3, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(input.name.trim())
            .bind(&input.url)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Set the visibility flag. Returns `false` if no tag has `id`.
    pub async fn set_active(pool: &PgPool, id: DbId, is_active: bool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE tags SET is_active = $2 WHERE id = $1")
            .bind(id)
            .bind(is_active)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
