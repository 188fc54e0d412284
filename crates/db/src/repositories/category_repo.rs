//! Repository for the `categories` table.

use catalog_core::media::CategoryType;
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CreateCategory};

const COLUMNS: &str = "id, name, type, sort_order, created_at, updated_at";

/// Provides lookup and admin operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// All categories of one type, ordered for display.
    pub async fn list_by_type(
        pool: &PgPool,
        category_type: CategoryType,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories \
             WHERE type = $1 \
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(category_type.as_str())
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a category. A duplicate `(type, name)` violates `uq_categories_type_name`.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, type, sort_order) \
             VALUES ($1, $2, COALESCE($3, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(input.name.trim())
            .bind(input.category_type.as_str())
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Delete a category. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while any media row references it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
