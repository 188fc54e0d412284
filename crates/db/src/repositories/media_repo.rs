//! Queries shared by the media tables (`videos`, `novels`, `comics`, `pictures`).
//!
//! Table and column names come from the implementing repository's constants,
//! never from user input.

use async_trait::async_trait;
use catalog_core::listing::{ListQuery, SortField};
use catalog_core::media::MediaKind;
use catalog_core::pagination::Page;
use catalog_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

use crate::models::media::{DeletedMedia, MediaInput};

/// Conjunctive listing filter. `$1` category, `$2` ILIKE pattern, `$3` active flag;
/// a NULL parameter disables its condition.
const LIST_FILTER: &str = "\
    WHERE ($1::BIGINT IS NULL OR category_id = $1) \
      AND ($2::TEXT IS NULL OR title ILIKE $2 OR description ILIKE $2) \
      AND ($3::BOOLEAN IS NULL OR is_active = $3)";

/// Fetch one page of `table` plus the unpaginated count for the same filter.
pub(crate) async fn fetch_page<T>(
    pool: &PgPool,
    table: &str,
    columns: &str,
    query: &ListQuery,
) -> Result<Page<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let pattern = query.search_pattern();

    let count_sql = format!("SELECT COUNT(*) FROM {table} {LIST_FILTER}");
    let total_count = sqlx::query_scalar::<_, i64>(&count_sql)
        .bind(query.category_id)
        .bind(pattern.as_deref())
        .bind(query.is_active)
        .fetch_one(pool)
        .await?;

    let list_sql = format!(
        "SELECT {columns} FROM {table} {LIST_FILTER} \
         ORDER BY {} \
         LIMIT $4 OFFSET $5",
        query.sort.order_by_clause()
    );
    let items = sqlx::query_as::<_, T>(&list_sql)
        .bind(query.category_id)
        .bind(pattern.as_deref())
        .bind(query.is_active)
        .bind(query.page.per_page())
        .bind(query.page.offset())
        .fetch_all(pool)
        .await?;

    Ok(query.page.into_page(items, total_count))
}

/// CRUD surface common to every media table.
///
/// Implementors provide the table constants and the kind-specific
/// `create`/`update`; everything else is shared.
#[async_trait]
pub trait MediaRepo: Send + Sync + 'static {
    const KIND: MediaKind;
    const TABLE: &'static str;
    const COLUMNS: &'static str;
    const SORT_FIELDS: &'static [SortField];

    type Row: for<'r> FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static;
    type Input: MediaInput + DeserializeOwned + Send + Sync + 'static;

    /// Insert a new row, returning it.
    async fn create(pool: &PgPool, input: &Self::Input) -> Result<Self::Row, sqlx::Error>;

    /// Replace every editable field. Returns `None` if no row has `id`.
    async fn update(
        pool: &PgPool,
        id: DbId,
        input: &Self::Input,
    ) -> Result<Option<Self::Row>, sqlx::Error>;

    /// Find a row by id regardless of its active flag.
    async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Self::Row>, sqlx::Error> {
        let query = format!("SELECT {} FROM {} WHERE id = $1", Self::COLUMNS, Self::TABLE);
        sqlx::query_as::<_, Self::Row>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a publicly visible row by id.
    async fn find_active_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Self::Row>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE id = $1 AND is_active = true",
            Self::COLUMNS,
            Self::TABLE
        );
        sqlx::query_as::<_, Self::Row>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Filtered, sorted, paginated listing.
    async fn list(pool: &PgPool, query: &ListQuery) -> Result<Page<Self::Row>, sqlx::Error> {
        fetch_page::<Self::Row>(pool, Self::TABLE, Self::COLUMNS, query).await
    }

    /// Set the visibility flag. Returns `None` if no row has `id`.
    async fn set_active(
        pool: &PgPool,
        id: DbId,
        is_active: bool,
    ) -> Result<Option<Self::Row>, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET is_active = $2 WHERE id = $1 RETURNING {}",
            Self::TABLE,
            Self::COLUMNS
        );
        sqlx::query_as::<_, Self::Row>(&query)
            .bind(id)
            .bind(is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a row, returning its cover link for file cleanup.
    async fn delete(pool: &PgPool, id: DbId) -> Result<Option<DeletedMedia>, sqlx::Error> {
        let query = format!(
            "DELETE FROM {} WHERE id = $1 RETURNING id, cover_url",
            Self::TABLE
        );
        sqlx::query_as::<_, DeletedMedia>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete every row in `ids`; ids with no row are ignored.
    async fn delete_many(pool: &PgPool, ids: &[DbId]) -> Result<Vec<DeletedMedia>, sqlx::Error> {
        let query = format!(
            "DELETE FROM {} WHERE id = ANY($1) RETURNING id, cover_url",
            Self::TABLE
        );
        sqlx::query_as::<_, DeletedMedia>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }
}
