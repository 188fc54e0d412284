//! Repository for the `novels` table.

use async_trait::async_trait;
use catalog_core::listing::{SortField, BASIC_SORT_FIELDS};
use catalog_core::media::MediaKind;
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::novel::{CreateNovel, Novel, UpdateNovel};
use crate::repositories::MediaRepo;

const COLUMNS: &str = "\
    id, title, description, cover_url, author, content, category_id, \
    is_active, created_at, updated_at";

/// Provides CRUD operations for novels.
pub struct NovelRepo;

#[async_trait]
impl MediaRepo for NovelRepo {
    const KIND: MediaKind = MediaKind::Novel;
    const TABLE: &'static str = "novels";
    const COLUMNS: &'static str = COLUMNS;
    const SORT_FIELDS: &'static [SortField] = BASIC_SORT_FIELDS;

    type Row = Novel;
    type Input = CreateNovel;

    async fn create(pool: &PgPool, input: &CreateNovel) -> Result<Novel, sqlx::Error> {
        let query = format!(
            "INSERT INTO novels \
                (title, description, cover_url, author, content, category_id, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Novel>(&query)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(input.cover_url.trim())
            .bind(&input.author)
            .bind(&input.content)
            .bind(input.category_id)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNovel,
    ) -> Result<Option<Novel>, sqlx::Error> {
        let query = format!(
            "UPDATE novels SET \
                title = $2, \
                description = $3, \
                cover_url = $4, \
                author = $5, \
                content = $6, \
                category_id = $7, \
                is_active = COALESCE($8, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Novel>(&query)
            .bind(id)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(input.cover_url.trim())
            .bind(&input.author)
            .bind(&input.content)
            .bind(input.category_id)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }
}
