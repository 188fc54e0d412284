//! Repository for the `comics` table.

use async_trait::async_trait;
use catalog_core::listing::{SortField, BASIC_SORT_FIELDS};
use catalog_core::media::MediaKind;
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::comic::{Comic, CreateComic, UpdateComic};
use crate::repositories::MediaRepo;

const COLUMNS: &str = "\
    id, title, description, cover_url, author, page_urls, category_id, \
    is_active, created_at, updated_at";

/// Provides CRUD operations for comics.
pub struct ComicRepo;

#[async_trait]
impl MediaRepo for ComicRepo {
    const KIND: MediaKind = MediaKind::Comic;
    const TABLE: &'static str = "comics";
    const COLUMNS: &'static str = COLUMNS;
    const SORT_FIELDS: &'static [SortField] = BASIC_SORT_FIELDS;

    type Row = Comic;
    type Input = CreateComic;

    async fn create(pool: &PgPool, input: &CreateComic) -> Result<Comic, sqlx::Error> {
        let query = format!(
            "INSERT INTO comics \
                (title, description, cover_url, author, page_urls, category_id, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comic>(&query)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(input.cover_url.trim())
            .bind(&input.author)
            .bind(&input.page_urls)
            .bind(input.category_id)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateComic,
    ) -> Result<Option<Comic>, sqlx::Error> {
        let query = format!(
            "UPDATE comics SET \
                title = $2, \
                description = $3, \
                cover_url = $4, \
                author = $5, \
                page_urls = $6, \
                category_id = $7, \
                is_active = COALESCE($8, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comic>(&query)
            .bind(id)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(input.cover_url.trim())
            .bind(&input.author)
            .bind(&input.page_urls)
            .bind(input.category_id)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }
}
