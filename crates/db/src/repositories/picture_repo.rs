//! Repository for the `pictures` table.

use async_trait::async_trait;
use catalog_core::listing::{SortField, BASIC_SORT_FIELDS};
use catalog_core::media::MediaKind;
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::picture::{CreatePicture, Picture, UpdatePicture};
use crate::repositories::MediaRepo;

const COLUMNS: &str = "\
    id, title, description, cover_url, image_urls, category_id, \
    is_active, created_at, updated_at";

/// Provides CRUD operations for picture sets.
pub struct PictureRepo;

#[async_trait]
impl MediaRepo for PictureRepo {
    const KIND: MediaKind = MediaKind::Picture;
    const TABLE: &'static str = "pictures";
    const COLUMNS: &'static str = COLUMNS;
    const SORT_FIELDS: &'static [SortField] = BASIC_SORT_FIELDS;

    type Row = Picture;
    type Input = CreatePicture;

    async fn create(pool: &PgPool, input: &CreatePicture) -> Result<Picture, sqlx::Error> {
        let query = format!(
            "INSERT INTO pictures \
                (title, description, cover_url, image_urls, category_id, is_active) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Picture>(&query)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(input.cover_url.trim())
            .bind(&input.image_urls)
            .bind(input.category_id)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePicture,
    ) -> Result<Option<Picture>, sqlx::Error> {
        let query = format!(
            "UPDATE pictures SET \
                title = $2, \
                description = $3, \
                cover_url = $4, \
                image_urls = $5, \
                category_id = $6, \
                is_active = COALESCE($7, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Picture>(&query)
            .bind(id)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(input.cover_url.trim())
            .bind(&input.image_urls)
            .bind(input.category_id)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }
}
