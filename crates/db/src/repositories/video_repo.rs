//! Repository for the `videos` table.

use async_trait::async_trait;
use catalog_core::listing::{SortField, VIDEO_SORT_FIELDS};
use catalog_core::media::MediaKind;
use catalog_core::selection::{random_order_expr, seed_salt};
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::video::{CreateVideo, UpdateVideo, Video, DEFAULT_PLAYER_TYPE};
use crate::repositories::MediaRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, title, description, cover_url, play_url, category_id, is_active, \
    player_type, external_id, views, created_at, updated_at";

/// Provides CRUD, selection and view-count operations for videos.
pub struct VideoRepo;

#[async_trait]
impl MediaRepo for VideoRepo {
    const KIND: MediaKind = MediaKind::Video;
    const TABLE: &'static str = "videos";
    const COLUMNS: &'static str = COLUMNS;
    const SORT_FIELDS: &'static [SortField] = VIDEO_SORT_FIELDS;

    type Row = Video;
    type Input = CreateVideo;

    async fn create(pool: &PgPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos \
                (title, description, cover_url, play_url, category_id, is_active, \
                 player_type, external_id) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, true), COALESCE($7, $8), $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(input.cover_url.trim())
            .bind(input.play_url.trim())
            .bind(input.category_id)
            .bind(input.is_active)
            .bind(&input.player_type)
            .bind(DEFAULT_PLAYER_TYPE)
            .bind(&input.external_id)
            .fetch_one(pool)
            .await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVideo,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET \
                title = $2, \
                description = $3, \
                cover_url = $4, \
                play_url = $5, \
                category_id = $6, \
                is_active = COALESCE($7, is_active), \
                player_type = COALESCE($8, player_type), \
                external_id = $9 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(input.cover_url.trim())
            .bind(input.play_url.trim())
            .bind(input.category_id)
            .bind(input.is_active)
            .bind(&input.player_type)
            .bind(&input.external_id)
            .fetch_optional(pool)
            .await
    }
}

impl VideoRepo {
    /// Atomically add one view. Returns `false` if no row has `id`.
    pub async fn increment_views(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE videos SET views = views + 1 WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Active videos from the same category as `video_id`, excluding it,
    /// in seeded pseudo-random order, at most `limit`.
    ///
    /// Returns `None` if `video_id` does not exist.
    pub async fn related(
        pool: &PgPool,
        video_id: DbId,
        limit: i64,
        seed: u64,
    ) -> Result<Option<Vec<Video>>, sqlx::Error> {
        let category_id =
            sqlx::query_scalar::<_, DbId>("SELECT category_id FROM videos WHERE id = $1")
                .bind(video_id)
                .fetch_optional(pool)
                .await?;
        let Some(category_id) = category_id else {
            return Ok(None);
        };

        let query = format!(
            "SELECT {COLUMNS} FROM videos \
             WHERE category_id = $1 AND id <> $2 AND is_active = true \
             ORDER BY {} \
             LIMIT $4",
            random_order_expr(3)
        );
        let videos = sqlx::query_as::<_, Video>(&query)
            .bind(category_id)
            .bind(video_id)
            .bind(seed_salt(seed))
            .bind(limit)
            .fetch_all(pool)
            .await?;
        Ok(Some(videos))
    }

    /// Active videos by view count descending, ties broken in seeded
    /// pseudo-random order, at most `limit`.
    pub async fn featured(pool: &PgPool, limit: i64, seed: u64) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM videos \
             WHERE is_active = true \
             ORDER BY views DESC, {} \
             LIMIT $2",
            random_order_expr(1)
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(seed_salt(seed))
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Move every video in `ids` to `category_id`. Returns the number of rows updated.
    pub async fn update_category(
        pool: &PgPool,
        ids: &[DbId],
        category_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE videos SET category_id = $2 WHERE id = ANY($1)")
            .bind(ids)
            .bind(category_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
