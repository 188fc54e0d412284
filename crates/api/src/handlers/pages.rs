//! Page aggregates: everything one storefront page needs in a single call.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::listing::ListQuery;
use catalog_core::pagination::{Page, PageRequest};
use catalog_core::selection::selection_seed;
use catalog_core::types::DbId;
use catalog_db::models::comic::Comic;
use catalog_db::models::novel::Novel;
use catalog_db::models::picture::Picture;
use catalog_db::models::video::{SelectionParams, Video};
use catalog_db::repositories::{
    CategoryRepo, ComicRepo, MediaRepo, NovelRepo, PictureRepo, SettingRepo, VideoRepo,
};
use catalog_db::DbPool;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::video::record_view;
use crate::response::DataResponse;
use crate::state::AppState;

/// Cards per home page section.
pub const HOME_SECTION_SIZE: i64 = 4;

/// The novel section is a text list and shows more entries.
pub const HOME_NOVEL_SECTION_SIZE: i64 = 6;

/// Related and featured cards on a video page.
pub const VIDEO_PAGE_SELECTION_SIZE: i64 = 8;

/// Settings category holding the home page metadata.
const SEO_SETTINGS: &str = "seo";

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct SeoSettings {
    pub title: Option<serde_json::Value>,
    pub description: Option<serde_json::Value>,
    pub keywords: Option<serde_json::Value>,
}

/// Latest videos of one configured category.
#[derive(Debug, Serialize)]
pub struct CategorySection {
    pub category_id: DbId,
    /// `None` when the configured category does not exist.
    pub category_name: Option<String>,
    pub videos: Page<Video>,
}

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub seo: SeoSettings,
    pub latest_videos: Page<Video>,
    pub video_categories: Vec<CategorySection>,
    pub pictures: Page<Picture>,
    pub novels: Page<Novel>,
    pub comics: Page<Comic>,
}

#[derive(Debug, Serialize)]
pub struct VideoPage {
    pub video: Video,
    pub related: Vec<Video>,
    pub featured: Vec<Video>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// First page of the public listing, newest first.
fn first_page(per_page: i64, category_id: Option<DbId>) -> AppResult<ListQuery> {
    Ok(ListQuery {
        page: PageRequest::new(None, Some(per_page))?,
        category_id,
        ..ListQuery::default()
    }
    .active_only())
}

async fn setting_value(
    pool: &DbPool,
    category: &str,
    key: &str,
) -> Result<Option<serde_json::Value>, sqlx::Error> {
    Ok(SettingRepo::find(pool, category, key)
        .await?
        .map(|setting| setting.value))
}

async fn load_seo(pool: &DbPool) -> Result<SeoSettings, sqlx::Error> {
    let (title, description, keywords) = tokio::try_join!(
        setting_value(pool, SEO_SETTINGS, "homeTitle"),
        setting_value(pool, SEO_SETTINGS, "homeDescription"),
        setting_value(pool, SEO_SETTINGS, "homeKeywords"),
    )?;
    Ok(SeoSettings {
        title,
        description,
        keywords,
    })
}

async fn category_section(pool: &DbPool, category_id: DbId) -> AppResult<CategorySection> {
    let query = first_page(HOME_SECTION_SIZE, Some(category_id))?;
    let (category, videos) = tokio::try_join!(
        CategoryRepo::find_by_id(pool, category_id),
        VideoRepo::list(pool, &query),
    )?;
    Ok(CategorySection {
        category_id,
        category_name: category.map(|c| c.name),
        videos,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/pages/home
pub async fn home(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pool = &state.pool;
    let latest = first_page(HOME_SECTION_SIZE, None)?;
    let novel_query = first_page(HOME_NOVEL_SECTION_SIZE, None)?;

    let (seo, latest_videos, pictures, novels, comics) = tokio::try_join!(
        load_seo(pool),
        VideoRepo::list(pool, &latest),
        PictureRepo::list(pool, &latest),
        NovelRepo::list(pool, &novel_query),
        ComicRepo::list(pool, &latest),
    )?;

    let video_categories = futures::future::try_join_all(
        state
            .config
            .home_video_categories
            .iter()
            .map(|&category_id| category_section(pool, category_id)),
    )
    .await?;

    Ok(Json(DataResponse {
        data: HomePage {
            seo,
            latest_videos,
            video_categories,
            pictures,
            novels,
            comics,
        },
    }))
}

/// GET /api/v1/pages/videos/{id}?seed=
///
/// The video with related and featured picks. Records a view.
pub async fn video_page(
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
    Query(params): Query<SelectionParams>,
) -> AppResult<impl IntoResponse> {
    let pool = &state.pool;
    let seed = selection_seed(params.seed);

    let (video, related, featured) = tokio::try_join!(
        VideoRepo::find_active_by_id(pool, video_id),
        VideoRepo::related(pool, video_id, VIDEO_PAGE_SELECTION_SIZE, seed),
        VideoRepo::featured(pool, VIDEO_PAGE_SELECTION_SIZE, seed),
    )?;
    let video = video.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Video",
        id: video_id,
    }))?;

    record_view(&state, video_id).await;

    Ok(Json(DataResponse {
        data: VideoPage {
            video,
            related: related.unwrap_or_default(),
            featured,
        },
    }))
}
