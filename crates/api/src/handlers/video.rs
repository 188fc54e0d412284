//! Video-only handlers: related/featured selections, the view counter and
//! bulk category moves.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::listing::clamp_limit;
use catalog_core::media::MediaKind;
use catalog_core::selection::{
    selection_seed, DEFAULT_FEATURED_LIMIT, DEFAULT_RELATED_LIMIT, MAX_SELECTION_LIMIT,
};
use catalog_core::types::DbId;
use catalog_core::validation::{validate_category_id, validate_id_list};
use catalog_db::models::media::BulkMediaResult;
use catalog_db::models::video::{SelectionParams, UpdateVideoCategory};
use catalog_db::repositories::VideoRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::category::ensure_category;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/videos/{id}/related?limit=&seed=
///
/// Active videos from the same category, sampled at random.
pub async fn related(
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
    Query(params): Query<SelectionParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_RELATED_LIMIT, MAX_SELECTION_LIMIT);
    let seed = selection_seed(params.seed);

    let videos = VideoRepo::related(&state.pool, video_id, limit, seed)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id: video_id,
        }))?;

    Ok(Json(DataResponse { data: videos }))
}

/// GET /api/v1/videos/featured?limit=&seed=
///
/// Most viewed active videos; ties are broken at random.
pub async fn featured(
    State(state): State<AppState>,
    Query(params): Query<SelectionParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_FEATURED_LIMIT, MAX_SELECTION_LIMIT);
    let seed = selection_seed(params.seed);

    let videos = VideoRepo::featured(&state.pool, limit, seed).await?;

    Ok(Json(DataResponse { data: videos }))
}

/// POST /api/v1/videos/{id}/views
///
/// Fire-and-forget: always answers 204, problems are only logged.
pub async fn increment_views(
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
) -> StatusCode {
    record_view(&state, video_id).await;
    StatusCode::NO_CONTENT
}

/// Add one view to `video_id`, logging instead of failing.
pub(crate) async fn record_view(state: &AppState, video_id: DbId) {
    match VideoRepo::increment_views(&state.pool, video_id).await {
        Ok(true) => {}
        Ok(false) => tracing::debug!(video_id, "View not recorded, no such video"),
        Err(e) => tracing::warn!(video_id, error = %e, "Failed to record view"),
    }
}

/// PUT /api/v1/admin/videos/category
///
/// Move the listed videos to another video category.
pub async fn update_category(
    State(state): State<AppState>,
    Json(input): Json<UpdateVideoCategory>,
) -> AppResult<impl IntoResponse> {
    validate_id_list(&input.ids)?;
    validate_category_id(input.category_id)?;
    ensure_category(&state.pool, MediaKind::Video, input.category_id).await?;

    let affected = VideoRepo::update_category(&state.pool, &input.ids, input.category_id).await?;

    tracing::info!(
        category_id = input.category_id,
        requested = input.ids.len(),
        affected,
        "Videos moved to category",
    );

    Ok(Json(DataResponse {
        data: BulkMediaResult { affected },
    }))
}
