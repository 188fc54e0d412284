//! Handlers shared by the four media kinds.
//!
//! Every handler is generic over a [`MediaRepo`] and instantiated once per
//! kind in the route tree. Public handlers only ever see active rows;
//! admin handlers see everything and honour the optional `is_active` filter.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_core::validation::validate_id_list;
use catalog_db::models::media::{
    BulkMediaResult, DeleteManyRequest, MediaInput, MediaListParams, ToggleActive,
};
use catalog_db::repositories::MediaRepo;

use crate::assets::{remove_cover_file, remove_cover_files};
use crate::error::{AppError, AppResult};
use crate::handlers::category::ensure_category;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found<R: MediaRepo>(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: R::KIND.entity_name(),
        id,
    })
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/v1/{kind}
///
/// Paginated listing of active rows.
pub async fn list<R: MediaRepo>(
    State(state): State<AppState>,
    Query(params): Query<MediaListParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.into_query(R::SORT_FIELDS)?.active_only();
    let page = R::list(&state.pool, &query).await?;

    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/{kind}/{id}
///
/// Inactive rows are reported as not found.
pub async fn get<R: MediaRepo>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = R::find_active_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;

    Ok(Json(DataResponse { data: row }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/{kind}
pub async fn admin_list<R: MediaRepo>(
    State(state): State<AppState>,
    Query(params): Query<MediaListParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.into_query(R::SORT_FIELDS)?;
    let page = R::list(&state.pool, &query).await?;

    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/admin/{kind}/{id}
pub async fn admin_get<R: MediaRepo>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = R::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;

    Ok(Json(DataResponse { data: row }))
}

/// POST /api/v1/admin/{kind}
///
/// Validates the payload and its category before inserting.
pub async fn create<R: MediaRepo>(
    State(state): State<AppState>,
    Json(input): Json<R::Input>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    ensure_category(&state.pool, R::KIND, input.category_id()).await?;

    let row = R::create(&state.pool, &input).await?;

    tracing::info!(kind = %R::KIND, category_id = input.category_id(), "Media created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// PUT /api/v1/admin/{kind}/{id}
///
/// Full replace of the editable fields.
pub async fn update<R: MediaRepo>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<R::Input>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    ensure_category(&state.pool, R::KIND, input.category_id()).await?;

    let row = R::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;

    tracing::info!(kind = %R::KIND, id, "Media updated");

    Ok(Json(DataResponse { data: row }))
}

/// PUT /api/v1/admin/{kind}/{id}/active
pub async fn toggle_active<R: MediaRepo>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ToggleActive>,
) -> AppResult<impl IntoResponse> {
    let row = R::set_active(&state.pool, id, input.is_active)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;

    tracing::info!(kind = %R::KIND, id, is_active = input.is_active, "Media visibility changed");

    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/v1/admin/{kind}/{id}
///
/// Deletes the row, then removes its local cover file on a best-effort basis.
pub async fn delete<R: MediaRepo>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = R::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;

    let file_removed = remove_cover_file(&state.config.public_asset_root, &deleted.cover_url).await;

    tracing::info!(kind = %R::KIND, id, file_removed, "Media deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/{kind}/delete
///
/// Deletes every listed row; unknown ids are skipped.
pub async fn delete_many<R: MediaRepo>(
    State(state): State<AppState>,
    Json(input): Json<DeleteManyRequest>,
) -> AppResult<impl IntoResponse> {
    validate_id_list(&input.ids)?;

    let deleted = R::delete_many(&state.pool, &input.ids).await?;
    let cover_urls: Vec<&str> = deleted.iter().map(|row| row.cover_url.as_str()).collect();
    let files_removed = remove_cover_files(&state.config.public_asset_root, &cover_urls).await;

    tracing::info!(
        kind = %R::KIND,
        requested = input.ids.len(),
        deleted = deleted.len(),
        files_removed,
        "Media bulk deleted",
    );

    Ok(Json(DataResponse {
        data: BulkMediaResult {
            affected: deleted.len() as u64,
        },
    }))
}
