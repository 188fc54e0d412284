//! Handlers for category lookup and administration.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::media::MediaKind;
use catalog_core::types::DbId;
use catalog_core::validation::validate_name;
use catalog_db::models::category::{CategoryTypeParams, CreateCategory};
use catalog_db::repositories::CategoryRepo;
use catalog_db::DbPool;

use crate::error::{is_foreign_key_violation, AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Check that `category_id` exists and belongs to `kind`.
pub async fn ensure_category(pool: &DbPool, kind: MediaKind, category_id: DbId) -> AppResult<()> {
    let category = CategoryRepo::find_by_id(pool, category_id)
        .await?
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "category_id: category {category_id} does not exist"
            ))
        })?;

    let expected = kind.category_type();
    if category.category_type != expected {
        return Err(CoreError::Validation(format!(
            "category_id: category {category_id} is a {} category, expected {expected}",
            category.category_type
        ))
        .into());
    }
    Ok(())
}

/// GET /api/v1/categories?type=
pub async fn list_by_type(
    State(state): State<AppState>,
    Query(params): Query<CategoryTypeParams>,
) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list_by_type(&state.pool, params.category_type).await?;

    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/admin/categories
pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    validate_name(&input.name)?;

    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(
        category_id = category.id,
        category_type = %category.category_type,
        "Category created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// DELETE /api/v1/admin/categories/{id}
///
/// A category still referenced by content is a conflict.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = match CategoryRepo::delete(&state.pool, category_id).await {
        Ok(deleted) => deleted,
        Err(e) if is_foreign_key_violation(&e) => {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "Category {category_id} is still referenced by content"
            ))));
        }
        Err(e) => return Err(e.into()),
    };

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }));
    }

    tracing::info!(category_id, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}
