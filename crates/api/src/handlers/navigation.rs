//! Handlers for navigation decorations: top tags, friend links and
//! system settings.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use catalog_db::models::tag::TagLink;
use catalog_db::repositories::{FriendLinkRepo, SettingRepo, TagRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/tags/top
///
/// Each tag carries its resolved `href`.
pub async fn top_tags(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tags = TagRepo::top(&state.pool, state.config.top_tags_limit).await?;
    let links: Vec<TagLink> = tags.into_iter().map(TagLink::from).collect();

    Ok(Json(DataResponse { data: links }))
}

/// GET /api/v1/friend-links/top
pub async fn top_links(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let links = FriendLinkRepo::top(&state.pool, state.config.top_links_limit).await?;

    Ok(Json(DataResponse { data: links }))
}

/// GET /api/v1/settings/{category}/{key}
///
/// Returns the stored JSON value, or `null` when nothing is stored.
pub async fn get_setting(
    State(state): State<AppState>,
    Path((category, key)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let value = SettingRepo::find(&state.pool, &category, &key)
        .await?
        .map(|setting| setting.value);

    Ok(Json(DataResponse { data: value }))
}
