//! Handler for the cross-type search page.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::search::{search_page, SearchScope};
use catalog_db::models::search::{SearchParams, SearchResponse};
use catalog_db::repositories::SearchRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/search?q=&type=&page=
///
/// One section per searched kind. A blank `q` returns no sections.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let scope: SearchScope = params.search_type.as_deref().unwrap_or("").parse()?;
    let page = search_page(params.page)?;
    let query = params.q.trim().to_string();

    let sections = SearchRepo::search(&state.pool, &query, scope, page).await?;

    tracing::debug!(query = %query, scope = scope.as_str(), sections = sections.len(), "Search");

    Ok(Json(DataResponse {
        data: SearchResponse {
            query,
            search_type: scope.as_str(),
            page: page.page(),
            per_page: page.per_page(),
            sections,
        },
    }))
}
