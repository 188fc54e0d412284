use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Public routes mounted at `/categories`.
///
/// ```text
/// GET    /?type=            -> list_by_type
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(category::list_by_type))
}

/// Admin routes mounted at `/admin/categories`.
///
/// ```text
/// POST   /                  -> create_category
/// DELETE /{id}              -> delete_category
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(category::create_category))
        .route("/{id}", delete(category::delete_category))
}
