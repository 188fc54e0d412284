//! Video-only routes, merged into the shared media routers.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

/// Public routes merged at `/videos`.
///
/// ```text
/// GET    /featured          -> featured
/// GET    /{id}/related      -> related
/// POST   /{id}/views        -> increment_views
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/featured", get(video::featured))
        .route("/{id}/related", get(video::related))
        .route("/{id}/views", post(video::increment_views))
}

/// Admin routes merged at `/admin/videos`.
///
/// ```text
/// PUT    /category          -> update_category
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/category", put(video::update_category))
}
