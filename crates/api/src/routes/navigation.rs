use axum::routing::get;
use axum::Router;

use crate::handlers::navigation;
use crate::state::AppState;

/// Navigation routes merged at the API root.
///
/// ```text
/// GET    /tags/top                     -> top_tags
/// GET    /friend-links/top             -> top_links
/// GET    /settings/{category}/{key}    -> get_setting
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tags/top", get(navigation::top_tags))
        .route("/friend-links/top", get(navigation::top_links))
        .route("/settings/{category}/{key}", get(navigation::get_setting))
}
