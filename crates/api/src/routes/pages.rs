use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Page aggregate routes mounted at `/pages`.
///
/// ```text
/// GET    /home              -> home
/// GET    /videos/{id}       -> video_page
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/home", get(pages::home))
        .route("/videos/{id}", get(pages::video_page))
}
