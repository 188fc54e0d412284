//! Route definitions shared by the four media kinds.
//!
//! Each function is instantiated once per [`MediaRepo`] and nested under
//! the kind's path segment.

use axum::routing::{get, post, put};
use axum::Router;
use catalog_db::repositories::MediaRepo;

use crate::handlers::media;
use crate::state::AppState;

/// Public routes mounted at `/{kind}`.
///
/// ```text
/// GET    /                  -> list
/// GET    /{id}              -> get
/// ```
pub fn public_router<R: MediaRepo>() -> Router<AppState> {
    Router::new()
        .route("/", get(media::list::<R>))
        .route("/{id}", get(media::get::<R>))
}

/// Admin routes mounted at `/admin/{kind}`.
///
/// ```text
/// GET    /                  -> admin_list
/// POST   /                  -> create
/// POST   /delete            -> delete_many
/// GET    /{id}              -> admin_get
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// PUT    /{id}/active       -> toggle_active
/// ```
pub fn admin_router<R: MediaRepo>() -> Router<AppState> {
    Router::new()
        .route("/", get(media::admin_list::<R>).post(media::create::<R>))
        .route("/delete", post(media::delete_many::<R>))
        .route(
            "/{id}",
            get(media::admin_get::<R>)
                .put(media::update::<R>)
                .delete(media::delete::<R>),
        )
        .route("/{id}/active", put(media::toggle_active::<R>))
}
