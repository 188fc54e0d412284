pub mod category;
pub mod health;
pub mod media;
pub mod navigation;
pub mod pages;
pub mod video;

use axum::routing::get;
use axum::Router;
use catalog_db::repositories::{ComicRepo, NovelRepo, PictureRepo, VideoRepo};

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /videos                                     list (active only)
/// /videos/featured                            most viewed
/// /videos/{id}                                detail (active only)
/// /videos/{id}/related                        same-category picks
/// /videos/{id}/views                          record a view (POST)
/// /novels, /comics, /pictures                 list (active only)
/// /novels/{id}, /comics/{id}, /pictures/{id}  detail (active only)
///
/// /search                                     cross-type search
/// /categories                                 categories by type
/// /tags/top                                   top tags
/// /friend-links/top                           top friend links
/// /settings/{category}/{key}                  setting value
///
/// /pages/home                                 home page aggregate
/// /pages/videos/{id}                          video page aggregate
///
/// /admin/{kind}                               list, create
/// /admin/{kind}/delete                        bulk delete (POST)
/// /admin/{kind}/{id}                          get, update, delete
/// /admin/{kind}/{id}/active                   toggle visibility (PUT)
/// /admin/videos/category                      bulk category move (PUT)
/// /admin/categories                           create (POST)
/// /admin/categories/{id}                      delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public content.
        .nest(
            "/videos",
            media::public_router::<VideoRepo>().merge(video::public_router()),
        )
        .nest("/novels", media::public_router::<NovelRepo>())
        .nest("/comics", media::public_router::<ComicRepo>())
        .nest("/pictures", media::public_router::<PictureRepo>())
        // Lookups.
        .route("/search", get(handlers::search::search))
        .nest("/categories", category::router())
        .merge(navigation::router())
        // Page aggregates.
        .nest("/pages", pages::router())
        // Administration.
        .nest("/admin", admin_routes())
}

/// Admin routes mounted at `/admin`. Authentication is handled upstream.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .nest(
            "/videos",
            media::admin_router::<VideoRepo>().merge(video::admin_router()),
        )
        .nest("/novels", media::admin_router::<NovelRepo>())
        .nest("/comics", media::admin_router::<ComicRepo>())
        .nest("/pictures", media::admin_router::<PictureRepo>())
        .nest("/categories", category::admin_router())
}
