//! HTTP-level tests for the cross-type search endpoint.

mod common;

use axum::http::StatusCode;
use catalog_core::media::CategoryType;
use common::{body_json, create_video, get, post_json, seed_category, video_body};
use sqlx::PgPool;

async fn seed_content(pool: &PgPool) {
    let vcat = seed_category(pool, CategoryType::Video, "Movies").await;
    let pcat = seed_category(pool, CategoryType::Picture, "Scenery").await;
    create_video(pool, video_body(vcat, "Ocean waves")).await;
    create_video(pool, video_body(vcat, "Desert")).await;
    let mut hidden = video_body(vcat, "Ocean secrets");
    hidden["is_active"] = serde_json::json!(false);
    create_video(pool, hidden).await;

    let picture = serde_json::json!({
        "title": "Coast",
        "description": "OCEAN at dusk",
        "cover_url": "/p.jpg",
        "category_id": pcat,
        "image_urls": ["/p/1.jpg"],
    });
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/pictures",
        picture,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_all_returns_sections_in_kind_order(pool: PgPool) {
    seed_content(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/search?q=ocean").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["type"], "all");
    assert_eq!(json["data"]["per_page"], 12);
    let sections = json["data"]["sections"].as_array().unwrap();
    let kinds: Vec<&str> = sections
        .iter()
        .map(|s| s["media_type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["video", "novel", "comic", "picture"]);
    assert_eq!(sections[0]["total_count"], 1);
    assert_eq!(sections[0]["items"][0]["title"], "Ocean waves");
    assert_eq!(sections[3]["total_count"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_single_kind(pool: PgPool) {
    seed_content(&pool).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/search?q=ocean&type=picture").await).await;
    let sections = json["data"]["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0]["media_type"], "picture");
    assert_eq!(sections[0]["items"][0]["title"], "Coast");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_no_match_is_empty_not_error(pool: PgPool) {
    seed_content(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/search?q=volcano&type=video").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["sections"][0]["total_count"], 0);
    assert_eq!(json["data"]["sections"][0]["total_pages"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_query_has_no_sections(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/search?q=%20%20").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["sections"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_type_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/search?q=ocean&type=music").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}
