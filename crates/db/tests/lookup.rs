//! Integration tests for categories, tags, friend links, settings and
//! the cross-type search.

use catalog_core::media::{CategoryType, MediaKind};
use catalog_core::search::{search_page, SearchScope};
use catalog_db::models::category::CreateCategory;
use catalog_db::models::friend_link::CreateFriendLink;
use catalog_db::models::novel::CreateNovel;
use catalog_db::models::tag::{CreateTag, TagLink};
use catalog_db::models::video::CreateVideo;
use catalog_db::repositories::{
    CategoryRepo, FriendLinkRepo, MediaRepo, NovelRepo, SearchRepo, SettingRepo, TagRepo,
    VideoRepo,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_category(category_type: CategoryType, name: &str, sort_order: i32) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
        category_type,
        sort_order: Some(sort_order),
    }
}

fn new_tag(name: &str, url: Option<&str>, sort_order: i32) -> CreateTag {
    CreateTag {
        name: name.to_string(),
        url: url.map(str::to_string),
        sort_order: Some(sort_order),
    }
}

// ---------------------------------------------------------------------------
// Test: Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_categories_by_type_in_display_order(pool: PgPool) {
    CategoryRepo::create(&pool, &new_category(CategoryType::Video, "Late", 5))
        .await
        .unwrap();
    CategoryRepo::create(&pool, &new_category(CategoryType::Video, "Early", 1))
        .await
        .unwrap();
    CategoryRepo::create(&pool, &new_category(CategoryType::Novel, "Fantasy", 0))
        .await
        .unwrap();

    let videos = CategoryRepo::list_by_type(&pool, CategoryType::Video)
        .await
        .unwrap();
    let names: Vec<&str> = videos.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Early", "Late"]);
    assert!(videos.iter().all(|c| c.category_type == CategoryType::Video));

    let comics = CategoryRepo::list_by_type(&pool, CategoryType::Comic)
        .await
        .unwrap();
    assert!(comics.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_category_name_per_type_rejected(pool: PgPool) {
    CategoryRepo::create(&pool, &new_category(CategoryType::Video, "Same", 0))
        .await
        .unwrap();
    CategoryRepo::create(&pool, &new_category(CategoryType::Comic, "Same", 0))
        .await
        .unwrap();
    let result = CategoryRepo::create(&pool, &new_category(CategoryType::Video, "Same", 0)).await;
    assert!(result.is_err(), "Duplicate (type, name) should fail");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_referenced_category_cannot_be_deleted(pool: PgPool) {
    let cat = CategoryRepo::create(&pool, &new_category(CategoryType::Video, "Used", 0))
        .await
        .unwrap();
    let video = CreateVideo {
        title: "v".to_string(),
        description: None,
        cover_url: "/v.jpg".to_string(),
        play_url: "https://cdn.example.com/v.mp4".to_string(),
        category_id: cat.id,
        is_active: None,
        player_type: None,
        external_id: None,
    };
    VideoRepo::create(&pool, &video).await.unwrap();

    let err = CategoryRepo::delete(&pool, cat.id).await.unwrap_err();
    let code = err.as_database_error().and_then(|e| e.code().map(|c| c.into_owned()));
    assert_eq!(code.as_deref(), Some("23503"));

    let unused = CategoryRepo::create(&pool, &new_category(CategoryType::Video, "Unused", 0))
        .await
        .unwrap();
    assert!(CategoryRepo::delete(&pool, unused.id).await.unwrap());
    assert!(!CategoryRepo::delete(&pool, unused.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Test: Tags and friend links
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_top_tags_are_active_ordered_and_capped(pool: PgPool) {
    TagRepo::create(&pool, &new_tag("third", None, 3)).await.unwrap();
    TagRepo::create(&pool, &new_tag("first", Some("/videos?category_id=2"), 1))
        .await
        .unwrap();
    let hidden = TagRepo::create(&pool, &new_tag("hidden", None, 0)).await.unwrap();
    TagRepo::create(&pool, &new_tag("second tag", None, 2)).await.unwrap();
    assert!(TagRepo::set_active(&pool, hidden.id, false).await.unwrap());

    let tags = TagRepo::top(&pool, 2).await.unwrap();
    let links: Vec<TagLink> = tags.into_iter().map(TagLink::from).collect();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].name, "first");
    assert_eq!(links[0].href, "/videos?category_id=2");
    assert_eq!(links[1].href, "/search?q=second%20tag");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_top_links_are_active_and_ordered(pool: PgPool) {
    for (name, order) in [("b", 2), ("a", 1), ("c", 3)] {
        let input = CreateFriendLink {
            name: name.to_string(),
            url: format!("https://{name}.example.com"),
            sort_order: Some(order),
        };
        FriendLinkRepo::create(&pool, &input).await.unwrap();
    }
    let all = FriendLinkRepo::top(&pool, 32).await.unwrap();
    let c = all.iter().find(|l| l.name == "c").unwrap().id;
    FriendLinkRepo::set_active(&pool, c, false).await.unwrap();

    let links = FriendLinkRepo::top(&pool, 32).await.unwrap();
    let names: Vec<&str> = links.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
}

// ---------------------------------------------------------------------------
// Test: Settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_setting_lookup_and_upsert(pool: PgPool) {
    assert!(SettingRepo::find(&pool, "site", "title").await.unwrap().is_none());

    SettingRepo::upsert(&pool, "site", "title", &json!("Catalog"))
        .await
        .unwrap();
    SettingRepo::upsert(&pool, "site", "title", &json!({"text": "Renamed"}))
        .await
        .unwrap();

    let setting = SettingRepo::find(&pool, "site", "title")
        .await
        .unwrap()
        .expect("setting stored");
    assert_eq!(setting.value, json!({"text": "Renamed"}));
}

// ---------------------------------------------------------------------------
// Test: Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_returns_one_section_per_kind(pool: PgPool) {
    let vcat = CategoryRepo::create(&pool, &new_category(CategoryType::Video, "V", 0))
        .await
        .unwrap();
    let ncat = CategoryRepo::create(&pool, &new_category(CategoryType::Novel, "N", 0))
        .await
        .unwrap();
    let video = CreateVideo {
        title: "Dragon documentary".to_string(),
        description: None,
        cover_url: "/v.jpg".to_string(),
        play_url: "https://cdn.example.com/v.mp4".to_string(),
        category_id: vcat.id,
        is_active: None,
        player_type: None,
        external_id: None,
    };
    VideoRepo::create(&pool, &video).await.unwrap();
    let hidden = CreateVideo {
        title: "Dragon outtakes".to_string(),
        is_active: Some(false),
        ..video.clone()
    };
    VideoRepo::create(&pool, &hidden).await.unwrap();
    let novel = CreateNovel {
        title: "Tales".to_string(),
        description: Some("where DRAGONS live".to_string()),
        cover_url: "/n.jpg".to_string(),
        author: Some("Anon".to_string()),
        content: String::new(),
        category_id: ncat.id,
        is_active: None,
    };
    NovelRepo::create(&pool, &novel).await.unwrap();

    let page = search_page(None).unwrap();
    let sections = SearchRepo::search(&pool, "dragon", SearchScope::All, page)
        .await
        .unwrap();
    let kinds: Vec<MediaKind> = sections.iter().map(|s| s.media_type).collect();
    assert_eq!(kinds, MediaKind::ALL.to_vec());
    assert_eq!(sections[0].total_count, 1);
    assert_eq!(sections[1].total_count, 1);
    assert_eq!(sections[2].total_count, 0);
    assert_eq!(sections[3].total_count, 0);

    let only = SearchRepo::search(&pool, "dragon", SearchScope::Only(MediaKind::Novel), page)
        .await
        .unwrap();
    assert_eq!(only.len(), 1);
    assert_eq!(only[0].items[0].title, "Tales");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_search_has_no_sections(pool: PgPool) {
    let sections = SearchRepo::search(&pool, "   ", SearchScope::All, search_page(None).unwrap())
        .await
        .unwrap();
    assert!(sections.is_empty());
}
