//! Cross-type search over the four media tables.
//!
//! Each kind is searched independently with the same page and page size;
//! only active rows are considered.

use catalog_core::listing::ListQuery;
use catalog_core::media::MediaKind;
use catalog_core::pagination::PageRequest;
use catalog_core::search::SearchScope;
use sqlx::PgPool;

use crate::models::media::MediaCard;
use crate::models::search::SearchSection;
use crate::repositories::media_repo::fetch_page;
use crate::repositories::{ComicRepo, MediaRepo, NovelRepo, PictureRepo, VideoRepo};

/// Card projection shared by every media table.
const CARD_COLUMNS: &str = "id, title, description, cover_url, category_id, created_at";

pub struct SearchRepo;

impl SearchRepo {
    /// Run `query` against every kind in `scope`, one section per kind.
    ///
    /// A blank query yields no sections.
    pub async fn search(
        pool: &PgPool,
        query: &str,
        scope: SearchScope,
        page: PageRequest,
    ) -> Result<Vec<SearchSection>, sqlx::Error> {
        let term = query.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let list_query = ListQuery {
            page,
            search: Some(term.to_string()),
            ..ListQuery::default()
        }
        .active_only();

        let mut sections = Vec::new();
        for kind in scope.kinds() {
            let found =
                fetch_page::<MediaCard>(pool, table_for(kind), CARD_COLUMNS, &list_query).await?;
            sections.push(SearchSection {
                media_type: kind,
                items: found.items,
                total_count: found.total_count,
                total_pages: found.total_pages,
            });
        }
        Ok(sections)
    }
}

fn table_for(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Video => VideoRepo::TABLE,
        MediaKind::Novel => NovelRepo::TABLE,
        MediaKind::Comic => ComicRepo::TABLE,
        MediaKind::Picture => PictureRepo::TABLE,
    }
}
