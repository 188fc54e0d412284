//! Search request and response shapes.

use catalog_core::media::MediaKind;
use serde::{Deserialize, Serialize};

use crate::models::media::MediaCard;

/// Query parameters for `GET /api/v1/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    /// `all`, `video`, `novel`, `comic` or `picture`.
    #[serde(rename = "type")]
    pub search_type: Option<String>,
    pub page: Option<i64>,
}

/// Matches of one media kind.
#[derive(Debug, Clone, Serialize)]
pub struct SearchSection {
    pub media_type: MediaKind,
    pub items: Vec<MediaCard>,
    pub total_count: i64,
    pub total_pages: i64,
}

/// Full search response.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: String,
    #[serde(rename = "type")]
    pub search_type: &'static str,
    pub page: i64,
    pub per_page: i64,
    pub sections: Vec<SearchSection>,
}
