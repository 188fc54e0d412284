//! Cross-type search scope and paging constants.

use std::str::FromStr;

use crate::error::CoreError;
use crate::media::MediaKind;
use crate::pagination::PageRequest;

/// Page size shared by every section of a search.
pub const SEARCH_PAGE_SIZE: i64 = 12;

/// Page request for a search: the caller's page, the shared section size.
pub fn search_page(page: Option<i64>) -> Result<PageRequest, CoreError> {
    PageRequest::new(page, Some(SEARCH_PAGE_SIZE))
}

/// Which media kinds a search covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    All,
    Only(MediaKind),
}

impl SearchScope {
    /// Kinds to query, in section order.
    pub fn kinds(self) -> Vec<MediaKind> {
        match self {
            SearchScope::All => MediaKind::ALL.to_vec(),
            SearchScope::Only(kind) => vec![kind],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchScope::All => "all",
            SearchScope::Only(kind) => kind.as_str(),
        }
    }
}

impl FromStr for SearchScope {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(SearchScope::All),
            other => other.parse::<MediaKind>().map(SearchScope::Only),
        }
    }
}
