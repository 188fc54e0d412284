//! Page-number pagination for catalog listings.
//!
//! Listings are addressed by a 1-based `page` and a `per_page` size. The
//! offset and total page count are derived here so every repository and
//! handler agrees on the arithmetic.

use serde::Serialize;

use crate::error::CoreError;

/// Default page when the caller does not ask for one.
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size for listings.
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Largest page size a caller may request.
pub const MAX_PER_PAGE: i64 = 100;

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    per_page: i64,
}

impl PageRequest {
    /// Validate a raw `page` / `per_page` pair, applying defaults for
    /// missing values.
    ///
    /// `page` must be >= 1 and `per_page` must be within `1..=MAX_PER_PAGE`.
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Result<Self, CoreError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE);

        if page < 1 {
            return Err(CoreError::Validation(format!(
                "page: must be >= 1, got {page}"
            )));
        }
        if !(1..=MAX_PER_PAGE).contains(&per_page) {
            return Err(CoreError::Validation(format!(
                "per_page: must be between 1 and {MAX_PER_PAGE}, got {per_page}"
            )));
        }
        if (page - 1).checked_mul(per_page).is_none() {
            return Err(CoreError::Validation(format!(
                "page: {page} is out of range"
            )));
        }

        Ok(Self { page, per_page })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn per_page(&self) -> i64 {
        self.per_page
    }

    /// Number of rows to skip: `(page - 1) * per_page`.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    /// Wrap a fetched slice of rows and the unpaginated row count.
    pub fn into_page<T>(self, items: Vec<T>, total_count: i64) -> Page<T> {
        Page {
            items,
            total_count,
            total_pages: total_pages(total_count, self.per_page),
            page: self.page,
            per_page: self.per_page,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub total_pages: i64,
    pub page: i64,
    pub per_page: i64,
}

/// `ceil(total_count / per_page)`; zero rows means zero pages.
pub fn total_pages(total_count: i64, per_page: i64) -> i64 {
    if total_count <= 0 || per_page <= 0 {
        return 0;
    }
    (total_count + per_page - 1) / per_page
}
