//! Filter and sort vocabulary shared by every media listing.
//!
//! Filters are conjunctive: each provided option narrows the result set.
//! The search term matches title OR description as a case-insensitive
//! substring.

use serde::Deserialize;

use crate::error::CoreError;
use crate::pagination::PageRequest;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Column a listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[serde(alias = "createdAt")]
    CreatedAt,
    Title,
    Views,
}

impl SortField {
    pub fn column(self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::Title => "title",
            SortField::Views => "views",
        }
    }
}

/// Sort fields every media kind supports.
pub const BASIC_SORT_FIELDS: &[SortField] = &[SortField::CreatedAt, SortField::Title];

/// Sort fields for videos, which also carry a view counter.
pub const VIDEO_SORT_FIELDS: &[SortField] =
    &[SortField::CreatedAt, SortField::Title, SortField::Views];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// A validated ordering. Defaults to newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            field: SortField::CreatedAt,
            order: SortOrder::Desc,
        }
    }
}

impl Sort {
    /// Validate the requested field against what the listing supports.
    pub fn new(
        field: Option<SortField>,
        order: Option<SortOrder>,
        allowed: &[SortField],
    ) -> Result<Self, CoreError> {
        let field = field.unwrap_or(SortField::CreatedAt);
        if !allowed.contains(&field) {
            let names: Vec<&str> = allowed.iter().map(|f| f.column()).collect();
            return Err(CoreError::Validation(format!(
                "sort_by: '{}' is not supported here, expected one of {}",
                field.column(),
                names.join(", ")
            )));
        }
        Ok(Self {
            field,
            order: order.unwrap_or_default(),
        })
    }

    /// `ORDER BY` body. `id` breaks ties in the same direction so pages are stable.
    pub fn order_by_clause(&self) -> String {
        let dir = self.order.keyword();
        format!("{} {dir}, id {dir}", self.field.column())
    }
}

// ---------------------------------------------------------------------------
// Listing query
// ---------------------------------------------------------------------------

/// A fully validated listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: PageRequest,
    pub category_id: Option<DbId>,
    /// Trimmed, non-empty search term.
    pub search: Option<String>,
    pub is_active: Option<bool>,
    pub sort: Sort,
}

impl ListQuery {
    /// Restrict the query to publicly visible rows.
    pub fn active_only(mut self) -> Self {
        self.is_active = Some(true);
        self
    }

    /// `ILIKE` pattern for the search term, if any.
    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_deref().map(like_pattern)
    }
}

/// Validate a category filter; category ids are positive.
pub fn validate_category_filter(category_id: Option<DbId>) -> Result<(), CoreError> {
    match category_id {
        Some(id) if id <= 0 => Err(CoreError::Validation(format!(
            "category_id: must be a positive id, got {id}"
        ))),
        _ => Ok(()),
    }
}

/// Trim a search term; blank terms count as no search.
pub fn normalize_search(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Build a substring `LIKE` pattern matching `term` literally.
///
/// `\`, `%` and `_` are escaped with a backslash, which is PostgreSQL's
/// default `LIKE` escape character.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Clamp a user-provided limit to `1..=max`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sort_is_newest_first() {
        let sort = Sort::new(None, None, BASIC_SORT_FIELDS).unwrap();
        assert_eq!(sort, Sort::default());
        assert_eq!(sort.order_by_clause(), "created_at DESC, id DESC");
    }

    #[test]
    fn ascending_title_sort() {
        let sort = Sort::new(Some(SortField::Title), Some(SortOrder::Asc), BASIC_SORT_FIELDS)
            .unwrap();
        assert_eq!(sort.order_by_clause(), "title ASC, id ASC");
    }

    #[test]
    fn views_sort_only_where_allowed() {
        assert!(Sort::new(Some(SortField::Views), None, BASIC_SORT_FIELDS).is_err());
        assert!(Sort::new(Some(SortField::Views), None, VIDEO_SORT_FIELDS).is_ok());
    }

    #[test]
    fn sort_field_accepts_camel_case_alias() {
        let field: SortField = serde_json::from_str("\"createdAt\"").unwrap();
        assert_eq!(field, SortField::CreatedAt);
    }

    #[test]
    fn blank_search_is_none() {
        assert_eq!(normalize_search(Some("   ")), None);
        assert_eq!(normalize_search(None), None);
        assert_eq!(normalize_search(Some(" cat ")), Some("cat".to_string()));
    }

    #[test]
    fn like_pattern_wraps_term() {
        assert_eq!(like_pattern("cat"), "%cat%");
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn active_only_forces_flag() {
        let query = ListQuery {
            is_active: Some(false),
            ..ListQuery::default()
        };
        assert_eq!(query.active_only().is_active, Some(true));
    }

    #[test]
    fn category_filter_must_be_positive() {
        assert!(validate_category_filter(Some(0)).is_err());
        assert!(validate_category_filter(Some(-3)).is_err());
        assert!(validate_category_filter(Some(1)).is_ok());
        assert!(validate_category_filter(None).is_ok());
    }

    #[test]
    fn clamp_limit_bounds() {
        assert_eq!(clamp_limit(None, 4, 50), 4);
        assert_eq!(clamp_limit(Some(0), 4, 50), 1);
        assert_eq!(clamp_limit(Some(500), 4, 50), 50);
    }
}
