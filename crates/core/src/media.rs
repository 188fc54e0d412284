//! Media kinds and category types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Media kind
// ---------------------------------------------------------------------------

/// The four kinds of content the catalog serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Novel,
    Comic,
    Picture,
}

impl MediaKind {
    /// Every kind, in the order search sections are returned.
    pub const ALL: [MediaKind; 4] = [
        MediaKind::Video,
        MediaKind::Novel,
        MediaKind::Comic,
        MediaKind::Picture,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Novel => "novel",
            MediaKind::Comic => "comic",
            MediaKind::Picture => "picture",
        }
    }

    /// Entity name used in not-found errors.
    pub fn entity_name(self) -> &'static str {
        match self {
            MediaKind::Video => "Video",
            MediaKind::Novel => "Novel",
            MediaKind::Comic => "Comic",
            MediaKind::Picture => "Picture",
        }
    }

    /// Category type whose categories this kind may reference.
    pub fn category_type(self) -> CategoryType {
        match self {
            MediaKind::Video => CategoryType::Video,
            MediaKind::Novel => CategoryType::Novel,
            MediaKind::Comic => CategoryType::Comic,
            MediaKind::Picture => CategoryType::Picture,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "type: unknown media type '{s}', expected one of video, novel, comic, picture"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Category type
// ---------------------------------------------------------------------------

/// Partition of categories by the media kind they apply to.
///
/// Stored as text (`Video`, `Novel`, `Picture`, `Comic`) in `categories.type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryType {
    #[serde(alias = "video")]
    Video,
    #[serde(alias = "novel")]
    Novel,
    #[serde(alias = "picture")]
    Picture,
    #[serde(alias = "comic")]
    Comic,
}

impl CategoryType {
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryType::Video => "Video",
            CategoryType::Novel => "Novel",
            CategoryType::Picture => "Picture",
            CategoryType::Comic => "Comic",
        }
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Video" | "video" => Ok(CategoryType::Video),
            "Novel" | "novel" => Ok(CategoryType::Novel),
            "Picture" | "picture" => Ok(CategoryType::Picture),
            "Comic" | "comic" => Ok(CategoryType::Comic),
            other => Err(CoreError::Validation(format!(
                "type: unknown category type '{other}'"
            ))),
        }
    }
}

impl TryFrom<String> for CategoryType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
