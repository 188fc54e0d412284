use std::path::PathBuf;

use catalog_core::navigation::{DEFAULT_TOP_LINKS_LIMIT, DEFAULT_TOP_TAGS_LIMIT};
use catalog_core::types::DbId;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory that root-relative cover links resolve against (default: `public`).
    pub public_asset_root: PathBuf,
    /// Number of tags in the top-tag strip (default: `20`).
    pub top_tags_limit: i64,
    /// Number of friend links in the header grid (default: `32`).
    pub top_links_limit: i64,
    /// Video categories with their own home page section (default: `1,4,5`).
    pub home_video_categories: Vec<DbId>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `3000`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:3001` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `PUBLIC_ASSET_ROOT`     | `public`                |
    /// | `TOP_TAGS_LIMIT`        | `20`                    |
    /// | `TOP_LINKS_LIMIT`       | `32`                    |
    /// | `HOME_VIDEO_CATEGORIES` | `1,4,5`                 |
    ///
    /// Panics on malformed values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_list(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3001".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let public_asset_root = PathBuf::from(
            std::env::var("PUBLIC_ASSET_ROOT").unwrap_or_else(|_| "public".into()),
        );

        let top_tags_limit = positive_limit("TOP_TAGS_LIMIT", DEFAULT_TOP_TAGS_LIMIT);
        let top_links_limit = positive_limit("TOP_LINKS_LIMIT", DEFAULT_TOP_LINKS_LIMIT);

        let home_video_categories = parse_id_list(
            &std::env::var("HOME_VIDEO_CATEGORIES").unwrap_or_else(|_| "1,4,5".into()),
        )
        .unwrap_or_else(|e| panic!("HOME_VIDEO_CATEGORIES is invalid: {e}"));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            public_asset_root,
            top_tags_limit,
            top_links_limit,
            home_video_categories,
        }
    }
}

fn positive_limit(var: &str, default: i64) -> i64 {
    let value: i64 = match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|_| panic!("{var} must be a valid integer")),
        Err(_) => default,
    };
    assert!(value > 0, "{var} must be positive");
    value
}

/// Split a comma-separated value, dropping blanks.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse a comma-separated list of positive ids.
pub fn parse_id_list(raw: &str) -> Result<Vec<DbId>, String> {
    parse_list(raw)
        .into_iter()
        .map(|item| match item.parse::<DbId>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(format!("'{item}' is not a positive id")),
        })
        .collect()
}
