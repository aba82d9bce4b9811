//! Production configuration.
//!
//! The catalog endpoint, default query and notification timings are fixed
//! constants. They are grouped into [`SearchConfig`] so the session and the
//! HTTP client receive them explicitly rather than reading globals.
//!
//! # Usage
//!
//! ```
//! use reelfind_core::config::{SearchConfig, DEFAULT_QUERY};
//!
//! let config = SearchConfig::default();
//! assert_eq!(config.default_query, DEFAULT_QUERY);
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

// =============================================================================
// Movie Catalog API
// =============================================================================

/// Search endpoint of the public movie catalog.
pub const SEARCH_ENDPOINT: &str = "https://imdb.iamidiotareyoutoo.com/search";

/// Name of the query-string parameter carrying the search term.
pub const QUERY_PARAM: &str = "q";

/// Query pre-filled in the search box and searched on startup.
pub const DEFAULT_QUERY: &str = "FLCL";

/// Per-request timeout (native targets only; browser fetch ignores it).
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// User agent sent on native targets.
pub const USER_AGENT: &str = "Reelfind/0.1.0 (movie catalog search)";

// =============================================================================
// Rendering
// =============================================================================

/// Poster shown for records that carry no image URL.
pub const FALLBACK_POSTER_URL: &str = "https://th.bing.com/th?id=OIP.io28tGJjh4Xvw3zyzsJamwAAAA&w=200&h=200&c=12&rs=1&p=0&o=6&dpr=1.5&pid=23.1";

/// Text rendered for a record without an actors field.
pub const MISSING_FIELD_TEXT: &str = "N/A";

// =============================================================================
// Notifications
// =============================================================================

/// How long the "Movies Loaded" confirmation stays up.
pub const SUCCESS_NOTICE_MS: u64 = 1500;

/// Shown when the remote error payload carries no message of its own.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Settings for [`crate::session::SearchSession`] and [`crate::api::HttpMovieApi`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Full URL of the search endpoint.
    pub endpoint: String,
    /// Query parameter name.
    pub query_param: String,
    /// Initial search term.
    pub default_query: String,
    /// HTTP timeout in seconds.
    pub request_timeout_secs: u64,
    /// Auto-dismiss delay for the success notice, in milliseconds.
    pub success_notice_ms: u64,
}

impl SearchConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn success_notice_duration(&self) -> Duration {
        Duration::from_millis(self.success_notice_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: SEARCH_ENDPOINT.to_string(),
            query_param: QUERY_PARAM.to_string(),
            default_query: DEFAULT_QUERY.to_string(),
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            success_notice_ms: SUCCESS_NOTICE_MS,
        }
    }
}
