//! Movie records and result sets.
//!
//! The catalog answers with an object whose `description` field holds an
//! array of movie objects keyed by `#`-prefixed names. Parsing is lenient on
//! purpose:
//!
//! - a missing `description`, or one that is not an array, yields zero movies
//! - every record field is optional, and strings or numbers are both accepted
//! - an empty string counts as absent
//! - an array element that is not an object becomes an empty record, so the
//!   result count always matches the array length
//!
//! Malformed bodies therefore degrade to "no results" and never to an error.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Field of the response body that holds the movie array.
pub const RESULTS_FIELD: &str = "description";

/// One movie as returned by the catalog. Read-only, sourced verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "#IMDB_ID", default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(rename = "#TITLE", default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(rename = "#YEAR", default, deserialize_with = "lenient_text")]
    pub year: Option<String>,
    #[serde(rename = "#RANK", default, deserialize_with = "lenient_text")]
    pub rank: Option<String>,
    #[serde(rename = "#ACTORS", default, deserialize_with = "lenient_text")]
    pub actors: Option<String>,
    #[serde(rename = "#IMG_POSTER", default, deserialize_with = "lenient_text")]
    pub poster_url: Option<String>,
    #[serde(rename = "#AKA", default, deserialize_with = "lenient_text")]
    pub aka: Option<String>,
    #[serde(rename = "#IMDB_URL", default, deserialize_with = "lenient_text")]
    pub imdb_url: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(display_text))
}

fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Pulls the movie list out of a response body.
///
/// Missing or non-array `description` folds into the empty list.
pub fn extract_movies(body: &Value) -> Vec<MovieRecord> {
    let Some(items) = body.get(RESULTS_FIELD).and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .map(|item| MovieRecord::deserialize(item).unwrap_or_default())
        .collect()
}

static NEXT_RESULT_SET_ID: AtomicU64 = AtomicU64::new(1);

/// Ordered, immutable list of movies with an identity.
///
/// A new `ResultSet` gets a fresh id even when its contents equal the
/// previous one; equality compares ids only. Presentation keys its entrance
/// animation off that identity.
#[derive(Debug, Clone)]
pub struct ResultSet {
    id: u64,
    movies: Arc<[MovieRecord]>,
}

impl ResultSet {
    /// The state before any search has been published (id 0).
    pub fn initial() -> Self {
        Self {
            id: 0,
            movies: Arc::from(Vec::new()),
        }
    }

    /// Wraps a freshly fetched list under a new identity.
    pub fn publish(movies: Vec<MovieRecord>) -> Self {
        Self {
            id: NEXT_RESULT_SET_ID.fetch_add(1, Ordering::Relaxed),
            movies: Arc::from(movies),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// True until the first publish.
    pub fn is_initial(&self) -> bool {
        self.id == 0
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl Default for ResultSet {
    fn default() -> Self {
        Self::initial()
    }
}

impl PartialEq for ResultSet {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ResultSet {}
