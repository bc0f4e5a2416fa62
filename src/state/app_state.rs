use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Query seeded into `search_term` at startup.
pub const DEFAULT_QUERY: &str = "redux";

/// One story record as returned by the search API.
///
/// `object_id` is the identity used for dismissal and list keying.
/// Text fields default to empty and counters to zero, so a response body
/// fails decoding only on a structural mismatch (wrong types, missing
/// `objectID`), not on a sparsely-populated hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    #[serde(rename = "objectID")]
    pub object_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub num_comments: i64,
    #[serde(default)]
    pub points: i64,
}

/// Accumulated hits for one search key plus the last page fetched.
///
/// Hits are appended in arrival order across pages and are not
/// deduplicated by `object_id`; the upstream API may double-report a
/// story across pages and this core preserves what it was given.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultBucket {
    pub hits: Vec<Hit>,
    pub page: u32,
}

/// Results partitioned by committed search term, so switching terms does
/// not discard previously fetched pages.
pub type ResultsTable = HashMap<String, ResultBucket>;

/// Field/ordering applied to the displayed list at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Insertion order of the bucket.
    #[default]
    None,
    /// Ascending lexicographic by title.
    Title,
    /// Ascending lexicographic by author.
    Author,
    /// Descending numeric by comment count.
    Comments,
    /// Descending numeric by points.
    Points,
}

/// Whole-application state snapshot. Single source of truth; mutated
/// only by reducers applied through the [`Store`](crate::state::Store).
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Accumulated results per committed search term.
    pub results: ResultsTable,
    /// The committed term whose bucket the view currently shows.
    /// Empty until the first submit.
    pub search_key: String,
    /// The term currently being typed; committed into `search_key`
    /// on submit.
    pub search_term: String,
    /// True while a fetch is in flight.
    pub is_loading: bool,
    pub sort_key: SortKey,
    pub is_sort_reverse: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY)
    }
}

impl AppState {
    /// Initial state with the given search term pre-filled.
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            results: ResultsTable::new(),
            search_key: String::new(),
            search_term: search_term.into(),
            is_loading: false,
            sort_key: SortKey::None,
            is_sort_reverse: false,
        }
    }

    /// Bucket for the currently committed search key, if one exists.
    pub fn current_bucket(&self) -> Option<&ResultBucket> {
        self.results.get(&self.search_key)
    }

    /// Last page fetched for the current key, 0 before any fetch.
    pub fn current_page(&self) -> u32 {
        self.current_bucket().map_or(0, |bucket| bucket.page)
    }
}
