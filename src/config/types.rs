use serde::{Deserialize, Serialize};

/// Endpoint and fetch settings.
///
/// Every field has a default matching the public Hacker News Algolia
/// search API, so an empty config file (or none at all) yields a working
/// setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Base URL of the search API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Page size requested from the endpoint.
    #[serde(default = "default_hits_per_page")]
    pub hits_per_page: u32,
    /// Query seeded into the search input at startup.
    #[serde(default = "default_query")]
    pub default_query: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

impl SearchConfig {
    /// Initial application state with this config's default query
    /// pre-filled in the search input.
    pub fn initial_state(&self) -> crate::state::AppState {
        crate::state::AppState::new(self.default_query.clone())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            hits_per_page: default_hits_per_page(),
            default_query: default_query(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://hn.algolia.com/api/v1".to_string()
}

fn default_hits_per_page() -> u32 {
    100
}

fn default_query() -> String {
    crate::state::DEFAULT_QUERY.to_string()
}

fn default_connect_timeout() -> u32 {
    5
}
