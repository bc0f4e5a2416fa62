//! The coordinator mediates between view intents, the store, and the
//! search endpoint: it decides whether a submit needs a fetch, sequences
//! the loading flag around each request, and turns responses into
//! dispatched actions.

use reqwest::Client;
use std::time::Duration;

use crate::config::SearchConfig;
use crate::search::error::FetchError;
use crate::search::types::SearchPage;
use crate::sort::next_sort;
use crate::state::{Action, SortKey, Store, StoreError};

const FIRST_PAGE: u32 = 0;

/// Async coordinator and intent surface for the view layer.
///
/// Holds a clone of the store and a shared HTTP client. One fetch in
/// flight is policy, not enforced: the embedder should not trigger an
/// overlapping "more" while `is_loading` is true.
pub struct SearchCoordinator {
    store: Store,
    client: Client,
    config: SearchConfig,
}

impl SearchCoordinator {
    pub fn new(store: Store, config: SearchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(
                config.connect_timeout_seconds,
            )))
            .build()?;
        Ok(Self {
            store,
            client,
            config,
        })
    }

    /// True iff no bucket exists for `term`, i.e. it has never been
    /// fetched. Deliberately ignores page and age: the cache never
    /// invalidates, and a refresh must go through an explicit fetch.
    pub fn needs_fetch(&self, term: &str) -> bool {
        !self.store.state().results.contains_key(term)
    }

    /// Fetch one page of results for `term` and merge it into `term`'s
    /// bucket.
    ///
    /// The target key is captured here, at request time, so a response
    /// that lands after the user has moved on still merges into the
    /// bucket it was issued for. On any failure the loading flag is
    /// reset before the error is returned; no partial bucket is created.
    pub async fn fetch_page(&self, term: &str, page: u32) -> Result<(), FetchError> {
        let key = term.to_string();
        self.dispatch(Action::UpdateIsLoading(true));
        tracing::debug!(term, page, "fetching results page");

        match self.request_page(term, page).await {
            Ok(result) => {
                self.dispatch(Action::PageArrived { key, result });
                self.dispatch(Action::UpdateIsLoading(false));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(term, page, error = %err, "search fetch failed");
                self.dispatch(Action::UpdateIsLoading(false));
                Err(err)
            }
        }
    }

    async fn request_page(&self, term: &str, page: u32) -> Result<SearchPage, FetchError> {
        let url = format!("{}/search", self.config.base_url);
        let page_param = page.to_string();
        let hpp_param = self.config.hits_per_page.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", term),
                ("page", page_param.as_str()),
                ("hitsPerPage", hpp_param.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| FetchError::MalformedBody { source })
    }

    /// Commit the current search term as the active key, then fetch its
    /// first page unless that term already has a bucket.
    pub async fn submit(&self) -> Result<(), FetchError> {
        let term = self.store.state().search_term;
        self.dispatch(Action::UpdateSearchKey(term.clone()));
        if self.needs_fetch(&term) {
            self.fetch_page(&term, FIRST_PAGE).await?;
        }
        Ok(())
    }

    /// Fetch the next page for the currently committed key,
    /// unconditionally. Pagination must be able to progress even though
    /// the bucket already exists, so there is no `needs_fetch` check.
    pub async fn more(&self) -> Result<(), FetchError> {
        let state = self.store.state();
        let next_page = state
            .current_bucket()
            .map_or(FIRST_PAGE, |bucket| bucket.page + 1);
        self.fetch_page(&state.search_key, next_page).await
    }

    /// View intent: the search input changed.
    pub fn set_search_term(&self, term: impl Into<String>) {
        self.dispatch(Action::UpdateSearchTerm(term.into()));
    }

    /// View intent: dismiss one hit from the currently committed key's
    /// bucket. Errors if that key has no bucket yet.
    pub fn dismiss(&self, object_id: &str) -> Result<(), StoreError> {
        let key = self.store.state().search_key;
        self.store.dispatch(Action::Dismiss {
            key,
            object_id: object_id.to_string(),
        })
    }

    /// View intent: a sort header was activated. Re-activating the
    /// current sort key toggles the reverse flag; switching keys resets
    /// it.
    pub fn sort(&self, clicked: SortKey) {
        let state = self.store.state();
        let (key, reverse) = next_sort(state.sort_key, state.is_sort_reverse, clicked);
        self.dispatch(Action::UpdateSortKey(key));
        self.dispatch(Action::UpdateIsSortReverse(reverse));
    }

    // Every action dispatched here passes store validation by
    // construction; only Dismiss can be rejected and it goes through
    // `dismiss`.
    fn dispatch(&self, action: Action) {
        let _ = self.store.dispatch(action);
    }
}
