use crate::search::SearchPage;
use crate::state::app_state::SortKey;

/// Typed intents that can mutate the store.
///
/// `PageArrived` and `Dismiss` carry the search key they target
/// explicitly. The key is captured when the intent is raised (at request
/// time for fetches), so a response that lands after the user has
/// submitted a different term still merges into the bucket it was issued
/// for.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The user edited the search input.
    UpdateSearchTerm(String),
    /// Commit a term as the active results partition.
    UpdateSearchKey(String),
    UpdateIsLoading(bool),
    UpdateSortKey(SortKey),
    UpdateIsSortReverse(bool),
    /// A page of results arrived for `key`; hits are appended to that
    /// key's bucket.
    PageArrived { key: String, result: SearchPage },
    /// Remove one hit by identity from `key`'s bucket.
    Dismiss { key: String, object_id: String },
}
