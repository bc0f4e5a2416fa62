//! Pure reducers, one per top-level state field, composed into a single
//! whole-state `reduce`.
//!
//! Every field reducer is total: it returns its input unchanged for any
//! action it does not handle, so dispatching an action only ever touches
//! the fields that action is about.

use crate::state::action::Action;
use crate::state::app_state::{AppState, ResultsTable, SortKey};

/// Apply `action` to `state`, producing the next state.
///
/// Pure: no side effects, no reads outside the arguments.
pub fn reduce(state: AppState, action: &Action) -> AppState {
    AppState {
        results: results_reducer(state.results, action),
        search_key: search_key_reducer(state.search_key, action),
        search_term: search_term_reducer(state.search_term, action),
        is_loading: is_loading_reducer(state.is_loading, action),
        sort_key: sort_key_reducer(state.sort_key, action),
        is_sort_reverse: is_sort_reverse_reducer(state.is_sort_reverse, action),
    }
}

fn results_reducer(mut results: ResultsTable, action: &Action) -> ResultsTable {
    match action {
        Action::PageArrived { key, result } => {
            // First page for a key creates its bucket; later pages append.
            // No dedup by object_id, matching upstream behavior.
            let bucket = results.entry(key.clone()).or_default();
            bucket.hits.extend(result.hits.iter().cloned());
            bucket.page = result.page;
            results
        }
        Action::Dismiss { key, object_id } => {
            // Missing-bucket dispatches are rejected by the store before
            // reduction; reducers stay total regardless.
            if let Some(bucket) = results.get_mut(key) {
                bucket.hits.retain(|hit| hit.object_id != *object_id);
            }
            results
        }
        _ => results,
    }
}

fn search_key_reducer(state: String, action: &Action) -> String {
    match action {
        Action::UpdateSearchKey(key) => key.clone(),
        _ => state,
    }
}

fn search_term_reducer(state: String, action: &Action) -> String {
    match action {
        Action::UpdateSearchTerm(term) => term.clone(),
        _ => state,
    }
}

fn is_loading_reducer(state: bool, action: &Action) -> bool {
    match action {
        Action::UpdateIsLoading(value) => *value,
        _ => state,
    }
}

fn sort_key_reducer(state: SortKey, action: &Action) -> SortKey {
    match action {
        Action::UpdateSortKey(key) => *key,
        _ => state,
    }
}

fn is_sort_reverse_reducer(state: bool, action: &Action) -> bool {
    match action {
        Action::UpdateIsSortReverse(value) => *value,
        _ => state,
    }
}
