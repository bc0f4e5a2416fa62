//! State-container core for a story-search client.
//!
//! The crate centralizes all application state in a [`state::Store`] and
//! mutates it exclusively through dispatched [`state::Action`]s processed
//! by pure reducers:
//!
//! ```text
//! Action ──→ Reducer ──→ AppState ──→ View (external)
//!    ↑                                  │
//!    └──────────────────────────────────┘
//! ```
//!
//! The [`search::SearchCoordinator`] sits between the store and the
//! Hacker News Algolia search endpoint: it issues paginated fetches,
//! tracks the loading flag, and turns view intents (submit, more,
//! dismiss, sort) into dispatches. Sorting is a pure query-time
//! transformation in [`sort`] and is never persisted into the store.
//!
//! Rendering, layout, and event wiring are the embedder's concern: the
//! view layer subscribes to the store, renders snapshots, and forwards
//! user intents to the coordinator.

pub mod config;
pub mod search;
pub mod sort;
pub mod state;

pub use config::{ConfigError, SearchConfig};
pub use search::{FetchError, SearchCoordinator, SearchPage};
pub use sort::{apply_sort, next_sort};
pub use state::{Action, AppState, Hit, ResultBucket, SortKey, Store, StoreError};
