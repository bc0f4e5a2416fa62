//! Centralized application state: value types, actions, reducers, and
//! the store container that ties them together.

mod action;
mod app_state;
mod error;
mod reducer;
mod store;

pub use action::Action;
pub use app_state::{AppState, Hit, ResultBucket, ResultsTable, SortKey, DEFAULT_QUERY};
pub use error::StoreError;
pub use reducer::reduce;
pub use store::{Store, SubscriptionId};
