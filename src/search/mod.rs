//! Asynchronous fetch coordination against the story-search endpoint.

mod coordinator;
mod error;
mod types;

pub use coordinator::SearchCoordinator;
pub use error::FetchError;
pub use types::SearchPage;
