use thiserror::Error;

/// Errors surfaced by the store at dispatch time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A dismissal targeted a search key with no bucket. The caller must
    /// ensure at least one fetch for that key has completed first.
    #[error("no result bucket for search key '{key}'")]
    MissingBucket { key: String },
}
