use thiserror::Error;

/// Errors from a single fetch operation.
///
/// All failures are scoped to the one fetch that produced them: no
/// retries, no process termination. The coordinator resets the loading
/// flag before returning any of these.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, DNS, I/O) or client build error.
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("search endpoint returned status {status}")]
    UpstreamStatus { status: u16 },

    /// The response body did not decode as a results page.
    #[error("malformed search response: {source}")]
    MalformedBody {
        #[source]
        source: serde_json::Error,
    },
}
