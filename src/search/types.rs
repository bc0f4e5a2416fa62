use serde::{Deserialize, Serialize};

use crate::state::Hit;

/// One decoded page of search results.
///
/// This is the typed boundary for the endpoint's response body: `hits`
/// and `page` are required, everything else in the body is ignored. A
/// body that does not match this shape is a
/// [`FetchError::MalformedBody`](crate::search::FetchError::MalformedBody).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    pub hits: Vec<Hit>,
    pub page: u32,
}
