//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_api;

use storysearch::Hit;

/// Build a hit with the fields the store and sort engine care about.
pub fn make_hit(object_id: &str, title: &str, author: &str, num_comments: i64, points: i64) -> Hit {
    Hit {
        object_id: object_id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        url: format!("https://example.com/{object_id}"),
        num_comments,
        points,
    }
}

/// Minimal hit identified only by `object_id`.
pub fn hit(object_id: &str) -> Hit {
    make_hit(object_id, "", "", 0, 0)
}
