//! Pure sort engine applied at query time; stored hit order is never
//! rewritten.

use crate::state::{Hit, SortKey};

/// Order `hits` by `sort_key`, then reverse the result when `reverse`
/// is set (so `Comments` + reverse is ascending, `Title` + reverse is
/// descending). `SortKey::None` preserves insertion order.
pub fn apply_sort(sort_key: SortKey, reverse: bool, hits: &[Hit]) -> Vec<Hit> {
    let mut sorted = hits.to_vec();
    match sort_key {
        SortKey::None => {}
        SortKey::Title => sorted.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Author => sorted.sort_by(|a, b| a.author.cmp(&b.author)),
        SortKey::Comments => sorted.sort_by(|a, b| b.num_comments.cmp(&a.num_comments)),
        SortKey::Points => sorted.sort_by(|a, b| b.points.cmp(&a.points)),
    }
    if reverse {
        sorted.reverse();
    }
    sorted
}

/// Toggle policy for sort-header activation: re-clicking the active key
/// flips the reverse flag, clicking a different key selects it
/// non-reversed.
pub fn next_sort(prev_key: SortKey, prev_reverse: bool, clicked: SortKey) -> (SortKey, bool) {
    (clicked, clicked == prev_key && !prev_reverse)
}
