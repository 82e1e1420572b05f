//! Exponential search over a key-sorted slice.
//!
//! Probes indices `1, 2, 4, 8, ...` until one holds a key `>= key` or the
//! end is passed, then bisects the window `[bound / 2, min(bound, n - 1)]`.
//! O(log p), where p is the position of the match or insertion point.

use ordinal_kernel::carrier::record::Keyed;

use crate::bisect::binary_search_within;
use crate::probe::ProbeSink;

/// Index of `key` in a sorted slice, or `None`.
pub fn exponential_search<T: Keyed, S: ProbeSink>(
    items: &[T],
    key: i64,
    sink: &mut S,
) -> Option<usize> {
    let n = items.len();
    let first = items.first()?;
    sink.probe(0);
    if first.key() == key {
        return Some(0);
    }

    let mut bound = 1usize;
    while bound < n {
        sink.probe(bound);
        if items[bound].key() >= key {
            break;
        }
        bound = bound.saturating_mul(2);
    }

    binary_search_within(items, key, bound / 2, bound.min(n - 1), sink)
}
