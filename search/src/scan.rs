//! Linear fallbacks: first match, counting, and linear boundary scan.
//!
//! These make no ordering assumption and are the reference the sorted-domain
//! searches are checked against.

use ordinal_kernel::carrier::record::Keyed;

use crate::probe::ProbeSink;

/// Index of the first item whose key equals `key`, scanning in slice order.
///
/// O(n) time, O(1) space.
pub fn linear_search<T: Keyed, S: ProbeSink>(items: &[T], key: i64, sink: &mut S) -> Option<usize> {
    for (i, item) in items.iter().enumerate() {
        sink.probe(i);
        if item.key() == key {
            return Some(i);
        }
    }
    None
}

/// Number of items whose key equals `key`. Visits every item.
pub fn count_matches<T: Keyed, S: ProbeSink>(items: &[T], key: i64, sink: &mut S) -> usize {
    let mut count = 0;
    for (i, item) in items.iter().enumerate() {
        sink.probe(i);
        if item.key() == key {
            count += 1;
        }
    }
    count
}

/// First and last index of `key` found by one linear pass.
///
/// On a sorted slice this equals [`crate::bisect::occurrence_bounds`]; it is
/// kept as the O(n) comparison baseline.
pub fn occurrence_bounds_linear<T: Keyed, S: ProbeSink>(
    items: &[T],
    key: i64,
    sink: &mut S,
) -> Option<(usize, usize)> {
    let mut bounds: Option<(usize, usize)> = None;
    for (i, item) in items.iter().enumerate() {
        sink.probe(i);
        if item.key() == key {
            bounds = Some(match bounds {
                Some((first, _)) => (first, i),
                None => (i, i),
            });
        }
    }
    bounds
}
