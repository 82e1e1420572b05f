//! Ternary search over a key-sorted slice.
//!
//! Splits `[lo, hi]` at `m1 = lo + (hi - lo) / 3` and `m2 = hi - (hi - lo) / 3`
//! and keeps the third that can contain the key. O(log₃ n) iterations, but two
//! comparisons per iteration, so it is not faster than binary search.

use ordinal_kernel::carrier::record::Keyed;

use crate::probe::ProbeSink;

/// Index of `key` in a sorted slice, or `None`.
pub fn ternary_search<T: Keyed, S: ProbeSink>(
    items: &[T],
    key: i64,
    sink: &mut S,
) -> Option<usize> {
    let (mut lo, mut hi) = (0usize, items.len().checked_sub(1)?);
    while lo <= hi {
        let third = (hi - lo) / 3;
        let (m1, m2) = (lo + third, hi - third);

        sink.probe(m1);
        let k1 = items[m1].key();
        if k1 == key {
            return Some(m1);
        }
        sink.probe(m2);
        let k2 = items[m2].key();
        if k2 == key {
            return Some(m2);
        }

        if key < k1 {
            hi = m1.checked_sub(1)?;
        } else if key > k2 {
            lo = m2 + 1;
        } else {
            // k1 < key < k2, so m1 < m2.
            lo = m1 + 1;
            hi = m2 - 1;
        }
    }
    None
}
