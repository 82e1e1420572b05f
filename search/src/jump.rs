//! Jump search over a key-sorted slice.
//!
//! Blocks of `floor(sqrt(n))` items are skipped until one ends at a key
//! `>= key` (or the last block is reached); that block is then scanned
//! linearly. O(√n) time, O(1) space.

use ordinal_kernel::carrier::record::Keyed;

use crate::probe::ProbeSink;

/// Index of `key` in a sorted slice, or `None`.
///
/// When `key` is duplicated the first occurrence is returned: every block
/// before the scanned one ends strictly below `key`.
pub fn jump_search<T: Keyed, S: ProbeSink>(items: &[T], key: i64, sink: &mut S) -> Option<usize> {
    let n = items.len();
    if n == 0 {
        return None;
    }
    let step = floor_sqrt(n);

    let mut block_start = 0;
    let block_end = loop {
        let block_end = (block_start + step).min(n) - 1;
        sink.probe(block_end);
        if items[block_end].key() >= key || block_end == n - 1 {
            break block_end;
        }
        block_start += step;
    };

    for (i, item) in items.iter().enumerate().take(block_end + 1).skip(block_start) {
        sink.probe(i);
        if item.key() == key {
            return Some(i);
        }
        if item.key() > key {
            break;
        }
    }
    None
}

/// Largest `s` with `s * s <= n`, never less than 1.
fn floor_sqrt(n: usize) -> usize {
    let mut s = 1usize;
    while (s + 1).saturating_mul(s + 1) <= n {
        s += 1;
    }
    s
}
