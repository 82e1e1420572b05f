//! Bisection over a key-sorted slice: exact match, first/last occurrence,
//! and insertion position.
//!
//! All searches keep inclusive bounds `[lo, hi]` and compute
//! `mid = lo + (hi - lo) / 2`. Moving `hi` left of index 0 ends the search
//! instead of wrapping.

use std::cmp::Ordering;

use ordinal_kernel::carrier::record::Keyed;

use crate::probe::ProbeSink;

/// Exact binary search over the whole slice.
///
/// With duplicate keys the returned index is one of the matches, but which
/// one is unspecified. Use [`first_occurrence`] / [`last_occurrence`] when a
/// particular occurrence is needed.
pub fn binary_search<T: Keyed, S: ProbeSink>(items: &[T], key: i64, sink: &mut S) -> Option<usize> {
    if items.is_empty() {
        return None;
    }
    binary_search_within(items, key, 0, items.len() - 1, sink)
}

/// Exact binary search confined to the inclusive window `[lo, hi]`.
///
/// `hi` is clamped to the last index.
pub fn binary_search_within<T: Keyed, S: ProbeSink>(
    items: &[T],
    key: i64,
    lo: usize,
    hi: usize,
    sink: &mut S,
) -> Option<usize> {
    let last = items.len().checked_sub(1)?;
    let (mut lo, mut hi) = (lo, hi.min(last));
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        sink.probe(mid);
        match key.cmp(&items[mid].key()) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => match mid.checked_sub(1) {
                Some(h) => hi = h,
                None => break,
            },
            Ordering::Greater => lo = mid + 1,
        }
    }
    None
}

/// Index of the first (leftmost) item with `key`.
pub fn first_occurrence<T: Keyed, S: ProbeSink>(
    items: &[T],
    key: i64,
    sink: &mut S,
) -> Option<usize> {
    biased_search(items, key, Bias::Left, sink)
}

/// Index of the last (rightmost) item with `key`.
pub fn last_occurrence<T: Keyed, S: ProbeSink>(
    items: &[T],
    key: i64,
    sink: &mut S,
) -> Option<usize> {
    biased_search(items, key, Bias::Right, sink)
}

/// First and last index of `key`, both taken from the same slice.
///
/// Guarantees `first <= last` when present. The right-biased search only runs
/// when the key was found, and starts from the first occurrence.
pub fn occurrence_bounds<T: Keyed, S: ProbeSink>(
    items: &[T],
    key: i64,
    sink: &mut S,
) -> Option<(usize, usize)> {
    let first = first_occurrence(items, key, sink)?;
    let mut shifted = Offset {
        base: first,
        inner: sink,
    };
    let last = first + biased_search(&items[first..], key, Bias::Right, &mut shifted)?;
    Some((first, last))
}

/// Insertion position for `key`.
///
/// Returns the index of a matching item when one exists, otherwise the index
/// at which `key` would have to be inserted to keep the slice sorted. An
/// empty slice yields 0.
pub fn insert_position<T: Keyed, S: ProbeSink>(items: &[T], key: i64, sink: &mut S) -> usize {
    let Some(last) = items.len().checked_sub(1) else {
        return 0;
    };
    let (mut lo, mut hi) = (0usize, last);
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        sink.probe(mid);
        match items[mid].key().cmp(&key) {
            Ordering::Equal => return mid,
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => match mid.checked_sub(1) {
                Some(h) => hi = h,
                None => break,
            },
        }
    }
    lo
}

#[derive(Clone, Copy)]
enum Bias {
    Left,
    Right,
}

/// Binary search that keeps narrowing after a match.
fn biased_search<T: Keyed, S: ProbeSink>(
    items: &[T],
    key: i64,
    bias: Bias,
    sink: &mut S,
) -> Option<usize> {
    let last = items.len().checked_sub(1)?;
    let (mut lo, mut hi) = (0usize, last);
    let mut found = None;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        sink.probe(mid);
        let go_left = match key.cmp(&items[mid].key()) {
            Ordering::Equal => {
                found = Some(mid);
                matches!(bias, Bias::Left)
            }
            Ordering::Less => true,
            Ordering::Greater => false,
        };
        if go_left {
            match mid.checked_sub(1) {
                Some(h) => hi = h,
                None => break,
            }
        } else {
            lo = mid + 1;
        }
    }
    found
}

/// Shifts probes from a subslice back into the caller's coordinates.
struct Offset<'a, S> {
    base: usize,
    inner: &'a mut S,
}

impl<S: ProbeSink> ProbeSink for Offset<'_, S> {
    fn probe(&mut self, index: usize) {
        self.inner.probe(self.base + index);
    }
}
