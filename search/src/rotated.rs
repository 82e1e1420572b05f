//! Search in a rotated sorted sequence.
//!
//! Input is an ascending, unique-key sequence shifted cyclically by an
//! unknown offset (possibly zero), e.g. `[4, 5, 6, 7, 0, 1, 2]`. At every step
//! one half of `[lo, hi]` is a monotonic run; the target is kept in that half
//! only when its key falls inside the run's range.
//!
//! Duplicate keys make the "which half is sorted" test ambiguous. They are a
//! documented limitation: results on such input are unspecified.

use ordinal_kernel::carrier::record::Keyed;

use crate::error::SearchError;
use crate::probe::ProbeSink;

/// Operation name used in precondition errors and logs.
pub const OPERATION: &str = "search_in_rotated_sorted";

/// Index of `key` in a rotated sorted sequence, or `None`.
///
/// O(log n). The index is a position in `items` as given.
pub fn search_rotated<T: Keyed, S: ProbeSink>(
    items: &[T],
    key: i64,
    sink: &mut S,
) -> Option<usize> {
    let (mut lo, mut hi) = (0usize, items.len().checked_sub(1)?);
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        sink.probe(mid);
        let mid_key = items[mid].key();
        if mid_key == key {
            return Some(mid);
        }

        let go_left = if items[lo].key() <= mid_key {
            // [lo, mid] is the sorted run.
            items[lo].key() <= key && key < mid_key
        } else {
            // [mid, hi] is the sorted run.
            !(mid_key < key && key <= items[hi].key())
        };

        if go_left {
            hi = mid.checked_sub(1)?;
        } else {
            lo = mid + 1;
        }
    }
    None
}

/// Check that `items` is a rotation of a strictly ascending sequence.
///
/// Accepts an empty sequence, a single item, an unrotated ascending sequence,
/// and any rotation with exactly one descent whose wrap-around stays ordered.
///
/// # Errors
///
/// Returns [`SearchError::PreconditionViolation`] naming the first offending
/// position otherwise (including equal adjacent keys).
pub fn validate_rotated_sorted<T: Keyed>(items: &[T]) -> Result<(), SearchError> {
    let mut descent: Option<usize> = None;
    for (i, pair) in items.windows(2).enumerate() {
        let (a, b) = (pair[0].key(), pair[1].key());
        if a == b {
            return Err(violation(format!("duplicate key {a} at positions {i} and {}", i + 1)));
        }
        if a > b {
            if let Some(first) = descent {
                return Err(violation(format!(
                    "more than one descent (at positions {first} and {i})"
                )));
            }
            descent = Some(i);
        }
    }

    if descent.is_some() {
        if let (Some(first), Some(last)) = (items.first(), items.last()) {
            if last.key() >= first.key() {
                return Err(violation(format!(
                    "wrap-around not ordered: last key {} >= first key {}",
                    last.key(),
                    first.key()
                )));
            }
        }
    }
    Ok(())
}

fn violation(detail: String) -> SearchError {
    SearchError::PreconditionViolation {
        operation: OPERATION,
        detail,
    }
}
