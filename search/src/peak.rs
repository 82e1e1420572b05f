//! Peak finding over a sequence in storage order.

use ordinal_kernel::carrier::record::Keyed;

use crate::error::SearchError;
use crate::probe::ProbeSink;

/// Operation name used in precondition errors and logs.
pub const OPERATION: &str = "peak_index";

/// Index of a peak: an item whose key is `>=` each existing neighbour.
///
/// Bisects on the slope: if `items[mid] > items[mid + 1]` a peak lies in
/// `[lo, mid]`, otherwise in `[mid + 1, hi]`. O(log n). Returns `None` for an
/// empty slice. On a flat sequence some index is still returned, but which
/// one is unspecified.
pub fn peak_index<T: Keyed, S: ProbeSink>(items: &[T], sink: &mut S) -> Option<usize> {
    let (mut lo, mut hi) = (0usize, items.len().checked_sub(1)?);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        sink.probe(mid);
        if items[mid].key() > items[mid + 1].key() {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    Some(lo)
}

/// Check that `items` is non-empty and, with two or more items, not flat.
///
/// # Errors
///
/// Returns [`SearchError::PreconditionViolation`] for empty or flat input.
pub fn validate_peak_input<T: Keyed>(items: &[T]) -> Result<(), SearchError> {
    let Some(first) = items.first() else {
        return Err(SearchError::PreconditionViolation {
            operation: OPERATION,
            detail: "sequence is empty".into(),
        });
    };
    if items.len() > 1 && items.iter().all(|item| item.key() == first.key()) {
        return Err(SearchError::PreconditionViolation {
            operation: OPERATION,
            detail: format!("flat sequence: all {} keys equal {}", items.len(), first.key()),
        });
    }
    Ok(())
}
