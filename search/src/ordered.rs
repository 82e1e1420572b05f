//! `OrderedSearch`: owns a collection and exposes the search family.
//!
//! Sorted-domain queries materialize a fresh [`SortedViewV1`] on every call
//! and return view positions. The view is dropped before the call returns, so
//! returned records are always clones and never alias the collection.

use ordinal_kernel::carrier::collection::CollectionV1;
use ordinal_kernel::carrier::record::{Keyed, RecordV1};
use ordinal_kernel::carrier::view::SortedViewV1;
use tracing::{debug, warn};

use crate::bisect;
use crate::error::SearchError;
use crate::exponential::exponential_search;
use crate::jump::jump_search;
use crate::peak;
use crate::policy::{CountStrategyV1, SearchPolicyV1};
use crate::probe::{NoProbe, ProbeSink};
use crate::rotated;
use crate::scan;
use crate::ternary::ternary_search;

/// Search facade over an exclusively owned collection.
///
/// Every query takes `&self` except [`OrderedSearch::insert`] and
/// [`OrderedSearch::insert_position`], which may append.
#[derive(Debug, Clone, Default)]
pub struct OrderedSearch {
    collection: CollectionV1,
    policy: SearchPolicyV1,
}

impl OrderedSearch {
    /// Create an empty search with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty search with `policy`.
    #[must_use]
    pub fn with_policy(policy: SearchPolicyV1) -> Self {
        Self {
            collection: CollectionV1::new(),
            policy,
        }
    }

    /// Take ownership of an existing collection.
    #[must_use]
    pub fn from_collection(collection: CollectionV1, policy: SearchPolicyV1) -> Self {
        Self { collection, policy }
    }

    /// The backing collection, in storage order.
    #[must_use]
    pub fn collection(&self) -> &CollectionV1 {
        &self.collection
    }

    /// The active policy.
    #[must_use]
    pub fn policy(&self) -> &SearchPolicyV1 {
        &self.policy
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    /// Whether no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Append a record at the end of storage order.
    pub fn insert(&mut self, record: RecordV1) {
        self.collection.append(record);
    }

    /// Materialize a fresh sorted view of the current collection.
    #[must_use]
    pub fn sorted_view(&self) -> SortedViewV1 {
        SortedViewV1::materialize(&self.collection)
    }

    /// First record with `key` in storage order.
    #[must_use]
    pub fn linear_search(&self, key: i64) -> Option<RecordV1> {
        let records = self.collection.records();
        let found = scan::linear_search(records, key, &mut NoProbe).map(|i| records[i].clone());
        debug!(operation = "linear_search", key, n = records.len(), found = found.is_some());
        found
    }

    /// Number of records with `key`.
    ///
    /// `ordered = false` scans storage order; `ordered = true` counts over the
    /// sorted view using the policy's [`CountStrategyV1`]. Both agree.
    #[must_use]
    pub fn count_occurrences(&self, key: i64, ordered: bool) -> usize {
        let count = if ordered {
            let view = self.sorted_view();
            count_sorted(view.as_slice(), key, self.policy.count_strategy, &mut NoProbe)
        } else {
            scan::count_matches(self.collection.records(), key, &mut NoProbe)
        };
        debug!(operation = "count_occurrences", key, ordered, count);
        count
    }

    /// Exact binary search on the sorted view, returning a copy of the record.
    ///
    /// With duplicate keys which matching record is returned is unspecified.
    /// Use [`OrderedSearch::first_occurrence_index`] or
    /// [`OrderedSearch::last_occurrence_index`] for a specific occurrence.
    #[must_use]
    pub fn binary_search(&self, key: i64) -> Option<RecordV1> {
        let view = self.sorted_view();
        let found = bisect::binary_search(view.as_slice(), key, &mut NoProbe)
            .and_then(|i| view.get(i).cloned());
        debug!(operation = "binary_search", key, n = view.len(), found = found.is_some());
        found
    }

    /// View index found by exact binary search.
    #[must_use]
    pub fn binary_search_index(&self, key: i64) -> Option<usize> {
        self.sorted_query("binary_search_index", key, bisect::binary_search)
    }

    /// View index of the first record with `key`.
    #[must_use]
    pub fn first_occurrence_index(&self, key: i64) -> Option<usize> {
        self.sorted_query("first_occurrence_index", key, bisect::first_occurrence)
    }

    /// View index of the last record with `key`.
    #[must_use]
    pub fn last_occurrence_index(&self, key: i64) -> Option<usize> {
        self.sorted_query("last_occurrence_index", key, bisect::last_occurrence)
    }

    /// First and last view index of `key`, from one sorted view.
    #[must_use]
    pub fn occurrence_bounds(&self, key: i64) -> Option<(usize, usize)> {
        let view = self.sorted_view();
        let bounds = bisect::occurrence_bounds(view.as_slice(), key, &mut NoProbe);
        debug!(operation = "occurrence_bounds", key, n = view.len(), ?bounds);
        bounds
    }

    /// Same as [`OrderedSearch::occurrence_bounds`], by one linear pass.
    #[must_use]
    pub fn occurrence_bounds_linear(&self, key: i64) -> Option<(usize, usize)> {
        let view = self.sorted_view();
        let bounds = scan::occurrence_bounds_linear(view.as_slice(), key, &mut NoProbe);
        debug!(operation = "occurrence_bounds_linear", key, n = view.len(), ?bounds);
        bounds
    }

    /// Index of `key` in `items`, a rotated ascending sequence with unique keys.
    ///
    /// Works on `items` as given, not on the collection. When the policy
    /// enables precondition checks a violating input is logged and searched
    /// anyway; the result is then unspecified. Call
    /// [`rotated::validate_rotated_sorted`] for a hard check.
    #[must_use]
    pub fn search_in_rotated_sorted<T: Keyed>(&self, key: i64, items: &[T]) -> Option<usize> {
        self.check(|| rotated::validate_rotated_sorted(items));
        let found = rotated::search_rotated(items, key, &mut NoProbe);
        debug!(operation = rotated::OPERATION, key, n = items.len(), ?found);
        found
    }

    /// Storage index of a peak in the collection: an item `>=` its neighbours.
    ///
    /// `None` when the collection is empty. On a flat collection an index is
    /// still returned, but which one is unspecified.
    #[must_use]
    pub fn peak_index(&self) -> Option<usize> {
        let records = self.collection.records();
        self.check(|| peak::validate_peak_input(records));
        let found = peak::peak_index(records, &mut NoProbe);
        debug!(operation = peak::OPERATION, n = records.len(), ?found);
        found
    }

    /// View index of `key` by jump search.
    #[must_use]
    pub fn jump_search(&self, key: i64) -> Option<usize> {
        self.sorted_query("jump_search", key, jump_search)
    }

    /// View index of `key` by exponential search.
    #[must_use]
    pub fn exponential_search(&self, key: i64) -> Option<usize> {
        self.sorted_query("exponential_search", key, exponential_search)
    }

    /// View index of `key` by ternary search.
    #[must_use]
    pub fn ternary_search(&self, key: i64) -> Option<usize> {
        self.sorted_query("ternary_search", key, ternary_search)
    }

    /// View index at which `key` is, or would be inserted to keep the view
    /// sorted.
    ///
    /// # Side effect
    ///
    /// **If the collection is empty, this appends `RecordV1 { key, value }`
    /// and returns 0.** It is the only query that mutates the collection.
    /// On a non-empty collection `value` is ignored and nothing is stored.
    pub fn insert_position(&mut self, key: i64, value: impl Into<String>) -> usize {
        if self.collection.is_empty() {
            self.collection.append(RecordV1::new(key, value));
            debug!(operation = "insert_position", key, "empty collection: record appended");
            return 0;
        }
        let view = self.sorted_view();
        let position = bisect::insert_position(view.as_slice(), key, &mut NoProbe);
        debug!(operation = "insert_position", key, n = view.len(), position);
        position
    }

    /// Run `check` if the policy enables precondition checks, logging a
    /// violation instead of failing.
    pub(crate) fn check(&self, check: impl FnOnce() -> Result<(), SearchError>) -> bool {
        if !self.policy.precondition_checks.enabled() {
            return true;
        }
        match check() {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "caller contract violated; result is unspecified");
                false
            }
        }
    }

    /// Record the outcome of an already-run validation, logging a violation
    /// only if the policy enables precondition checks.
    ///
    /// Returns whether the contract was violated, independent of the policy.
    pub(crate) fn note_violation(&self, outcome: Result<(), SearchError>) -> bool {
        match outcome {
            Ok(()) => false,
            Err(e) => {
                if self.policy.precondition_checks.enabled() {
                    warn!(error = %e, "caller contract violated; result is unspecified");
                }
                true
            }
        }
    }

    fn sorted_query(
        &self,
        operation: &'static str,
        key: i64,
        search: fn(&[RecordV1], i64, &mut NoProbe) -> Option<usize>,
    ) -> Option<usize> {
        let view = self.sorted_view();
        let found = search(view.as_slice(), key, &mut NoProbe);
        debug!(operation, key, n = view.len(), ?found);
        found
    }
}

/// Occurrence count over a sorted slice using `strategy`.
pub(crate) fn count_sorted<T: Keyed, S: ProbeSink>(
    items: &[T],
    key: i64,
    strategy: CountStrategyV1,
    sink: &mut S,
) -> usize {
    match strategy {
        CountStrategyV1::Scan => scan::count_matches(items, key, sink),
        CountStrategyV1::Boundary => bisect::occurrence_bounds(items, key, sink)
            .map_or(0, |(first, last)| last - first + 1),
    }
}
