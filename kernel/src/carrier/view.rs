//! Materialize-Sorted-View: the single ordering step behind every
//! sorted-domain query.
//!
//! A `SortedViewV1` is an independently owned copy of a collection, ordered
//! non-decreasing by key. Ties keep their storage order (stable sort). Indices
//! reported by sorted-domain searches are positions in this view, not storage
//! positions in the collection.

use super::collection::CollectionV1;
use super::record::RecordV1;

/// Schema tag written into the JSON form of a sorted view.
pub const SORTED_VIEW_SCHEMA_VERSION: &str = "sorted_view.v1";

/// A key-sorted snapshot of a collection.
///
/// Owned and detached: mutating the source collection afterwards does not
/// affect an existing view, and records read from a view are never aliases
/// into the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedViewV1 {
    records: Vec<RecordV1>,
}

impl SortedViewV1 {
    /// Materialize the sorted view of `collection`.
    ///
    /// O(n log n) time, O(n) auxiliary space. Does not mutate `collection`.
    /// An empty collection yields an empty view.
    #[must_use]
    pub fn materialize(collection: &CollectionV1) -> Self {
        let mut records = collection.records().to_vec();
        records.sort_by_key(|r| r.key);
        Self { records }
    }

    /// Records in ascending key order.
    #[must_use]
    pub fn as_slice(&self) -> &[RecordV1] {
        &self.records
    }

    /// Record at a view position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RecordV1> {
        self.records.get(index)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the view is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keys in view order.
    #[must_use]
    pub fn keys(&self) -> Vec<i64> {
        self.records.iter().map(|r| r.key).collect()
    }

    /// JSON form: `{"records":[...],"schema_version":"sorted_view.v1"}`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let records: Vec<serde_json::Value> =
            self.records.iter().map(RecordV1::to_json_value).collect();
        serde_json::json!({
            "records": records,
            "schema_version": SORTED_VIEW_SCHEMA_VERSION,
        })
    }
}
