//! `CollectionV1`: the insertion-ordered backing store.
//!
//! The collection is append-only. Storage order is never changed by a read;
//! sorted-domain queries work on a [`super::view::SortedViewV1`] copy instead.

use super::record::RecordV1;

/// Schema tag written into the JSON form of a collection.
pub const COLLECTION_SCHEMA_VERSION: &str = "collection.v1";

/// An owned, insertion-ordered sequence of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionV1 {
    records: Vec<RecordV1>,
}

impl CollectionV1 {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from records, keeping their order as storage order.
    #[must_use]
    pub fn from_records(records: Vec<RecordV1>) -> Self {
        Self { records }
    }

    /// Append a record at the end of storage order.
    pub fn append(&mut self, record: RecordV1) {
        self.records.push(record);
    }

    /// Records in storage order.
    #[must_use]
    pub fn records(&self) -> &[RecordV1] {
        &self.records
    }

    /// Record at a storage position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RecordV1> {
        self.records.get(index)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keys in storage order.
    #[must_use]
    pub fn keys(&self) -> Vec<i64> {
        self.records.iter().map(|r| r.key).collect()
    }

    /// JSON form: `{"records":[...],"schema_version":"collection.v1"}`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let records: Vec<serde_json::Value> =
            self.records.iter().map(RecordV1::to_json_value).collect();
        serde_json::json!({
            "records": records,
            "schema_version": COLLECTION_SCHEMA_VERSION,
        })
    }
}

impl FromIterator<RecordV1> for CollectionV1 {
    fn from_iter<I: IntoIterator<Item = RecordV1>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
