//! `RecordV1`: the keyed unit every search operates over.

/// A key-value record.
///
/// Keys are not required to be unique. Every search that reports "first",
/// "last" or "any" occurrence must tolerate duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordV1 {
    /// Ordering key.
    pub key: i64,
    /// Opaque payload carried alongside the key.
    pub value: String,
}

impl RecordV1 {
    /// Create a record from a key and any string-like value.
    #[must_use]
    pub fn new(key: i64, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }

    /// JSON form used by canonical hashing and fixtures: `{"key":..,"value":..}`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "key": self.key,
            "value": self.value,
        })
    }
}

/// Anything that exposes a single `i64` ordering key.
///
/// Search algorithms are written against this trait so they run unchanged
/// over records and over bare key sequences.
pub trait Keyed {
    /// The ordering key.
    fn key(&self) -> i64;
}

impl Keyed for RecordV1 {
    fn key(&self) -> i64 {
        self.key
    }
}

impl Keyed for i64 {
    fn key(&self) -> i64 {
        *self
    }
}
