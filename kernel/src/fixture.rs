//! Collection fixtures: write/read a `CollectionV1` as canonical JSON on disk.
//!
//! # File format
//!
//! ```text
//! {"records":[{"key":5,"value":"e"},...],"schema_version":"collection.v1"}
//! ```
//!
//! # Fail-closed semantics
//!
//! - Unreadable file → error
//! - Invalid JSON → error
//! - Unknown `schema_version` → error
//! - A record with a missing or non-integer `key`, or a non-string `value` → error
//!
//! Fixtures exist for tests, benchmarks and the cross-process report binary.
//! They are not a persistence layer.

use std::path::Path;

use crate::carrier::collection::{CollectionV1, COLLECTION_SCHEMA_VERSION};
use crate::carrier::record::RecordV1;
use crate::proof::canon::canonical_json_bytes;

/// Error reading or writing a fixture file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    /// I/O error.
    Io { detail: String },
    /// File content is not valid JSON.
    Parse { detail: String },
    /// `schema_version` is missing or not recognized.
    SchemaVersionMismatch { found: String },
    /// A record entry is malformed.
    InvalidRecord { index: usize, detail: String },
    /// Canonical JSON serialization failed.
    CanonError { detail: String },
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::Parse { detail } => write!(f, "fixture is not valid JSON: {detail}"),
            Self::SchemaVersionMismatch { found } => {
                write!(f, "unsupported fixture schema_version: {found}")
            }
            Self::InvalidRecord { index, detail } => {
                write!(f, "invalid record at index {index}: {detail}")
            }
            Self::CanonError { detail } => write!(f, "canonical JSON error: {detail}"),
        }
    }
}

impl std::error::Error for FixtureError {}

/// Write `collection` to `path` as canonical JSON.
///
/// # Errors
///
/// Returns [`FixtureError::Io`] if the file cannot be written.
pub fn write_collection(path: &Path, collection: &CollectionV1) -> Result<(), FixtureError> {
    let bytes = canonical_json_bytes(&collection.to_json_value()).map_err(|e| {
        FixtureError::CanonError {
            detail: e.to_string(),
        }
    })?;
    std::fs::write(path, bytes).map_err(|e| FixtureError::Io {
        detail: format!("{}: {e}", path.display()),
    })
}

/// Load a collection from a fixture file at `path`.
///
/// # Errors
///
/// Returns [`FixtureError`] on I/O failure or any malformed content.
pub fn load_collection(path: &Path) -> Result<CollectionV1, FixtureError> {
    let bytes = std::fs::read(path).map_err(|e| FixtureError::Io {
        detail: format!("{}: {e}", path.display()),
    })?;
    parse_collection(&bytes)
}

/// Parse a collection from fixture bytes.
///
/// # Errors
///
/// Returns [`FixtureError`] on invalid JSON, schema mismatch, or malformed records.
pub fn parse_collection(bytes: &[u8]) -> Result<CollectionV1, FixtureError> {
    let value: serde_json::Value = serde_json::from_slice(bytes).map_err(|e| {
        FixtureError::Parse {
            detail: e.to_string(),
        }
    })?;

    let version = value["schema_version"].as_str().unwrap_or_default();
    if version != COLLECTION_SCHEMA_VERSION {
        return Err(FixtureError::SchemaVersionMismatch {
            found: version.to_string(),
        });
    }

    let entries = value["records"]
        .as_array()
        .ok_or_else(|| FixtureError::Parse {
            detail: "`records` must be an array".into(),
        })?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_record(index, entry))
        .collect()
}

fn parse_record(index: usize, entry: &serde_json::Value) -> Result<RecordV1, FixtureError> {
    let key = entry["key"]
        .as_i64()
        .ok_or_else(|| FixtureError::InvalidRecord {
            index,
            detail: "`key` must be an i64 integer".into(),
        })?;
    let value = entry["value"]
        .as_str()
        .ok_or_else(|| FixtureError::InvalidRecord {
            index,
            detail: "`value` must be a string".into(),
        })?;
    Ok(RecordV1::new(key, value))
}
