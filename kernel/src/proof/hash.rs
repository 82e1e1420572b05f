//! Content hashing with domain separation.
//!
//! Algorithm: SHA-256 over `domain_prefix || data`. Each artifact kind hashes
//! under its own [`HashDomain`], so equal bytes of different kinds never
//! produce equal digests.

use sha2::{Digest, Sha256};

use crate::carrier::collection::CollectionV1;
use crate::carrier::view::SortedViewV1;

use super::canon::{canonical_json_bytes, CanonError};

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`).
///
/// Invariant: exactly one `:` separator with non-empty text on both sides
/// (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the colon is missing or either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 || s[colon + 1..].contains(':') {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// The algorithm portion (e.g., "sha256").
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The full string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Typed domain separator for [`canonical_hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// A collection in storage order.
    Collection,
    /// A materialized sorted view.
    SortedView,
    /// A search policy snapshot.
    SearchPolicy,
    /// An audited query report.
    QueryReport,
}

impl HashDomain {
    /// All domains in declaration order.
    pub const ALL: &'static [HashDomain] = &[
        Self::Collection,
        Self::SortedView,
        Self::SearchPolicy,
        Self::QueryReport,
    ];

    /// The raw domain-separator bytes (null-terminated).
    #[must_use]
    pub const fn as_bytes(&self) -> &'static [u8] {
        match self {
            Self::Collection => b"ORDINAL::COLLECTION::V1\0",
            Self::SortedView => b"ORDINAL::SORTED_VIEW::V1\0",
            Self::SearchPolicy => b"ORDINAL::SEARCH_POLICY::V1\0",
            Self::QueryReport => b"ORDINAL::QUERY_REPORT::V1\0",
        }
    }
}

/// Compute the canonical hash of `data` under `domain`.
///
/// Result format: `"sha256:<64 lowercase hex chars>"`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let hex_digest = hex::encode(hasher.finalize());
    let full = format!("sha256:{hex_digest}");
    ContentHash { full, colon: 6 }
}

/// Digest of a collection's canonical JSON form (storage order matters).
///
/// # Errors
///
/// Returns [`CanonError`] if canonical serialization fails.
pub fn collection_digest(collection: &CollectionV1) -> Result<ContentHash, CanonError> {
    let bytes = canonical_json_bytes(&collection.to_json_value())?;
    Ok(canonical_hash(HashDomain::Collection, &bytes))
}

/// Digest of a sorted view's canonical JSON form.
///
/// # Errors
///
/// Returns [`CanonError`] if canonical serialization fails.
pub fn view_digest(view: &SortedViewV1) -> Result<ContentHash, CanonError> {
    let bytes = canonical_json_bytes(&view.to_json_value())?;
    Ok(canonical_hash(HashDomain::SortedView, &bytes))
}
