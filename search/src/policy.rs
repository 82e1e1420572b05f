//! Search policy types.

use ordinal_kernel::proof::canon::canonical_json_bytes;
use ordinal_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::error::SearchError;

/// Schema tag written into the JSON form of a policy.
pub const SEARCH_POLICY_SCHEMA_VERSION: &str = "search_policy.v1";

/// Configuration held by an `OrderedSearch`.
///
/// Neither option changes which records are found, only how counts are
/// computed and whether caller contracts are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchPolicyV1 {
    /// How `count_occurrences(key, ordered = true)` is computed.
    pub count_strategy: CountStrategyV1,
    /// When rotated search and peak finding validate their input.
    pub precondition_checks: PreconditionChecksV1,
}

impl SearchPolicyV1 {
    /// JSON form, with a `schema_version` tag.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "count_strategy": self.count_strategy.as_str(),
            "precondition_checks": self.precondition_checks.as_str(),
            "schema_version": SEARCH_POLICY_SCHEMA_VERSION,
        })
    }

    /// Parse a policy from its JSON form.
    ///
    /// Missing fields take their defaults; unknown values are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the value is not an object,
    /// carries a different `schema_version`, or names an unknown option.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, SearchError> {
        let obj = value.as_object().ok_or_else(|| SearchError::InvalidPolicy {
            detail: "policy must be a JSON object".into(),
        })?;

        if let Some(version) = obj.get("schema_version") {
            if version.as_str() != Some(SEARCH_POLICY_SCHEMA_VERSION) {
                return Err(SearchError::InvalidPolicy {
                    detail: format!("unsupported schema_version: {version}"),
                });
            }
        }

        let mut policy = Self::default();
        if let Some(v) = obj.get("count_strategy") {
            policy.count_strategy = v
                .as_str()
                .and_then(CountStrategyV1::parse)
                .ok_or_else(|| SearchError::InvalidPolicy {
                    detail: format!("unknown count_strategy: {v}"),
                })?;
        }
        if let Some(v) = obj.get("precondition_checks") {
            policy.precondition_checks = v
                .as_str()
                .and_then(PreconditionChecksV1::parse)
                .ok_or_else(|| SearchError::InvalidPolicy {
                    detail: format!("unknown precondition_checks: {v}"),
                })?;
        }
        Ok(policy)
    }

    /// Content digest of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Canon`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, SearchError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::SearchPolicy, &bytes))
    }
}

/// How sorted-domain occurrence counts are computed. Both give equal results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountStrategyV1 {
    /// Linear scan of the sorted view. O(n).
    #[default]
    Scan,
    /// `last - first + 1` from two boundary searches. O(log n) after the view
    /// is built.
    Boundary,
}

impl CountStrategyV1 {
    /// Wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scan => "scan",
            Self::Boundary => "boundary",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "scan" => Some(Self::Scan),
            "boundary" => Some(Self::Boundary),
            _ => None,
        }
    }
}

/// When caller contracts for rotated search and peak finding are checked.
///
/// A failed check is logged at `warn` level and the search still runs; the
/// result on such input is unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreconditionChecksV1 {
    /// Check only in builds with `debug_assertions`.
    #[default]
    DebugOnly,
    /// Always check.
    Always,
    /// Never check.
    Off,
}

impl PreconditionChecksV1 {
    /// Wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DebugOnly => "debug_only",
            Self::Always => "always",
            Self::Off => "off",
        }
    }

    /// Whether checks run in this build.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        match self {
            Self::DebugOnly => cfg!(debug_assertions),
            Self::Always => true,
            Self::Off => false,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "debug_only" => Some(Self::DebugOnly),
            "always" => Some(Self::Always),
            "off" => Some(Self::Off),
            _ => None,
        }
    }
}
