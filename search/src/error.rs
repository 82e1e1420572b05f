//! Typed search errors.
//!
//! Searches themselves never fail: absence is `None`. `SearchError` covers
//! explicit precondition validation, policy parsing, and report
//! serialization.

/// Typed failure for validation and audit surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Input does not satisfy an algorithm's documented precondition.
    PreconditionViolation {
        operation: &'static str,
        detail: String,
    },
    /// A policy JSON value could not be parsed.
    InvalidPolicy { detail: String },
    /// Canonical JSON serialization failed while building a digest.
    Canon { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PreconditionViolation { operation, detail } => {
                write!(f, "precondition violated for {operation}: {detail}")
            }
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
            Self::Canon { detail } => write!(f, "canonical JSON error: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<ordinal_kernel::proof::canon::CanonError> for SearchError {
    fn from(e: ordinal_kernel::proof::canon::CanonError) -> Self {
        Self::Canon {
            detail: e.to_string(),
        }
    }
}
