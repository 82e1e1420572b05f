//! Audited queries: run any search with a probe log and produce a
//! content-addressed report.
//!
//! A [`QueryReportV1`] binds together the query, its outcome, every probed
//! index in order, and the digests of the collection, sorted view and policy
//! it ran against. Its canonical JSON bytes, and therefore its digest, are a
//! pure function of (collection, policy, query).

use ordinal_kernel::carrier::record::RecordV1;
use ordinal_kernel::carrier::view::SortedViewV1;
use ordinal_kernel::proof::canon::canonical_json_bytes;
use ordinal_kernel::proof::hash::{
    canonical_hash, collection_digest, view_digest, ContentHash, HashDomain,
};
use tracing::debug;

use crate::bisect;
use crate::error::SearchError;
use crate::exponential::exponential_search;
use crate::jump::jump_search;
use crate::ordered::{count_sorted, OrderedSearch};
use crate::peak;
use crate::probe::ProbeLog;
use crate::rotated;
use crate::scan;
use crate::ternary::ternary_search;

/// Schema tag written into the JSON form of a report.
pub const QUERY_REPORT_SCHEMA_VERSION: &str = "query_report.v1";

/// One query of the search family, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryV1 {
    /// First record with `key` in storage order.
    Linear { key: i64 },
    /// Occurrence count over storage order or the sorted view.
    Count { key: i64, ordered: bool },
    /// Exact binary search returning a record.
    Binary { key: i64 },
    /// First view index of `key`.
    FirstOccurrence { key: i64 },
    /// Last view index of `key`.
    LastOccurrence { key: i64 },
    /// First and last view index of `key` by bisection.
    Bounds { key: i64 },
    /// First and last view index of `key` by linear pass.
    BoundsLinear { key: i64 },
    /// Search in an externally supplied rotated sorted sequence.
    Rotated { key: i64, items: Vec<RecordV1> },
    /// Peak index over storage order.
    Peak,
    /// Jump search on the sorted view.
    Jump { key: i64 },
    /// Exponential search on the sorted view.
    Exponential { key: i64 },
    /// Ternary search on the sorted view.
    Ternary { key: i64 },
    /// Insertion position; appends when the collection is empty.
    InsertPosition { key: i64, value: String },
}

impl QueryV1 {
    /// Stable operation name.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Linear { .. } => "linear_search",
            Self::Count { .. } => "count_occurrences",
            Self::Binary { .. } => "binary_search",
            Self::FirstOccurrence { .. } => "first_occurrence_index",
            Self::LastOccurrence { .. } => "last_occurrence_index",
            Self::Bounds { .. } => "occurrence_bounds",
            Self::BoundsLinear { .. } => "occurrence_bounds_linear",
            Self::Rotated { .. } => rotated::OPERATION,
            Self::Peak => peak::OPERATION,
            Self::Jump { .. } => "jump_search",
            Self::Exponential { .. } => "exponential_search",
            Self::Ternary { .. } => "ternary_search",
            Self::InsertPosition { .. } => "insert_position",
        }
    }

    /// JSON form of the arguments, tagged with the operation name.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let mut args = match self {
            Self::Linear { key }
            | Self::Binary { key }
            | Self::FirstOccurrence { key }
            | Self::LastOccurrence { key }
            | Self::Bounds { key }
            | Self::BoundsLinear { key }
            | Self::Jump { key }
            | Self::Exponential { key }
            | Self::Ternary { key } => serde_json::json!({ "key": key }),
            Self::Count { key, ordered } => serde_json::json!({ "key": key, "ordered": ordered }),
            Self::Rotated { key, items } => serde_json::json!({
                "items": items.iter().map(RecordV1::to_json_value).collect::<Vec<_>>(),
                "key": key,
            }),
            Self::Peak => serde_json::json!({}),
            Self::InsertPosition { key, value } => {
                serde_json::json!({ "key": key, "value": value })
            }
        };
        args["operation"] = serde_json::Value::from(self.operation());
        args
    }
}

/// Result of one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeV1 {
    /// A copied record, or none.
    Record(Option<RecordV1>),
    /// An index, or none.
    Index(Option<usize>),
    /// A `(first, last)` pair, or none.
    Bounds(Option<(usize, usize)>),
    /// An occurrence count.
    Count(usize),
}

impl OutcomeV1 {
    /// Whether the outcome reports something found (a non-zero count counts).
    #[must_use]
    pub fn is_found(&self) -> bool {
        match self {
            Self::Record(r) => r.is_some(),
            Self::Index(i) => i.is_some(),
            Self::Bounds(b) => b.is_some(),
            Self::Count(c) => *c > 0,
        }
    }

    /// JSON form. Absence is `null`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::Record(r) => serde_json::json!({
                "record": r.as_ref().map(RecordV1::to_json_value),
                "type": "record",
            }),
            Self::Index(i) => serde_json::json!({ "index": i, "type": "index" }),
            Self::Bounds(b) => serde_json::json!({
                "bounds": b.map(|(first, last)| serde_json::json!([first, last])),
                "type": "bounds",
            }),
            Self::Count(c) => serde_json::json!({ "count": c, "type": "count" }),
        }
    }
}

/// Audit record of one executed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryReportV1 {
    /// The query as submitted.
    pub query: QueryV1,
    /// What it returned.
    pub outcome: OutcomeV1,
    /// Probed indices, in order, in the coordinate space of the query.
    pub probes: Vec<usize>,
    /// Collection digest before the query ran.
    pub collection_digest: ContentHash,
    /// Digest of the sorted view searched, for sorted-domain queries.
    pub view_digest: Option<ContentHash>,
    /// Digest of the policy in force.
    pub policy_digest: ContentHash,
    /// Whether the input broke the query's caller contract.
    ///
    /// Always validated, whatever the policy says; the policy only decides
    /// whether a violation is also logged.
    pub precondition_violated: bool,
    /// Whether the query appended to the collection.
    pub mutated: bool,
}

impl QueryReportV1 {
    /// JSON form of the report.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "collection_digest": self.collection_digest.as_str(),
            "mutated": self.mutated,
            "outcome": self.outcome.to_json_value(),
            "policy_digest": self.policy_digest.as_str(),
            "precondition_violated": self.precondition_violated,
            "probe_count": self.probes.len(),
            "probes": self.probes,
            "query": self.query.to_json_value(),
            "schema_version": QUERY_REPORT_SCHEMA_VERSION,
            "view_digest": self.view_digest.as_ref().map(ContentHash::as_str),
        })
    }

    /// Canonical JSON bytes of the report.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Canon`] if canonical serialization fails.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, SearchError> {
        Ok(canonical_json_bytes(&self.to_json_value())?)
    }

    /// Content digest of the canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Canon`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, SearchError> {
        Ok(canonical_hash(HashDomain::QueryReport, &self.canonical_bytes()?))
    }
}

impl OrderedSearch {
    /// Execute `query` with a probe log attached and report on it.
    ///
    /// Returns the same outcome the corresponding plain method would. Like
    /// [`OrderedSearch::insert_position`], an `InsertPosition` query appends
    /// to an empty collection; the report records this as `mutated`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Canon`] if a digest cannot be computed. The
    /// query itself cannot fail.
    pub fn run(&mut self, query: &QueryV1) -> Result<QueryReportV1, SearchError> {
        let policy_digest = self.policy().digest()?;
        let collection_digest = collection_digest(self.collection())?;
        let before = self.len();

        let mut log = ProbeLog::new();
        let mut precondition_violated = false;
        let mut view_digest_out = None;
        let mut materialize = |search: &OrderedSearch| -> Result<SortedViewV1, SearchError> {
            let view = search.sorted_view();
            view_digest_out = Some(view_digest(&view)?);
            Ok(view)
        };

        let outcome = match query {
            QueryV1::Linear { key } => {
                let records = self.collection().records();
                OutcomeV1::Record(
                    scan::linear_search(records, *key, &mut log).map(|i| records[i].clone()),
                )
            }
            QueryV1::Count {
                key,
                ordered: false,
            } => OutcomeV1::Count(scan::count_matches(
                self.collection().records(),
                *key,
                &mut log,
            )),
            QueryV1::Count { key, ordered: true } => {
                let view = materialize(&*self)?;
                let strategy = self.policy().count_strategy;
                OutcomeV1::Count(count_sorted(view.as_slice(), *key, strategy, &mut log))
            }
            QueryV1::Binary { key } => {
                let view = materialize(&*self)?;
                OutcomeV1::Record(
                    bisect::binary_search(view.as_slice(), *key, &mut log)
                        .and_then(|i| view.get(i).cloned()),
                )
            }
            QueryV1::FirstOccurrence { key } => {
                let view = materialize(&*self)?;
                OutcomeV1::Index(bisect::first_occurrence(view.as_slice(), *key, &mut log))
            }
            QueryV1::LastOccurrence { key } => {
                let view = materialize(&*self)?;
                OutcomeV1::Index(bisect::last_occurrence(view.as_slice(), *key, &mut log))
            }
            QueryV1::Bounds { key } => {
                let view = materialize(&*self)?;
                OutcomeV1::Bounds(bisect::occurrence_bounds(view.as_slice(), *key, &mut log))
            }
            QueryV1::BoundsLinear { key } => {
                let view = materialize(&*self)?;
                OutcomeV1::Bounds(scan::occurrence_bounds_linear(
                    view.as_slice(),
                    *key,
                    &mut log,
                ))
            }
            QueryV1::Rotated { key, items } => {
                precondition_violated =
                    self.note_violation(rotated::validate_rotated_sorted(items));
                OutcomeV1::Index(rotated::search_rotated(items, *key, &mut log))
            }
            QueryV1::Peak => {
                let records = self.collection().records();
                precondition_violated = self.note_violation(peak::validate_peak_input(records));
                OutcomeV1::Index(peak::peak_index(records, &mut log))
            }
            QueryV1::Jump { key } => {
                let view = materialize(&*self)?;
                OutcomeV1::Index(jump_search(view.as_slice(), *key, &mut log))
            }
            QueryV1::Exponential { key } => {
                let view = materialize(&*self)?;
                OutcomeV1::Index(exponential_search(view.as_slice(), *key, &mut log))
            }
            QueryV1::Ternary { key } => {
                let view = materialize(&*self)?;
                OutcomeV1::Index(ternary_search(view.as_slice(), *key, &mut log))
            }
            QueryV1::InsertPosition { key, value } => {
                if self.is_empty() {
                    self.insert(RecordV1::new(*key, value.clone()));
                    OutcomeV1::Index(Some(0))
                } else {
                    let view = materialize(&*self)?;
                    OutcomeV1::Index(Some(bisect::insert_position(
                        view.as_slice(),
                        *key,
                        &mut log,
                    )))
                }
            }
        };

        let report = QueryReportV1 {
            query: query.clone(),
            outcome,
            probes: log.into_indices(),
            collection_digest,
            view_digest: view_digest_out,
            policy_digest,
            precondition_violated,
            mutated: self.len() != before,
        };
        debug!(
            operation = query.operation(),
            probes = report.probes.len(),
            found = report.outcome.is_found(),
            mutated = report.mutated,
            "audited query complete"
        );
        Ok(report)
    }
}
