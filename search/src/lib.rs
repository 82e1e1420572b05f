//! Ordinal Search: classical search strategies over keyed records.
//!
//! This crate provides the query layer. It depends only on `ordinal_kernel`.
//!
//! # Crate dependency graph
//!
//! ```text
//! ordinal_kernel  ←  ordinal_search
//! (records, views)    (algorithms, OrderedSearch, reports)
//! ```
//!
//! # Key types
//!
//! - [`ordered::OrderedSearch`] -- owns a collection and exposes the search family
//! - [`policy::SearchPolicyV1`] -- count strategy and precondition-check configuration
//! - [`probe::ProbeSink`] -- trait every algorithm reports probed indices to
//! - [`report::QueryV1`] / [`report::QueryReportV1`] -- audited, content-addressed queries
//!
//! # Coordinate spaces
//!
//! Linear search, peak finding and unordered counting work on storage order.
//! Every other index-returning query works on the sorted view, and the index
//! it returns is a view position.

#![forbid(unsafe_code)]

pub mod bisect;
pub mod error;
pub mod exponential;
pub mod jump;
pub mod ordered;
pub mod peak;
pub mod policy;
pub mod probe;
pub mod report;
pub mod rotated;
pub mod scan;
pub mod ternary;
