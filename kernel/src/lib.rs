//! Ordinal Kernel: the record carrier and proof layer under Ordinal Search.
//!
//! # API Surface
//!
//! - [`carrier::record::RecordV1`] -- a keyed record (`i64` key, `String` value)
//! - [`carrier::collection::CollectionV1`] -- the owned, insertion-ordered backing store
//! - [`carrier::view::SortedViewV1`] -- a stable, key-sorted snapshot of a collection
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 content addressing
//! - [`fixture`] -- canonical JSON fixture files for collections
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `proof` ← `fixture`
//!
//! One-way only. No cycles. `carrier` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod fixture;
pub mod proof;
