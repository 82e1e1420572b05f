//! Carrier module: `RecordV1`, `CollectionV1`, and the sorted-view boundary.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod collection;
pub mod record;
pub mod view;
