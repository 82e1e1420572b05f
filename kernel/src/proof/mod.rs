//! Proof module: canonical JSON and content hashing of carrier values.
//!
//! Depends on `carrier`. Nothing in `carrier` depends on `proof`.

pub mod canon;
pub mod hash;
