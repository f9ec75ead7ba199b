//! Environment snapshotting and cache-key selection for envhash
//!
//! This crate decides which environment variables are allowed to influence
//! a task's cache key. An immutable [`EnvSnapshot`] captured at execution
//! start is run through an ordered list of include/exclude specifications
//! (`"CI"`, `"CARGO_*"`, `"!CARGO_TERM_COLOR"`), producing a
//! [`DetailedMap`]: the flattened hash input plus a breakdown of how each
//! variable was selected.

pub mod pattern;
pub mod resolve;
pub mod snapshot;

pub use pattern::{Pattern, Specification};
pub use resolve::{resolve, BySource, DetailedMap};
pub use snapshot::EnvSnapshot;
