//! Deterministic hashing of resolved environment views.
//!
//! The selection resolver guarantees deterministic *content*; this crate
//! turns that content into bytes: sorted `NAME=value` pair lists and a
//! SHA-256 accumulator that produces the hex cache-key component.

pub mod hasher;
pub mod pairs;

pub use hasher::{hash_detailed_map, DigestManifest, EnvDigest};
pub use pairs::{redact_values, to_pairs, to_redacted_pairs, EnvPairs};
