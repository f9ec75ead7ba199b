//! Core error taxonomy for envhash.
//!
//! Every fallible operation in the workspace returns the [`Result`] alias
//! defined here. The resolution path itself has a single failure mode, a
//! malformed specification string ([`Error::Specification`]); the remaining
//! variants exist for the surfaces around it (configuration files, JSON
//! snapshots).

pub mod errors;

pub use errors::{Error, Result};
