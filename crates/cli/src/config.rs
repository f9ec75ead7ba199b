use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use envhash_core::{Error, Result};

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG: &str = "envhash.json";

/// On-disk configuration for envhash.
///
/// ```json
/// {
///   "env": ["CI", "CARGO_*", "!CARGO_TERM_COLOR"]
/// }
/// ```
///
/// `env` is the ordered specification list; order is significant, later
/// entries override earlier ones for any name both touch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Ordered include/exclude specifications applied to the snapshot
    #[serde(default)]
    pub env: Vec<String>,
}

impl Config {
    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::file_system(path.to_path_buf(), "read", e))?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }
}
