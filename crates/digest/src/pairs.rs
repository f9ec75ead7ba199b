use envhash_env::EnvSnapshot;
use sha2::{Digest, Sha256};

/// A list of `NAME=value` lines, sorted by name
pub type EnvPairs = Vec<String>;

/// Render a map as sorted `NAME=value` lines.
///
/// Snapshot iteration is already sorted, so the output order is stable
/// across runs and platforms.
pub fn to_pairs(map: &EnvSnapshot) -> EnvPairs {
    map.iter().map(|(k, v)| format!("{k}={v}")).collect()
}

/// Replace every value with the hex SHA-256 of its bytes.
///
/// Used when a map is shown to users (e.g. a dry-run summary of hash
/// inputs) so values never appear in plain text. Empty values stay empty,
/// keeping "set but empty" distinguishable from any real value.
pub fn redact_values(map: &EnvSnapshot) -> EnvSnapshot {
    map.iter()
        .map(|(k, v)| {
            let shown = if v.is_empty() {
                String::new()
            } else {
                format!("{:x}", Sha256::digest(v.as_bytes()))
            };
            (k.clone(), shown)
        })
        .collect()
}

/// Render a map as sorted `NAME=<sha256 of value>` lines.
pub fn to_redacted_pairs(map: &EnvSnapshot) -> EnvPairs {
    to_pairs(&redact_values(map))
}
