use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use envhash_core::{Error, Result};
use envhash_env::{DetailedMap, EnvSnapshot};

use crate::pairs::to_pairs;

/// Accumulates cache-key inputs into a SHA-256 digest
#[derive(Debug)]
pub struct EnvDigest {
    /// Label for debugging purposes
    pub label: String,
    hasher: Sha256,
    /// Metadata about what was hashed
    pub manifest: DigestManifest,
}

/// Manifest containing metadata about what was hashed.
///
/// Records variable names and content markers only, never values, so the
/// manifest itself is safe to log or serialize.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DigestManifest {
    pub label: String,
    pub inputs: Vec<String>,
}

impl EnvDigest {
    /// Create a new digest with a label
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            hasher: Sha256::new(),
            manifest: DigestManifest {
                label: label.to_string(),
                inputs: Vec::new(),
            },
        }
    }

    /// Feed a resolved map into the digest as sorted `NAME=value` pairs.
    ///
    /// Each pair is NUL-terminated; names and values may themselves
    /// contain `=`.
    pub fn add_env(&mut self, map: &EnvSnapshot) {
        for pair in to_pairs(map) {
            self.hasher.update(pair.as_bytes());
            self.hasher.update([0u8]);
        }
        for name in map.keys() {
            self.manifest.inputs.push(format!("env:{name}"));
        }
    }

    /// Feed arbitrary serializable content (a task definition, a command
    /// line) into the digest.
    pub fn add_content<T: Serialize>(&mut self, content: &T) -> Result<()> {
        let serialized = serde_json::to_string(content).map_err(|e| Error::Json {
            message: "failed to serialize content for hashing".to_string(),
            source: e,
        })?;

        self.hasher.update(serialized.as_bytes());
        self.hasher.update([0u8]);
        self.manifest
            .inputs
            .push(format!("content:{}", serialized.len()));

        Ok(())
    }

    /// Finish the digest and return the hex cache-key component.
    pub fn finish(self) -> String {
        let key = format!("{:x}", self.hasher.finalize());
        let prefix = &key[..8];
        debug!(label = %self.label, inputs = self.manifest.inputs.len(), key = %prefix, "finished digest");
        key
    }
}

/// Digest of a resolved map's flattened view, the cache-key contribution
/// of the environment.
pub fn hash_detailed_map(map: &DetailedMap) -> String {
    let mut digest = EnvDigest::new("env");
    digest.add_env(&map.all);
    digest.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(pairs: &[(&str, &str)]) -> EnvSnapshot {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn identical_maps_digest_identically() {
        let map = snapshot(&[("CI", "true"), ("TARGET", "release")]);

        let mut a = EnvDigest::new("a");
        a.add_env(&map);
        let mut b = EnvDigest::new("b");
        b.add_env(&map);

        assert_eq!(a.finish(), b.finish());
    }

    #[test]
    fn value_changes_change_the_digest() {
        let mut a = EnvDigest::new("env");
        a.add_env(&snapshot(&[("CI", "true")]));
        let mut b = EnvDigest::new("env");
        b.add_env(&snapshot(&[("CI", "false")]));

        assert_ne!(a.finish(), b.finish());
    }

    #[test]
    fn pair_boundaries_cannot_collide() {
        // Without a terminator these two would both feed "A=1B=2".
        let mut a = EnvDigest::new("env");
        a.add_env(&snapshot(&[("A", "1"), ("B", "2")]));
        let mut b = EnvDigest::new("env");
        b.add_env(&snapshot(&[("A", "1B=2")]));

        assert_ne!(a.finish(), b.finish());
    }

    #[test]
    fn manifest_records_names_not_values() {
        let mut digest = EnvDigest::new("env");
        digest.add_env(&snapshot(&[("TOKEN", "hunter2")]));

        assert_eq!(digest.manifest.inputs, vec!["env:TOKEN"]);
        let rendered = serde_json::to_string(&digest.manifest).unwrap();
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn content_contributes_to_the_digest() {
        let mut a = EnvDigest::new("env");
        a.add_content(&"cargo build").unwrap();
        let mut b = EnvDigest::new("env");
        b.add_content(&"cargo test").unwrap();

        assert_ne!(a.finish(), b.finish());
    }

    #[test]
    fn digest_is_64_hex_characters() {
        let digest = EnvDigest::new("env");
        let key = digest.finish();
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
