use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

/// The set of environment variable name/value pairs visible at the moment
/// hashing begins.
///
/// Backed by a `BTreeMap` so iteration is always sorted by name; everything
/// derived from a snapshot is deterministic across runs without extra
/// sorting. Names are opaque byte strings, never normalized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvSnapshot(BTreeMap<String, String>);

impl EnvSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process environment.
    ///
    /// This is the only place envhash reads ambient state. The returned
    /// value is a plain owned map; resolving against it later cannot be
    /// affected by concurrent `setenv` calls.
    pub fn capture() -> Self {
        EnvSnapshot(std::env::vars().collect())
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }

    /// Layer `other` over `self`, overwriting values that already exist.
    pub fn merge(&mut self, other: &EnvSnapshot) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Remove every key that is present in `other`.
    pub fn subtract(&mut self, other: &EnvSnapshot) {
        for key in other.0.keys() {
            self.0.remove(key);
        }
    }
}

impl From<BTreeMap<String, String>> for EnvSnapshot {
    fn from(map: BTreeMap<String, String>) -> Self {
        EnvSnapshot(map)
    }
}

impl FromIterator<(String, String)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        EnvSnapshot(iter.into_iter().collect())
    }
}

impl Deref for EnvSnapshot {
    type Target = BTreeMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for EnvSnapshot {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
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
    fn merge_overwrites_existing_values() {
        let mut base = snapshot(&[("PATH", "/usr/bin"), ("CI", "false")]);
        let task = snapshot(&[("CI", "true"), ("TARGET", "release")]);

        base.merge(&task);

        assert_eq!(base.get("CI").map(String::as_str), Some("true"));
        assert_eq!(base.get("PATH").map(String::as_str), Some("/usr/bin"));
        assert_eq!(base.get("TARGET").map(String::as_str), Some("release"));
    }

    #[test]
    fn subtract_removes_only_named_keys() {
        let mut base = snapshot(&[("PATH", "/usr/bin"), ("HOME", "/root")]);
        let drop = snapshot(&[("HOME", "ignored"), ("MISSING", "ignored")]);

        base.subtract(&drop);

        assert_eq!(base.len(), 1);
        assert!(base.contains_key("PATH"));
    }

    #[test]
    fn iteration_is_sorted_by_name() {
        let snap = snapshot(&[("ZED", "1"), ("ALPHA", "2"), ("MID", "3")]);
        let names: Vec<&str> = snap.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["ALPHA", "MID", "ZED"]);
    }

    #[test]
    fn serializes_as_a_plain_json_object() {
        let snap = snapshot(&[("CI", "true")]);
        let json = serde_json::to_string(&snap).unwrap();
        assert_eq!(json, r#"{"CI":"true"}"#);

        let back: EnvSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
