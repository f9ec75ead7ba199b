use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, trace};

use envhash_core::Result;

use crate::pattern::Specification;
use crate::snapshot::EnvSnapshot;

/// Selected variables broken down by how they were selected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BySource {
    /// Selected because their exact name was listed.
    pub explicit: EnvSnapshot,
    /// Selected because they matched a wildcard prefix rule.
    pub matching: EnvSnapshot,
}

/// The resolved view of the environment that participates in hashing.
///
/// `all` is the flattened hash input; `by_source` partitions the same
/// variables for summaries. Each selected name appears in exactly one of
/// the two partitions, classified by the last specification kind that
/// selected it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedMap {
    pub all: EnvSnapshot,
    pub by_source: BySource,
}

impl DetailedMap {
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Resolve which snapshot variables participate in hashing.
///
/// Specifications apply left to right; a later specification overrides the
/// outcome of earlier ones for any name both touch. Negated specifications
/// remove their matches from the selection, idempotently. A malformed
/// specification aborts the whole resolution; no partial map is returned.
///
/// An empty specification list or an empty snapshot resolves to an empty
/// map, never an error.
pub fn resolve(snapshot: &EnvSnapshot, specs: &[String]) -> Result<DetailedMap> {
    let mut selected = EnvSnapshot::new();
    let mut explicit_names: BTreeSet<String> = BTreeSet::new();
    let mut matching_names: BTreeSet<String> = BTreeSet::new();

    for raw in specs {
        let spec = Specification::parse(raw)?;
        let matched: Vec<&String> = snapshot.keys().filter(|name| spec.matches(name)).collect();

        trace!(spec = %raw, matched = matched.len(), "applying specification");

        if spec.negated {
            for name in matched {
                selected.remove(name);
                explicit_names.remove(name);
                matching_names.remove(name);
            }
            continue;
        }

        for name in matched {
            if let Some(value) = snapshot.get(name) {
                selected.insert(name.clone(), value.clone());
            }
            if spec.is_exact() {
                // Exact wins over a prior wildcard for the same name.
                matching_names.remove(name);
                explicit_names.insert(name.clone());
            } else if !explicit_names.contains(name) {
                matching_names.insert(name.clone());
            }
        }
    }

    let by_source = BySource {
        explicit: collect_named(&selected, &explicit_names),
        matching: collect_named(&selected, &matching_names),
    };

    debug!(
        total = snapshot.len(),
        selected = selected.len(),
        explicit = by_source.explicit.len(),
        matching = by_source.matching.len(),
        "resolved hashable environment"
    );

    Ok(DetailedMap {
        all: selected,
        by_source,
    })
}

fn collect_named(selected: &EnvSnapshot, names: &BTreeSet<String>) -> EnvSnapshot {
    names
        .iter()
        .filter_map(|name| {
            selected
                .get(name)
                .map(|value| (name.clone(), value.clone()))
        })
        .collect()
}
