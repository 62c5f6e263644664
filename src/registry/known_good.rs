use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{LastKnownGoodVersions, VersionEntry};
use crate::Version;

/// The flat, deduplicated catalog of every known-good version
/// (`known-good-versions.json`).
///
/// Membership is keyed by version string; the sequence is kept sorted
/// ascending under the numeric version order after every mutation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KnownGoodVersions {
    pub timestamp: DateTime<Utc>,
    pub versions: Vec<VersionEntry>,
}

impl KnownGoodVersions {
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            timestamp: now,
            versions: Vec::new(),
        }
    }

    pub fn contains(&self, version: &Version) -> bool {
        self.versions.iter().any(|entry| entry.version == *version)
    }

    /// Append every channel release not yet in the catalog. Returns true
    /// when anything was inserted, in which case the sequence has been
    /// re-sorted and the timestamp bumped once.
    pub fn merge_channels(&mut self, latest: &LastKnownGoodVersions, now: DateTime<Utc>) -> bool {
        let mut known: BTreeSet<Version> = self
            .versions
            .iter()
            .map(|entry| entry.version.clone())
            .collect();
        let mut dirty = false;
        for entry in latest.channels.values() {
            if known.contains(&entry.version) {
                continue;
            }
            tracing::debug!(version = %entry.version, "catalog gained a version");
            known.insert(entry.version.clone());
            self.versions.push(VersionEntry {
                version: entry.version.clone(),
                revision: entry.revision,
            });
            dirty = true;
        }
        if dirty {
            // Ties cannot occur (membership precedes insertion) but the
            // comparator still reports them as Equal, keeping the sort
            // total and the stable order well defined.
            self.versions.sort_by(|a, b| a.version.cmp(&b.version));
            self.timestamp = now;
        }
        dirty
    }
}
