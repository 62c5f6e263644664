use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{KnownGoodVersions, VersionEntry};

/// The per-build-track view (`latest-patch-versions-per-build.json`).
///
/// Derived fresh from the full catalog each run rather than merged
/// incrementally, so it is correct regardless of history. It is a pure
/// view: the catalog's timestamp is carried verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatestPatchVersionsPerBuild {
    pub timestamp: DateTime<Utc>,
    pub builds: BTreeMap<String, VersionEntry>,
}

impl LatestPatchVersionsPerBuild {
    /// Reduce the catalog to the highest-patch entry per build prefix.
    /// The first entry wins ties; duplicate versions cannot occur in a
    /// valid catalog.
    pub fn reduce(catalog: &KnownGoodVersions) -> Self {
        let mut builds: BTreeMap<String, VersionEntry> = BTreeMap::new();
        for entry in &catalog.versions {
            let prefix = entry.version.build_prefix();
            let superseded = builds
                .get(&prefix)
                .is_none_or(|existing| existing.version.is_older(&entry.version));
            if superseded {
                builds.insert(prefix, entry.clone());
            }
        }
        Self {
            timestamp: catalog.timestamp,
            builds,
        }
    }
}
