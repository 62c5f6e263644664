use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::LastKnownGoodVersions;
use crate::{Milestone, Revision, Version};

/// The latest release recorded for one milestone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MilestoneEntry {
    pub milestone: Milestone,
    pub version: Version,
    pub revision: Revision,
}

/// The per-milestone registry (`latest-versions-per-milestone.json`).
///
/// For each milestone the stored version is the maximum ever observed;
/// an older observation never regresses it, neither within one snapshot
/// (channels are visited in arbitrary order) nor across runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatestVersionsPerMilestone {
    pub timestamp: DateTime<Utc>,
    pub milestones: BTreeMap<Milestone, MilestoneEntry>,
}

impl LatestVersionsPerMilestone {
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            timestamp: now,
            milestones: BTreeMap::new(),
        }
    }

    /// Record each channel release under its milestone, overwriting an
    /// existing entry only when the incoming version is strictly newer.
    /// Returns true when any milestone changed; the timestamp is bumped
    /// once per run.
    pub fn absorb(&mut self, latest: &LastKnownGoodVersions, now: DateTime<Utc>) -> bool {
        let mut dirty = false;
        for entry in latest.channels.values() {
            let milestone = entry.version.milestone();
            let superseded = self
                .milestones
                .get(&milestone)
                .is_none_or(|existing| existing.version.is_older(&entry.version));
            if !superseded {
                continue;
            }
            tracing::debug!(%milestone, version = %entry.version, "milestone advanced");
            self.milestones.insert(
                milestone,
                MilestoneEntry {
                    milestone,
                    version: entry.version.clone(),
                    revision: entry.revision,
                },
            );
            dirty = true;
        }
        if dirty {
            self.timestamp = now;
        }
        dirty
    }
}
