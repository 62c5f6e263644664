use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Channel, ChannelSnapshot, Revision, Version};

/// The last known-good release recorded for one channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChannelEntry {
    pub channel: Channel,
    pub version: Version,
    pub revision: Revision,
}

/// The per-channel registry (`last-known-good-versions.json`).
///
/// One entry per channel, updated in place and never removed. A channel
/// that drops out of a snapshot, or reports no valid build, keeps its
/// previously recorded release.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LastKnownGoodVersions {
    pub timestamp: DateTime<Utc>,
    pub channels: BTreeMap<Channel, ChannelEntry>,
}

impl LastKnownGoodVersions {
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            timestamp: now,
            channels: BTreeMap::new(),
        }
    }

    /// Fold a fresh snapshot into the registry. Returns true when any
    /// channel entry changed; the timestamp is bumped once per run, not
    /// once per channel.
    ///
    /// Re-running with an identical snapshot is a no-op.
    pub fn reconcile(&mut self, snapshot: &ChannelSnapshot, now: DateTime<Utc>) -> bool {
        let mut dirty = false;
        for (channel, release) in &snapshot.channels {
            if !release.ok {
                tracing::debug!(%channel, "channel has no valid build, keeping previous entry");
                continue;
            }
            let unchanged = self.channels.get(channel).is_some_and(|entry| {
                entry.version == release.version && entry.revision == release.revision
            });
            if unchanged {
                continue;
            }
            tracing::debug!(%channel, version = %release.version, "channel advanced");
            self.channels.insert(
                *channel,
                ChannelEntry {
                    channel: *channel,
                    version: release.version.clone(),
                    revision: release.revision,
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
