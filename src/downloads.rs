use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::registry::{
    ChannelEntry, KnownGoodVersions, LastKnownGoodVersions, LatestPatchVersionsPerBuild,
    LatestVersionsPerMilestone, MilestoneEntry, VersionEntry,
};
use crate::{BinaryKind, Channel, DownloadHost, Milestone, Platform, Version};

/// One downloadable archive. Platform-agnostic binaries omit the
/// `platform` field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DownloadEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    pub url: String,
}

/// Download entries per binary kind for one version.
pub type Downloads = BTreeMap<BinaryKind, Vec<DownloadEntry>>;

/// A registry record together with its expanded download matrix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WithDownloads<R> {
    #[serde(flatten)]
    pub record: R,
    pub downloads: Downloads,
}

/// Expand one version into its full download matrix: every published
/// binary kind available at that version, with one entry per supported
/// platform (or a single platform-less entry for agnostic kinds).
pub fn downloads_for(host: &DownloadHost, version: &Version) -> Downloads {
    let mut downloads = Downloads::new();
    for kind in BinaryKind::all() {
        if kind.hidden() {
            continue;
        }
        if let Some(entries) = expand_kind(host, *kind, version) {
            downloads.insert(*kind, entries);
        }
    }
    downloads
}

/// Download entries for a single binary kind, or `None` when the version
/// predates the binary's availability window.
pub fn expand_kind(
    host: &DownloadHost,
    kind: BinaryKind,
    version: &Version,
) -> Option<Vec<DownloadEntry>> {
    if kind.predates_availability(version) {
        return None;
    }
    let entries = match kind.platforms() {
        Some(platforms) => platforms
            .iter()
            .map(|platform| DownloadEntry {
                platform: Some(*platform),
                url: kind.download_url(host, version, Some(*platform)),
            })
            .collect(),
        None => vec![DownloadEntry {
            platform: None,
            url: kind.download_url(host, version, None),
        }],
    };
    Some(entries)
}

fn expand<R: Clone>(record: &R, version: &Version, host: &DownloadHost) -> WithDownloads<R> {
    WithDownloads {
        record: record.clone(),
        downloads: downloads_for(host, version),
    }
}

/// `last-known-good-versions-with-downloads.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LastKnownGoodDownloads {
    pub timestamp: DateTime<Utc>,
    pub channels: BTreeMap<Channel, WithDownloads<ChannelEntry>>,
}

/// `known-good-versions-with-downloads.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KnownGoodDownloads {
    pub timestamp: DateTime<Utc>,
    pub versions: Vec<WithDownloads<VersionEntry>>,
}

/// `latest-versions-per-milestone-with-downloads.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MilestoneDownloads {
    pub timestamp: DateTime<Utc>,
    pub milestones: BTreeMap<Milestone, WithDownloads<MilestoneEntry>>,
}

/// `latest-patch-versions-per-build-with-downloads.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildDownloads {
    pub timestamp: DateTime<Utc>,
    pub builds: BTreeMap<String, WithDownloads<VersionEntry>>,
}

impl LastKnownGoodVersions {
    pub fn with_downloads(&self, host: &DownloadHost) -> LastKnownGoodDownloads {
        LastKnownGoodDownloads {
            timestamp: self.timestamp,
            channels: self
                .channels
                .iter()
                .map(|(channel, entry)| (*channel, expand(entry, &entry.version, host)))
                .collect(),
        }
    }
}

impl KnownGoodVersions {
    pub fn with_downloads(&self, host: &DownloadHost) -> KnownGoodDownloads {
        KnownGoodDownloads {
            timestamp: self.timestamp,
            versions: self
                .versions
                .iter()
                .map(|entry| expand(entry, &entry.version, host))
                .collect(),
        }
    }
}

impl LatestVersionsPerMilestone {
    pub fn with_downloads(&self, host: &DownloadHost) -> MilestoneDownloads {
        MilestoneDownloads {
            timestamp: self.timestamp,
            milestones: self
                .milestones
                .iter()
                .map(|(milestone, entry)| (*milestone, expand(entry, &entry.version, host)))
                .collect(),
        }
    }
}

impl LatestPatchVersionsPerBuild {
    pub fn with_downloads(&self, host: &DownloadHost) -> BuildDownloads {
        BuildDownloads {
            timestamp: self.timestamp,
            builds: self
                .builds
                .iter()
                .map(|(prefix, entry)| (prefix.clone(), expand(entry, &entry.version, host)))
                .collect(),
        }
    }
}
