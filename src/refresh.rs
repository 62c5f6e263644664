use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use futures::future;

use crate::downloads::{downloads_for, WithDownloads};
use crate::error::{DashboardError, Result};
use crate::registry::{
    KnownGoodVersions, LastKnownGoodVersions, LatestPatchVersionsPerBuild,
    LatestVersionsPerMilestone,
};
use crate::store::{self, StoreError};
use crate::{ChannelSnapshot, DownloadHost};

const LAST_KNOWN_GOOD: &str = "last-known-good-versions.json";
const LAST_KNOWN_GOOD_DOWNLOADS: &str = "last-known-good-versions-with-downloads.json";
const KNOWN_GOOD: &str = "known-good-versions.json";
const KNOWN_GOOD_DOWNLOADS: &str = "known-good-versions-with-downloads.json";
const MILESTONES: &str = "latest-versions-per-milestone.json";
const MILESTONES_DOWNLOADS: &str = "latest-versions-per-milestone-with-downloads.json";
const BUILDS: &str = "latest-patch-versions-per-build.json";
const BUILDS_DOWNLOADS: &str = "latest-patch-versions-per-build-with-downloads.json";

/// Directory under the data dir holding one manifest file per catalog
/// version.
const MANIFEST_DIR: &str = "versions";

/// Options for a [`Refresh`].
pub struct RefreshOptions {
    /// Directory holding the persisted registry documents.
    ///
    /// defaults to the current directory
    pub(crate) data_dir: PathBuf,

    /// Host used when building download URLs.
    ///
    /// defaults to the production object store
    pub(crate) host: DownloadHost,
}

impl RefreshOptions {
    pub fn builder() -> RefreshOptionsBuilder {
        RefreshOptionsBuilder::default()
    }
}

impl Default for RefreshOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Default)]
pub struct RefreshOptionsBuilder {
    data_dir: Option<PathBuf>,
    host: Option<DownloadHost>,
}

impl RefreshOptionsBuilder {
    pub fn with_data_dir<T: Into<PathBuf>>(mut self, data_dir: T) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    pub fn with_host<T: Into<DownloadHost>>(mut self, host: T) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn build(self) -> RefreshOptions {
        RefreshOptions {
            data_dir: self.data_dir.unwrap_or_else(|| PathBuf::from(".")),
            host: self.host.unwrap_or_default(),
        }
    }
}

/// What one refresh pass changed.
#[derive(Clone, Copy, Debug, Default)]
pub struct RefreshSummary {
    pub channels_updated: bool,
    pub catalog_updated: bool,
    pub milestones_updated: bool,
    pub manifests_written: usize,
    pub manifests_failed: usize,
}

/// A single-pass registry refresh.
///
/// One run is a linear pipeline: reconcile the channel registry against
/// the snapshot, merge the flat catalog, update the milestone index,
/// reduce the build tracks, then expand and persist everything. Each
/// step is idempotent, so re-running with the same snapshot changes
/// nothing.
pub struct Refresh {
    data_dir: PathBuf,
    host: DownloadHost,
}

impl Refresh {
    pub fn new(options: RefreshOptions) -> Self {
        Self {
            data_dir: options.data_dir,
            host: options.host,
        }
    }

    /// Seed empty registries into the data directory, creating it if
    /// needed. Existing documents are left untouched.
    pub async fn init(&self, now: DateTime<Utc>) -> Result<()> {
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|source| {
                DashboardError::Persist(StoreError::Write {
                    path: self.data_dir.clone(),
                    source,
                })
            })?;
        self.seed(LAST_KNOWN_GOOD, &LastKnownGoodVersions::empty(now))
            .await?;
        self.seed(KNOWN_GOOD, &KnownGoodVersions::empty(now)).await?;
        self.seed(MILESTONES, &LatestVersionsPerMilestone::empty(now))
            .await?;
        Ok(())
    }

    async fn seed<T: serde::Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let path = self.path(name);
        if let Ok(true) = tokio::fs::try_exists(&path).await {
            return Ok(());
        }
        store::write_document(&path, value)
            .await
            .map_err(DashboardError::Persist)
    }

    /// Run one refresh pass against `snapshot`.
    ///
    /// Registries of record are rewritten only when dirty; the derived
    /// build-track view, the expanded `*-with-downloads` documents and
    /// the per-version manifests are rewritten every run. Manifest
    /// writes fan out concurrently and fail independently: a failed file
    /// is logged and counted, never aborting its siblings.
    pub async fn run(
        &self,
        snapshot: &ChannelSnapshot,
        now: DateTime<Utc>,
    ) -> Result<RefreshSummary> {
        let mut last_known_good: LastKnownGoodVersions =
            self.load(LAST_KNOWN_GOOD).await?;
        let mut known_good: KnownGoodVersions = self.load(KNOWN_GOOD).await?;
        let mut milestones: LatestVersionsPerMilestone = self.load(MILESTONES).await?;

        let channels_updated = last_known_good.reconcile(snapshot, now);
        let catalog_updated = known_good.merge_channels(&last_known_good, now);
        let milestones_updated = milestones.absorb(&last_known_good, now);
        let builds = LatestPatchVersionsPerBuild::reduce(&known_good);

        if channels_updated {
            self.persist(LAST_KNOWN_GOOD, &last_known_good).await?;
        }
        if catalog_updated {
            self.persist(KNOWN_GOOD, &known_good).await?;
        }
        if milestones_updated {
            self.persist(MILESTONES, &milestones).await?;
        }
        self.persist(BUILDS, &builds).await?;

        self.persist(
            LAST_KNOWN_GOOD_DOWNLOADS,
            &last_known_good.with_downloads(&self.host),
        )
        .await?;
        self.persist(KNOWN_GOOD_DOWNLOADS, &known_good.with_downloads(&self.host))
            .await?;
        self.persist(MILESTONES_DOWNLOADS, &milestones.with_downloads(&self.host))
            .await?;
        self.persist(BUILDS_DOWNLOADS, &builds.with_downloads(&self.host))
            .await?;

        let (manifests_written, manifests_failed) =
            self.write_version_manifests(&known_good).await?;

        Ok(RefreshSummary {
            channels_updated,
            catalog_updated,
            milestones_updated,
            manifests_written,
            manifests_failed,
        })
    }

    /// One manifest file per catalog entry, written concurrently. The
    /// files are non-overlapping pure functions of immutable data, so
    /// ordering between them is irrelevant and failures are independent.
    async fn write_version_manifests(
        &self,
        known_good: &KnownGoodVersions,
    ) -> Result<(usize, usize)> {
        let manifest_dir = self.data_dir.join(MANIFEST_DIR);
        tokio::fs::create_dir_all(&manifest_dir)
            .await
            .map_err(|source| {
                DashboardError::Persist(StoreError::Write {
                    path: manifest_dir.clone(),
                    source,
                })
            })?;

        let writes = known_good.versions.iter().map(|entry| {
            let path = manifest_dir.join(format!("{}.json", entry.version));
            let manifest = WithDownloads {
                record: entry.clone(),
                downloads: downloads_for(&self.host, &entry.version),
            };
            async move { store::write_document(&path, &manifest).await }
        });

        let mut written = 0;
        let mut failed = 0;
        for result in future::join_all(writes).await {
            match result {
                Ok(()) => written += 1,
                Err(err) => {
                    failed += 1;
                    tracing::warn!(error = %err, "version manifest write failed");
                }
            }
        }
        Ok((written, failed))
    }

    async fn load<T: serde::de::DeserializeOwned>(&self, name: &str) -> Result<T> {
        store::read_document(&self.path(name))
            .await
            .map_err(DashboardError::Load)
    }

    async fn persist<T: serde::Serialize>(&self, name: &str, value: &T) -> Result<()> {
        store::write_document(&self.path(name), value)
            .await
            .map_err(DashboardError::Persist)
    }

    fn path(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
