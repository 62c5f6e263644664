pub use self::downloads::{
    downloads_for, expand_kind, BuildDownloads, DownloadEntry, Downloads, KnownGoodDownloads,
    LastKnownGoodDownloads, MilestoneDownloads, WithDownloads,
};
pub use self::error::DashboardError;
pub use self::host::DownloadHost;
pub use self::kind::BinaryKind;
pub use self::platform::Platform;
pub use self::refresh::{Refresh, RefreshOptions, RefreshOptionsBuilder, RefreshSummary};
pub use self::registry::{
    ChannelEntry, KnownGoodVersions, LastKnownGoodVersions, LatestPatchVersionsPerBuild,
    LatestVersionsPerMilestone, MilestoneEntry, VersionEntry,
};
pub use self::snapshot::{ChannelRelease, ChannelSnapshot};
pub use self::version::{Channel, Milestone, Revision, Version, VersionError};

mod downloads;
mod error;
mod host;
mod kind;
mod platform;
mod refresh;
mod registry;
mod snapshot;
pub mod store;
mod version;
