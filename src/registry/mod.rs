use serde::{Deserialize, Serialize};

pub use self::builds::LatestPatchVersionsPerBuild;
pub use self::known_good::KnownGoodVersions;
pub use self::last_known_good::{ChannelEntry, LastKnownGoodVersions};
pub use self::milestones::{LatestVersionsPerMilestone, MilestoneEntry};

use crate::{Revision, Version};

mod builds;
mod known_good;
mod last_known_good;
mod milestones;

/// A known-good version together with its source revision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub version: Version,
    pub revision: Revision,
}
