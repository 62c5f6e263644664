use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Channel, Revision, Version};

/// One observed release per channel, as reported by the upstream source of
/// truth at the start of a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChannelRelease {
    pub channel: Channel,
    pub version: Version,
    pub revision: Revision,
    /// Whether the channel currently has a valid, available build. Records
    /// with `ok == false` are excluded from all downstream processing.
    pub ok: bool,
}

/// The full incoming snapshot, one record per channel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelSnapshot {
    pub channels: BTreeMap<Channel, ChannelRelease>,
}
