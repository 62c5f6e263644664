use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{Result, VersionError};

/// A major-version milestone of the browser (e.g. 133), grouping many
/// minor and patch releases.
///
/// Serialized as the string form of the number, matching the registry
/// documents' milestone keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Milestone(u32);

impl Milestone {
    pub const fn new(milestone: u32) -> Self {
        Self(milestone)
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Milestone {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let milestone = s
            .parse::<u32>()
            .map_err(|_| VersionError::InvalidMilestone(s.to_string()))?;
        Ok(Milestone(milestone))
    }
}

impl TryFrom<String> for Milestone {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<u32> for Milestone {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Milestone> for String {
    fn from(value: Milestone) -> Self {
        value.to_string()
    }
}
