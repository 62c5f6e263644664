use std::cmp::Ordering;
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{Milestone, Result, VersionError};

/// A parsed Chrome version (e.g. "133.0.6943.126").
///
/// Versions carry three or four dot-separated numeric components and are
/// parsed once at the boundary; everything downstream compares and copies
/// them only.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    parts: Vec<u32>,
}

impl Version {
    pub(crate) fn from_parts(parts: &[u32]) -> Self {
        debug_assert!((3..=4).contains(&parts.len()));
        Self {
            parts: parts.to_vec(),
        }
    }

    /// True iff `self` denotes a strictly earlier release than `other`.
    pub fn is_older(&self, other: &Version) -> bool {
        self.cmp(other) == Ordering::Less
    }

    /// The major-version milestone (first component).
    pub fn milestone(&self) -> Milestone {
        Milestone::new(self.parts[0])
    }

    /// The version string with its trailing patch component stripped,
    /// identifying the minor build line (e.g. "120.0.6099" for
    /// "120.0.6099.5").
    pub fn build_prefix(&self) -> String {
        self.parts[..self.parts.len() - 1]
            .iter()
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
            .join(".")
    }

    pub fn components(&self) -> &[u32] {
        &self.parts
    }
}

/// Numeric, component-wise order: the first differing component decides.
/// Never lexicographic string order, which breaks once a component reaches
/// two digits. On an equal common prefix the version with fewer components
/// orders first.
impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.parts.iter().zip(other.parts.iter()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }
        self.parts.len().cmp(&other.parts.len())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = self.parts.iter();
        if let Some(first) = parts.next() {
            write!(f, "{first}")?;
        }
        for part in parts {
            write!(f, ".{part}")?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split('.')
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| VersionError::InvalidVersion(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if !(3..=4).contains(&parts.len()) {
            return Err(VersionError::InvalidVersion(s.to_string()));
        }
        Ok(Version { parts })
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Version> for String {
    fn from(value: Version) -> Self {
        value.to_string()
    }
}
