use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{Result, VersionError};

/// A named release track of the browser.
///
/// Registry documents key their channel mappings by the canonical form
/// ("Stable", "Beta", ...); parsing accepts either case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Channel {
    /// The stable version of the browser.
    Stable,
    /// The beta version of the browser.
    Beta,
    /// The dev version of the browser.
    Dev,
    /// The canary version of the browser.
    Canary,
}

impl Channel {
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::Beta => "Beta",
            Self::Dev => "Dev",
            Self::Canary => "Canary",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable => write!(f, "stable"),
            Self::Beta => write!(f, "beta"),
            Self::Dev => write!(f, "dev"),
            Self::Canary => write!(f, "canary"),
        }
    }
}

impl FromStr for Channel {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stable" | "Stable" => Ok(Self::Stable),
            "beta" | "Beta" => Ok(Self::Beta),
            "dev" | "Dev" => Ok(Self::Dev),
            "canary" | "Canary" => Ok(Self::Canary),
            _ => Err(VersionError::InvalidChannel(s.to_string())),
        }
    }
}

impl TryFrom<String> for Channel {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Channel> for String {
    fn from(value: Channel) -> Self {
        value.as_key().to_string()
    }
}
