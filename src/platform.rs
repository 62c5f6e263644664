use std::fmt;

use serde::{Deserialize, Serialize};

/// List of platforms with pre-built browser binaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "linux64")]
    Linux,
    #[serde(rename = "mac-x64")]
    Mac,
    #[serde(rename = "mac-arm64")]
    MacArm,
    #[serde(rename = "win32")]
    Win32,
    #[serde(rename = "win64")]
    Win64,
}

impl Platform {
    /// List of all platforms, in publication order.
    pub fn all() -> &'static [Platform] {
        &[
            Self::Linux,
            Self::Mac,
            Self::MacArm,
            Self::Win32,
            Self::Win64,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linux => "linux64",
            Self::Mac => "mac-x64",
            Self::MacArm => "mac-arm64",
            Self::Win32 => "win32",
            Self::Win64 => "win64",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
