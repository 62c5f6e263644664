use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{DownloadHost, Platform, Version};

/// The binary kinds published for each known-good version.
///
/// - **Chrome**: the full browser build.
/// - **ChromeDriver**: the WebDriver binary, shipped from M115 onwards.
/// - **ChromeHeadlessShell**: headless-only shell, shipped from M120 onwards.
/// - **Mojojs**: synthetic bindings archive; never part of the published
///   download manifests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BinaryKind {
    #[serde(rename = "chrome")]
    Chrome,
    #[serde(rename = "chromedriver")]
    ChromeDriver,
    #[serde(rename = "chrome-headless-shell")]
    ChromeHeadlessShell,
    #[serde(rename = "mojojs")]
    Mojojs,
}

impl BinaryKind {
    /// All known binary kinds, hidden ones included.
    pub fn all() -> &'static [BinaryKind] {
        &[
            Self::Chrome,
            Self::ChromeDriver,
            Self::ChromeHeadlessShell,
            Self::Mojojs,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::ChromeDriver => "chromedriver",
            Self::ChromeHeadlessShell => "chrome-headless-shell",
            Self::Mojojs => "mojojs",
        }
    }

    /// Kinds filtered out of every published manifest.
    pub fn hidden(&self) -> bool {
        matches!(self, Self::Mojojs)
    }

    /// The platforms this binary is built for, or `None` when a single
    /// platform-agnostic archive is published instead.
    pub fn platforms(&self) -> Option<&'static [Platform]> {
        match self {
            Self::Mojojs => None,
            _ => Some(Platform::all()),
        }
    }

    /// The first release that shipped this binary, when it postdates the
    /// catalog's oldest entries.
    pub fn first_available(&self) -> Option<Version> {
        match self {
            Self::ChromeDriver => Some(Version::from_parts(&[115, 0, 5763, 0])),
            Self::ChromeHeadlessShell => Some(Version::from_parts(&[120, 0, 6098, 0])),
            _ => None,
        }
    }

    /// True iff `version` is strictly older than the first release that
    /// shipped this binary.
    pub fn predates_availability(&self, version: &Version) -> bool {
        match self.first_available() {
            Some(first) => version.is_older(&first),
            None => false,
        }
    }

    /// Download URL for one archive of this binary.
    ///
    /// Pure string template over host, version and platform; `platform` is
    /// `None` for platform-agnostic kinds.
    pub fn download_url(
        &self,
        host: &DownloadHost,
        version: &Version,
        platform: Option<Platform>,
    ) -> String {
        match platform {
            Some(platform) => format!(
                "{host}/chrome-for-testing-public/{version}/{platform}/{archive}.zip",
                host = host.object,
                archive = self.archive(platform),
            ),
            None => format!(
                "{host}/chrome-for-testing-public/{version}/{label}.zip",
                host = host.object,
                label = self.label(),
            ),
        }
    }

    fn archive(&self, platform: Platform) -> String {
        format!("{}-{}", self.label(), platform)
    }
}

impl fmt::Display for BinaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
