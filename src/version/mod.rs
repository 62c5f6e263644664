pub use self::channel::Channel;
use self::error::Result;
pub use self::error::VersionError;
pub use self::milestone::Milestone;
pub use self::revision::Revision;
pub use self::version::Version;

mod channel;
mod error;
mod milestone;
mod revision;
#[allow(clippy::module_inception)]
mod version;
