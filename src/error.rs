use thiserror::Error;

use crate::store::StoreError;
use crate::version::VersionError;

pub type Result<T, E = DashboardError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// A persisted registry could not be loaded. The run aborts before
    /// anything has been written.
    #[error("Failed to load a persisted registry")]
    Load(#[source] StoreError),

    /// A registry or expanded document could not be persisted.
    #[error("Failed to persist an output document")]
    Persist(#[source] StoreError),

    /// A version string did not match the dotted-integer shape.
    #[error("Malformed version")]
    Version(#[from] VersionError),
}
