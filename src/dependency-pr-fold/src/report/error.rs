//! Report formatting error types.

use thiserror::Error;

/// Errors that can occur while building a message report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A dependency version can't be ordered.
    #[error("Dependency '{name}' has invalid version '{version}': {source}")]
    InvalidVersion {
        name: String,
        version: String,
        #[source]
        source: VersionError,
    },
}

/// Errors that can occur while parsing a package version.
#[derive(Debug, Error)]
pub enum VersionError {
    /// The numeric parts or labels are not valid SemVer.
    #[error(transparent)]
    Semver(#[from] semver::Error),

    /// The version does not have the shape of a package version.
    #[error("{reason}")]
    Malformed { reason: String },
}
