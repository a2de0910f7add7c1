//! Dependencies reported by a pull request message.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A dependency bumped by a pull request, with every requirement that led to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedDependency {
    /// Dependency identifier. Compared case-insensitively.
    pub name: String,

    /// Resolved version. Compared as an exact string.
    pub version: String,

    /// Places that declared the dependency.
    pub requirements: Vec<ReportedRequirement>,
}

/// A single requirement declaration: the constraint and the file it lives in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportedRequirement {
    /// Version constraint as written.
    pub requirement: String,

    /// Path of the declaring file.
    pub file: String,
}

/// Identity of a dependency within a message: lowercased name plus exact version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyKey {
    name: String,
    version: String,
}

impl ReportedDependency {
    /// Returns the identity used for equivalence and merging.
    ///
    /// `1.0` and `1.0.0` are different keys.
    #[must_use]
    pub fn key(&self) -> DependencyKey {
        DependencyKey {
            name: self.name.to_lowercase(),
            version: self.version.clone(),
        }
    }
}

impl fmt::Display for DependencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}
