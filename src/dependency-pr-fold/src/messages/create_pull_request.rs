//! The `create_pull_request` message.

use super::{dependency_group, DependencyFile, ReportedDependency};
use serde::{Deserialize, Serialize};

/// A request to open one pull request for a set of dependency updates.
///
/// Field names are kebab-case on the wire. `dependency-group` uses the
/// two-shape encoding described in [`dependency_group`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CreatePullRequest {
    /// Dependencies bumped by this pull request.
    pub dependencies: Vec<ReportedDependency>,

    /// Full replacement contents of every file the update touches.
    pub updated_dependency_files: Vec<DependencyFile>,

    /// Commit the change is based on.
    pub base_commit_sha: String,

    /// Commit message for the change.
    pub commit_message: String,

    /// Pull request title.
    pub pr_title: String,

    /// Pull request body.
    pub pr_body: String,

    /// Name of the dependency group this update belongs to, if any.
    #[serde(with = "dependency_group")]
    pub dependency_group: Option<String>,
}
