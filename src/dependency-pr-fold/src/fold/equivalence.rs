//! Equivalence of pull request messages.

use crate::messages::{CreatePullRequest, DependencyKey};

/// The parts of a message that decide whether two messages describe the same
/// pull request.
///
/// Dependencies and files are held as sorted, deduplicated sets so that their
/// order and repetition inside the message do not matter. Titles, bodies and
/// commit messages are not part of the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalenceKey<'a> {
    base_commit_sha: &'a str,
    dependency_group: Option<&'a str>,
    dependencies: Vec<DependencyKey>,
    files: Vec<(String, &'a str)>,
}

impl<'a> EquivalenceKey<'a> {
    /// Builds the key for a message.
    #[must_use]
    pub fn new(message: &'a CreatePullRequest) -> Self {
        let mut dependencies: Vec<DependencyKey> =
            message.dependencies.iter().map(|d| d.key()).collect();
        dependencies.sort();
        dependencies.dedup();

        let mut files: Vec<(String, &'a str)> = message
            .updated_dependency_files
            .iter()
            .map(|f| (f.path(), f.content.as_str()))
            .collect();
        files.sort();
        files.dedup();

        Self {
            base_commit_sha: &message.base_commit_sha,
            dependency_group: message.dependency_group.as_deref(),
            dependencies,
            files,
        }
    }
}

impl CreatePullRequest {
    /// Returns true if both messages would open the same pull request.
    ///
    /// Commit sha, group, the set of dependency identities and the set of
    /// `(path, content)` file changes must all match.
    #[must_use]
    pub fn is_equivalent_to(&self, other: &CreatePullRequest) -> bool {
        if self.base_commit_sha != other.base_commit_sha
            || self.dependency_group != other.dependency_group
        {
            return false;
        }

        EquivalenceKey::new(self) == EquivalenceKey::new(other)
    }
}
