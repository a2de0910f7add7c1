//! Merging of equivalent pull request messages.

use crate::messages::{CreatePullRequest, ReportedDependency, ReportedRequirement};
use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

impl CreatePullRequest {
    /// Merges the dependencies of `other` into a copy of `self`.
    ///
    /// Dependencies sharing a name (case-insensitive) and version get the
    /// union of their requirements, with `self`'s requirements first.
    /// Dependencies only present in `other` are appended as they are. Every
    /// other field comes from `self`.
    ///
    /// Intended for messages where [`CreatePullRequest::is_equivalent_to`]
    /// holds.
    #[must_use]
    pub fn merged_with(&self, other: &CreatePullRequest) -> CreatePullRequest {
        CreatePullRequest {
            dependencies: merge_dependencies(self.dependencies.iter().chain(&other.dependencies)),
            ..self.without_dependencies()
        }
    }

    /// Collapses dependencies that share a key into one entry each.
    ///
    /// Messages without repeated keys come back unchanged.
    #[must_use]
    pub fn with_unique_dependencies(self) -> CreatePullRequest {
        let dependencies = merge_dependencies(self.dependencies.iter());
        CreatePullRequest {
            dependencies,
            ..self
        }
    }

    fn without_dependencies(&self) -> CreatePullRequest {
        CreatePullRequest {
            dependencies: Vec::new(),
            updated_dependency_files: self.updated_dependency_files.clone(),
            base_commit_sha: self.base_commit_sha.clone(),
            commit_message: self.commit_message.clone(),
            pr_title: self.pr_title.clone(),
            pr_body: self.pr_body.clone(),
            dependency_group: self.dependency_group.clone(),
        }
    }
}

/// Keys dependencies in first-seen order, unioning requirements on repeats.
fn merge_dependencies<'a>(
    dependencies: impl Iterator<Item = &'a ReportedDependency>,
) -> Vec<ReportedDependency> {
    let mut merged: IndexMap<_, ReportedDependency> = IndexMap::new();

    for dependency in dependencies {
        match merged.entry(dependency.key()) {
            Entry::Occupied(mut entry) => {
                debug!(dependency = %entry.key(), "Merging dependency requirements");
                let existing = entry.get_mut();
                existing.requirements =
                    union_requirements(&existing.requirements, &dependency.requirements);
            }
            Entry::Vacant(entry) => {
                entry.insert(dependency.clone());
            }
        }
    }

    merged.into_values().collect()
}

/// Existing requirements first, then new ones, without duplicates.
fn union_requirements(
    existing: &[ReportedRequirement],
    incoming: &[ReportedRequirement],
) -> Vec<ReportedRequirement> {
    existing
        .iter()
        .chain(incoming)
        .cloned()
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}
