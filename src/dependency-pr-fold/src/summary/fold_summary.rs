//! Fold summary types.

use crate::messages::CreatePullRequest;

/// Summary of a single fold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldSummary {
    /// Number of candidate messages passed to the fold.
    pub messages_received: usize,

    /// Number of messages left after folding.
    pub messages_emitted: usize,

    /// Number of messages absorbed into an earlier equivalent message.
    pub messages_merged: usize,

    /// Number of dependencies across all emitted messages.
    pub dependencies_emitted: usize,
}

impl FoldSummary {
    /// Creates a summary from the input and output of a fold.
    #[must_use]
    pub fn new(received: &[CreatePullRequest], emitted: &[CreatePullRequest]) -> Self {
        Self {
            messages_received: received.len(),
            messages_emitted: emitted.len(),
            messages_merged: received.len().saturating_sub(emitted.len()),
            dependencies_emitted: emitted.iter().map(|m| m.dependencies.len()).sum(),
        }
    }

    /// Returns true if any messages were merged.
    #[must_use]
    pub fn has_merges(&self) -> bool {
        self.messages_merged > 0
    }
}
