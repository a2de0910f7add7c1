//! Folding of duplicate pull request messages.
//!
//! Independent update runs can produce messages that would open the same pull
//! request and differ only in which project file declared a dependency. The
//! fold collapses those into one message whose dependencies carry every
//! requirement that was reported for them.

mod equivalence;
mod merge;

pub use equivalence::EquivalenceKey;

use crate::messages::CreatePullRequest;
use tracing::{debug, info};

/// Collapses equivalent pull request messages into one.
///
/// Each message is compared against the messages kept so far. The first
/// equivalent one (see [`CreatePullRequest::is_equivalent_to`]) absorbs it via
/// [`CreatePullRequest::merged_with`] and keeps its position; otherwise the
/// message is kept, with any repeated dependency keys collapsed. Output order
/// is the order of first appearance, and no output message repeats a
/// dependency key.
///
/// # Arguments
///
/// * `messages` - Candidate messages in the order they were produced
///
/// # Returns
///
/// The folded messages. Never longer than the input.
#[must_use]
pub fn fold_pull_request_messages(messages: Vec<CreatePullRequest>) -> Vec<CreatePullRequest> {
    let received = messages.len();
    let mut folded: Vec<CreatePullRequest> = Vec::with_capacity(received);

    for candidate in messages {
        let equivalent = folded
            .iter()
            .position(|kept| kept.is_equivalent_to(&candidate));

        match equivalent {
            Some(index) => {
                debug!(
                    index,
                    base_commit_sha = %candidate.base_commit_sha,
                    "Merging equivalent pull request message"
                );
                let merged = folded[index].merged_with(&candidate);
                folded[index] = merged;
            }
            None => folded.push(candidate.with_unique_dependencies()),
        }
    }

    info!(received, emitted = folded.len(), "Folded pull request messages");
    folded
}
