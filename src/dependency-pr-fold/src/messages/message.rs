//! Behaviour shared by every message sent to the code host.

use crate::report::ReportError;

/// A message that can describe itself for logs and console output.
pub trait Message {
    /// Wire name of the message kind (e.g. `create_pull_request`).
    fn message_type(&self) -> &'static str;

    /// Type name used as the report header (e.g. `CreatePullRequest`).
    fn type_name(&self) -> &'static str;

    /// Builds a human-readable summary of the message.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the message holds data the report cannot
    /// present, such as a malformed version.
    fn report(&self) -> Result<String, ReportError>;
}
