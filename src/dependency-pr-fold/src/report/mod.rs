//! Human-readable reports of pull request messages.
//!
//! Reports open with the message's type name and list each dependency as
//! `name/version`, sorted by name (case-insensitive) and then by version.
//! They are for logs and console output only and play no part in folding.

mod error;
mod version;

pub use error::{ReportError, VersionError};
pub use version::PackageVersion;

use crate::messages::{CreatePullRequest, Message, ReportedDependency};

impl Message for CreatePullRequest {
    fn message_type(&self) -> &'static str {
        "create_pull_request"
    }

    fn type_name(&self) -> &'static str {
        "CreatePullRequest"
    }

    fn report(&self) -> Result<String, ReportError> {
        let mut lines = vec![self.type_name().to_string()];
        lines.extend(
            sorted_for_report(&self.dependencies)?
                .into_iter()
                .map(|d| format!("- {}/{}", d.name, d.version)),
        );

        Ok(lines.join("\n"))
    }
}

/// Builds the reports of several messages, separated by blank lines.
///
/// # Errors
///
/// Returns the first [`ReportError`] encountered.
pub fn report_all<M: Message>(messages: &[M]) -> Result<String, ReportError> {
    let reports = messages
        .iter()
        .map(Message::report)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(reports.join("\n\n"))
}

fn sorted_for_report(
    dependencies: &[ReportedDependency],
) -> Result<Vec<&ReportedDependency>, ReportError> {
    let mut keyed = dependencies
        .iter()
        .map(|d| {
            d.version
                .parse::<PackageVersion>()
                .map(|version| (d.name.to_lowercase(), version, d))
                .map_err(|e| ReportError::InvalidVersion {
                    name: d.name.clone(),
                    version: d.version.clone(),
                    source: e,
                })
        })
        .collect::<Result<Vec<_>, ReportError>>()?;

    keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    Ok(keyed.into_iter().map(|(_, _, d)| d).collect())
}
