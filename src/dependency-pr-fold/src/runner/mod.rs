//! Orchestrates a fold run: load, fold, write, summarize.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::batch::{load_messages, write_messages};
use crate::fold::fold_pull_request_messages;
use crate::messages::CreatePullRequest;
use crate::report::{report_all, ReportError};
use crate::summary::FoldSummary;
use tracing::{info, info_span};

/// Result of a completed fold run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Folded messages in order of first appearance.
    pub messages: Vec<CreatePullRequest>,

    /// Counters for the run.
    pub summary: FoldSummary,
}

impl RunOutcome {
    /// Builds the report of every folded message.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if a dependency version is malformed.
    pub fn report(&self) -> Result<String, ReportError> {
        report_all(&self.messages)
    }
}

/// Runs the fold over a batch file.
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    /// Creates a new runner.
    #[must_use]
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Returns the runner configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Executes the run.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the batch can't be loaded or written.
    pub fn run(&self) -> Result<RunOutcome, RunnerError> {
        let span = info_span!("fold_run", input = %self.config.input_path().display());
        let _guard = span.enter();

        let candidates = load_messages(self.config.input_path())?;
        let messages = fold_pull_request_messages(candidates.clone());
        let summary = FoldSummary::new(&candidates, &messages);

        if let Some(output_path) = self.config.output_path() {
            write_messages(output_path, &messages, self.config.pretty_json())?;
        }

        info!(
            received = summary.messages_received,
            emitted = summary.messages_emitted,
            merged = summary.messages_merged,
            "Fold run complete"
        );

        Ok(RunOutcome { messages, summary })
    }
}
