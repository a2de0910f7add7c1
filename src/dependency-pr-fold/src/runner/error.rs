//! Runner error types.

/// Errors that can occur during a fold run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Settings loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Reading or writing message batches.
    #[error(transparent)]
    Batch(#[from] crate::batch::BatchError),

    /// Building reports of folded messages.
    #[error(transparent)]
    Report(#[from] crate::report::ReportError),
}
