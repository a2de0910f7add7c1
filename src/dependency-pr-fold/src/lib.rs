#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod batch;
pub mod config;
pub mod fold;
pub mod messages;
pub mod report;
pub mod runner;
pub mod summary;

pub use batch::{load_messages, parse_messages, to_json, write_messages, BatchError};
pub use config::{ConfigError, FoldSettings};
pub use fold::{fold_pull_request_messages, EquivalenceKey};
pub use messages::{
    CreatePullRequest, DependencyFile, DependencyKey, Message, ReportedDependency,
    ReportedRequirement,
};
pub use report::{report_all, PackageVersion, ReportError, VersionError};
pub use runner::{RunOutcome, Runner, RunnerConfig, RunnerError};
pub use summary::FoldSummary;
