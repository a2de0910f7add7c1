//! Pull request messages produced by dependency update runs.
//!
//! This module contains the wire model handed to the code host API client:
//! - [`CreatePullRequest`] - One candidate pull request
//! - [`ReportedDependency`] and [`ReportedRequirement`] - Dependencies bumped by it
//! - [`DependencyFile`] - Files it rewrites
//! - [`Message`] - Behaviour shared by every message kind

mod create_pull_request;
pub mod dependency_group;
mod dependency;
mod dependency_file;
mod message;

pub use create_pull_request::CreatePullRequest;
pub use dependency::{DependencyKey, ReportedDependency, ReportedRequirement};
pub use dependency_file::DependencyFile;
pub use message::Message;
