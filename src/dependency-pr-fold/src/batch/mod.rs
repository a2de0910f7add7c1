//! Reading and writing batches of pull request messages.
//!
//! A batch is a JSON array of `create_pull_request` messages in their wire
//! form. The path `<inline>` is used in errors for batches that did not come
//! from a file.

mod error;

pub use error::BatchError;

use crate::messages::CreatePullRequest;
use std::path::Path;
use tracing::{debug, info};

const INLINE_SOURCE: &str = "<inline>";

/// Parses a JSON array of messages.
///
/// # Errors
///
/// Returns [`BatchError::JsonError`] if the text is not a valid batch, including
/// when a `dependency-group` has an unsupported shape.
pub fn parse_messages(json: &str) -> Result<Vec<CreatePullRequest>, BatchError> {
    parse_from(json, INLINE_SOURCE)
}

/// Loads a batch of messages from a JSON file.
///
/// # Errors
///
/// Returns [`BatchError`] if the file can't be read or isn't a valid batch.
pub fn load_messages(path: &Path) -> Result<Vec<CreatePullRequest>, BatchError> {
    debug!(path = %path.display(), "Loading message batch");

    let json = std::fs::read_to_string(path).map_err(|e| BatchError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let messages = parse_from(&json, &path.display().to_string())?;
    info!(path = %path.display(), count = messages.len(), "Loaded pull request messages");
    Ok(messages)
}

/// Encodes messages as a JSON array.
///
/// # Errors
///
/// Returns [`BatchError::JsonError`] if encoding fails.
pub fn to_json(messages: &[CreatePullRequest], pretty: bool) -> Result<String, BatchError> {
    let encoded = if pretty {
        serde_json::to_string_pretty(messages)
    } else {
        serde_json::to_string(messages)
    };

    encoded.map_err(|e| BatchError::JsonError {
        path: INLINE_SOURCE.to_string(),
        source: e,
    })
}

/// Writes messages to a file as a JSON array.
///
/// # Errors
///
/// Returns [`BatchError`] if encoding or writing fails.
pub fn write_messages(
    path: &Path,
    messages: &[CreatePullRequest],
    pretty: bool,
) -> Result<(), BatchError> {
    let json = to_json(messages, pretty)?;

    std::fs::write(path, json).map_err(|e| BatchError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    info!(path = %path.display(), count = messages.len(), "Wrote pull request messages");
    Ok(())
}

fn parse_from(json: &str, source: &str) -> Result<Vec<CreatePullRequest>, BatchError> {
    serde_json::from_str(json).map_err(|e| BatchError::JsonError {
        path: source.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const BATCH: &str = r#"[
        {
            "dependencies": [
                {
                    "name": "Some.Package",
                    "version": "1.2.3",
                    "requirements": [{ "requirement": "1.2.3", "file": "/app.csproj" }]
                }
            ],
            "updated-dependency-files": [
                { "directory": "/", "name": "app.csproj", "content": "<Project />" }
            ],
            "base-commit-sha": "SHA",
            "commit-message": "commit message",
            "pr-title": "pr title",
            "pr-body": "pr body",
            "dependency-group": { "name": "nuget" }
        }
    ]"#;

    #[test]
    fn parses_batch() {
        let messages = parse_messages(BATCH).unwrap();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].dependency_group, Some("nuget".to_string()));
        assert_eq!(messages[0].dependencies[0].name, "Some.Package");
    }

    #[test]
    fn rejects_unsupported_group_shape() {
        let broken = BATCH.replace(r#"{ "name": "nuget" }"#, r#"{ "other": "nuget" }"#);

        let result = parse_messages(&broken);
        assert!(matches!(result, Err(BatchError::JsonError { .. })));
    }

    #[test]
    fn load_missing_file() {
        let temp = TempDir::new().unwrap();

        let result = load_messages(&temp.path().join("missing.json"));
        assert!(matches!(result, Err(BatchError::IoError { .. })));
    }

    #[test]
    fn write_then_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("folded.json");
        let messages = parse_messages(BATCH).unwrap();

        write_messages(&path, &messages, true).unwrap();

        assert!(fs::read_to_string(&path).unwrap().contains('\n'));
        assert_eq!(load_messages(&path).unwrap(), messages);
    }

    #[test]
    fn compact_json_is_single_line() {
        let messages = parse_messages(BATCH).unwrap();
        assert!(!to_json(&messages, false).unwrap().contains('\n'));
    }
}
