//! Runner configuration.

use std::path::{Path, PathBuf};

/// Configuration for a fold run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the JSON batch of candidate messages.
    input_path: PathBuf,
    /// Where to write the folded batch, if anywhere.
    output_path: Option<PathBuf>,
    /// Whether the written batch is indented.
    pretty_json: bool,
}

impl RunnerConfig {
    /// Creates a new configuration for a run with indented output.
    pub fn new(input_path: PathBuf) -> Self {
        Self {
            input_path,
            output_path: None,
            pretty_json: true,
        }
    }

    /// Sets the path the folded batch is written to.
    pub fn with_output_path(mut self, output_path: PathBuf) -> Self {
        self.output_path = Some(output_path);
        self
    }

    /// Sets whether the written batch is indented.
    pub fn with_pretty_json(mut self, pretty_json: bool) -> Self {
        self.pretty_json = pretty_json;
        self
    }

    /// Returns the input batch path.
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// Returns the output path, if set.
    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    /// Returns whether the written batch is indented.
    pub fn pretty_json(&self) -> bool {
        self.pretty_json
    }
}
