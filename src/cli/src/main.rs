//! CLI for dependency-pr-fold.
//!
//! Reads a JSON batch of `create_pull_request` messages, folds equivalent
//! messages together and writes the result.

use clap::Parser;
use dependency_pr_fold::{to_json, FoldSettings, FoldSummary, Runner, RunnerConfig, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Dependency PR Fold - Merge duplicate pull request messages before they are sent.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON batch of candidate messages.
    #[arg(long, env = "PR_FOLD_INPUT")]
    input: PathBuf,

    /// Where to write the folded batch. Printed to stdout if omitted.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Path to the settings file.
    #[arg(long, default_value = "fold.toml")]
    settings: PathBuf,

    /// Print a report of every folded message.
    #[arg(long)]
    report: bool,

    /// Write compact JSON instead of pretty-printed JSON.
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(&args) {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::from(0)
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr so stdout can carry the folded JSON. The level is taken
/// from `RUST_LOG` and defaults to "info".
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
///
/// The folded batch is emitted before any report is built, so a malformed
/// version only fails the report. Reporting is decided here from the settings;
/// the runner only sees the output options.
fn run(args: &Args) -> Result<FoldSummary, RunnerError> {
    let mut settings = FoldSettings::load_or_default(&args.settings)?;
    if args.report {
        settings.report = true;
    }
    if args.compact {
        settings.pretty_json = false;
    }

    let mut config = RunnerConfig::new(args.input.clone()).with_pretty_json(settings.pretty_json);
    if let Some(path) = &args.output {
        config = config.with_output_path(path.clone());
    }

    let outcome = Runner::new(config).run()?;

    if args.output.is_none() {
        println!("{}", to_json(&outcome.messages, settings.pretty_json)?);
    }

    if settings.report {
        eprintln!("\n{}", outcome.report()?);
    }

    Ok(outcome.summary)
}

/// Prints the final fold summary.
fn print_summary(summary: &FoldSummary) {
    eprintln!("\nSummary:");
    eprintln!("  Messages received: {}", summary.messages_received);
    eprintln!("  Messages emitted: {}", summary.messages_emitted);
    eprintln!("  Messages merged: {}", summary.messages_merged);
    eprintln!("  Dependencies emitted: {}", summary.dependencies_emitted);
}
