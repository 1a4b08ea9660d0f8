// Terminal output. Everything goes to stderr: stdout is inherited by the
// generator and may be captured by whoever runs `go generate`.

use crate::core::GenerateSummary;
use colored::Colorize as _;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (EnvFilter syntax).
pub const LOG_ENV_VAR: &str = "ASSETFS_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A second init (tests) is not an error worth reporting.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn print_generated(summary: &GenerateSummary) {
    eprintln!(
        "{} {} ({}, {} lines)",
        "Wrote".dimmed(),
        summary.output_path.display().to_string().green(),
        summary.mode.to_string().cyan(),
        summary.lines
    );
}

pub fn print_marker_missing(output_path: &Path) {
    eprintln!(
        "{} no `import (` block in generator output; {} was written without the adapter import",
        "warning:".yellow().bold(),
        output_path.display()
    );
}

pub fn print_cleanup_failed(scratch_path: &Path, error: &std::io::Error) {
    eprintln!(
        "{} cannot remove {}: {}",
        "warning:".yellow().bold(),
        scratch_path.display(),
        error
    );
}
