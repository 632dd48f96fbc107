//! `lint-style` command implementation.

use anyhow::Result;
use lint_style_core::ExceptionLedger;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::exit_codes;
use crate::project::Project;
use crate::OutputFormat;

/// Options for a lint run.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Files to lint, relative to the working directory or absolute.
    pub paths: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Report every violation, ignoring the exception ledger.
    pub no_exceptions: bool,
}

/// Runs the lint over the given files.
///
/// # Errors
///
/// Returns an error if the configuration or ledger cannot be loaded, or any
/// named file is missing or unreadable.
pub fn run(root: Option<&Path>, options: &CheckOptions) -> Result<ExitCode> {
    let project = Project::open(root)?;

    let ledger = if options.no_exceptions {
        tracing::debug!("Ignoring exception ledger");
        ExceptionLedger::new()
    } else {
        project.load_ledger()?
    };

    let linter = project.linter(ledger)?;
    let report = linter.lint_paths(&options.paths)?;

    super::output::print(&report, options.format)?;

    if report.has_violations() {
        Ok(exit_codes::violations_found())
    } else {
        Ok(exit_codes::success())
    }
}
