//! `update-style-exceptions` command implementation.

use anyhow::{Context, Result};
use lint_style_core::ExceptionLedger;
use std::path::Path;
use std::process::ExitCode;

use crate::exit_codes;
use crate::project::Project;

/// Rebuilds the exception ledger from a full scan.
///
/// With `check`, the ledger is left untouched and the exit code reports
/// whether the file already holds exactly what would be written.
///
/// # Errors
///
/// Returns an error if the scan fails or the ledger cannot be read or
/// written.
pub fn run(root: Option<&Path>, check: bool) -> Result<ExitCode> {
    let project = Project::open(root)?;
    let ledger_path = project.ledger_path();

    let linter = project.linter(ExceptionLedger::new())?;
    let regenerated = linter.regenerate().context("Full scan failed")?;

    // An unreadable old ledger only matters for the diff.
    let current = match project.load_ledger() {
        Ok(ledger) => ledger,
        Err(e) if !check => {
            tracing::warn!("Replacing unreadable ledger: {e:#}");
            ExceptionLedger::new()
        }
        Err(e) => return Err(e),
    };

    let diff = current.diff(&regenerated);
    for entry in &diff.added {
        tracing::info!("+ {entry}");
    }
    for entry in &diff.removed {
        tracing::info!("- {entry}");
    }

    if check {
        let on_disk = regenerated
            .is_saved_at(&ledger_path)
            .with_context(|| format!("Failed to read {}", ledger_path.display()))?;
        if on_disk {
            tracing::info!("{} is up to date", ledger_path.display());
            return Ok(exit_codes::success());
        }
        if diff.is_empty() {
            tracing::warn!(
                "{} has the right entries but is not in canonical form; run update-style-exceptions",
                ledger_path.display()
            );
        } else {
            tracing::warn!(
                "{} is out of date ({} added, {} removed); run update-style-exceptions",
                ledger_path.display(),
                diff.added.len(),
                diff.removed.len()
            );
        }
        return Ok(exit_codes::violations_found());
    }

    regenerated
        .save(&ledger_path)
        .with_context(|| format!("Failed to write {}", ledger_path.display()))?;
    tracing::info!(
        "Wrote {} exception(s) to {}",
        regenerated.len(),
        ledger_path.display()
    );
    Ok(exit_codes::success())
}
