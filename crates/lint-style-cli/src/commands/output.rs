//! Report output.

use anyhow::Result;
use lint_style_core::LintReport;
use std::io::Write;

use crate::OutputFormat;

/// Writes the unsuppressed violations of `report` to `out`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write<W: Write>(out: &mut W, report: &LintReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for violation in &report.reported {
                writeln!(out, "{violation}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report.reported)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Prints the report to stdout and its summary to the log.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print(report: &LintReport, format: OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write(&mut lock, report, format)?;
    lock.flush()?;

    if !report.suppressed.is_empty() {
        tracing::debug!("{} violation(s) suppressed by exceptions", report.suppressed.len());
    }
    Ok(())
}
