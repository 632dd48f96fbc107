//! Process exit codes shared by both executables.
//!
//! CI scripts can tell style problems apart from a tool that could not run.

use std::process::ExitCode;

/// No unsuppressed violations, or the ledger is current.
pub const SUCCESS: u8 = 0;

/// Unsuppressed violations found, or the ledger is stale under `--check`.
pub const VIOLATIONS_FOUND: u8 = 1;

/// The tool could not run, for example on bad input or configuration.
pub const TOOL_ERROR: u8 = 2;

/// Exit with [`SUCCESS`].
#[must_use]
pub fn success() -> ExitCode {
    ExitCode::from(SUCCESS)
}

/// Exit with [`VIOLATIONS_FOUND`].
#[must_use]
pub fn violations_found() -> ExitCode {
    ExitCode::from(VIOLATIONS_FOUND)
}

/// Exit with [`TOOL_ERROR`].
#[must_use]
pub fn tool_error() -> ExitCode {
    ExitCode::from(TOOL_ERROR)
}

/// Prints a command failure to stderr and maps it to [`TOOL_ERROR`].
#[must_use]
pub fn report_error(err: &anyhow::Error) -> ExitCode {
    eprintln!("error: {err:#}");
    tool_error()
}
