//! Shared plumbing for the `lint-style` and `update-style-exceptions`
//! executables.
//!
//! Both tools locate the repository root the same way (see
//! [`root_resolver`]), load `lint-style.toml`, and build a
//! [`lint_style_core::Linter`] with the built-in rules.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod commands;
pub mod exit_codes;
pub mod project;
pub mod root_resolver;

use tracing_subscriber::EnvFilter;

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One report line per violation.
    #[default]
    Text,
    /// JSON array of violations.
    Json,
}

/// Installs the stderr log subscriber.
///
/// `--verbose` forces `debug`; otherwise `RUST_LOG` applies, defaulting to
/// `info`. Standard output is left to the report.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
