//! update-style-exceptions: rebuilds the lint-style exception ledger.
//!
//! Usage:
//! ```bash
//! update-style-exceptions [--check]
//! ```
//!
//! Scans every file selected by `[discovery]` in `lint-style.toml` and
//! rewrites the ledger to list exactly the current violations.

use clap::Parser;
use lint_style_cli::root_resolver::ROOT_ENV_VAR;
use lint_style_cli::{commands, exit_codes, init_tracing};
use std::path::PathBuf;
use std::process::ExitCode;

/// Regenerate the lint-style exception ledger
#[derive(Parser)]
#[command(name = "update-style-exceptions")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Repository root (default: located from the tool or working directory)
    #[arg(long, env = ROOT_ENV_VAR, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Do not write; exit 1 if the ledger is out of date
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    commands::update::run(cli.root.as_deref(), cli.check)
        .unwrap_or_else(|err| exit_codes::report_error(&err))
}
