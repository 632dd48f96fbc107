//! lint-style: style linter for Lean source files.
//!
//! Usage:
//! ```bash
//! lint-style [OPTIONS] <PATH>...
//! lint-style --list-rules
//! ```
//!
//! Prints one line per unsuppressed violation on stdout and exits 1 if there
//! are any. Known violations are suppressed by the exception ledger, which
//! `update-style-exceptions` maintains.

use clap::Parser;
use lint_style_cli::commands::check::CheckOptions;
use lint_style_cli::root_resolver::ROOT_ENV_VAR;
use lint_style_cli::{commands, exit_codes, init_tracing, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;

/// Style linter for Lean source files
#[derive(Parser)]
#[command(name = "lint-style")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Repository root (default: located from the tool or working directory)
    #[arg(long, env = ROOT_ENV_VAR, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Report every violation, ignoring the exception ledger
    #[arg(long)]
    no_exceptions: bool,

    /// List available rules and exit
    #[arg(long)]
    list_rules: bool,

    /// Files to lint
    #[arg(required_unless_present = "list_rules")]
    paths: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list_rules {
        commands::list_rules::run();
        return exit_codes::success();
    }

    let options = CheckOptions {
        paths: cli.paths,
        format: cli.format,
        no_exceptions: cli.no_exceptions,
    };

    commands::check::run(cli.root.as_deref(), &options)
        .unwrap_or_else(|err| exit_codes::report_error(&err))
}
