//! # lint-style-core
//!
//! Core framework for checking library source files against style conventions.
//!
//! This crate provides:
//!
//! - [`Rule`] trait for per-file line-based style rules
//! - [`Linter`] for running rules over named files or a whole tree
//! - [`ExceptionLedger`] for suppressing known, accepted violations
//! - [`PathResolver`] for mapping caller paths to their canonical form
//!
//! ## Example
//!
//! ```ignore
//! use lint_style_core::{ExceptionLedger, Linter};
//!
//! let ledger = ExceptionLedger::load(&config.ledger_path(&root))?;
//! let linter = Linter::builder()
//!     .root(&root)
//!     .config(config)
//!     .ledger(ledger)
//!     .rule(CopyrightHeader::new())
//!     .build()?;
//!
//! let report = linter.lint_paths(&["src/data/bool.lean"])?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod discovery;
mod ledger;
mod linter;
mod rule;
mod types;

/// Utility modules for rule implementations.
pub mod utils;

pub use config::{
    Config, ConfigError, DiscoveryConfig, ExceptionsConfig, RuleConfig, CONFIG_FILE_NAME,
};
pub use context::FileContext;
pub use discovery::{Discovery, DiscoveryError};
pub use ledger::{ExceptionEntry, ExceptionLedger, LedgerDiff, LedgerError, DEFAULT_LEDGER_PATH};
pub use linter::{LintError, Linter, LinterBuilder};
pub use rule::{Rule, RuleBox};
pub use types::{is_rule_code, LintReport, Location, Violation};
pub use utils::paths::{CanonicalPath, PathResolver, ResolvedPath};
