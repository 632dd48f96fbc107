//! Loading a repository: root, configuration, ledger and linter.

use anyhow::{Context, Result};
use lint_style_core::{Config, ExceptionLedger, Linter};
use lint_style_rules::configured_rules;
use std::path::{Path, PathBuf};

use crate::root_resolver::{self, RootSource};

/// A repository the tools operate on.
#[derive(Debug)]
pub struct Project {
    source: RootSource,
    root: PathBuf,
    config: Config,
}

impl Project {
    /// Resolves the root and loads its configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is unavailable or the
    /// configuration file cannot be parsed.
    pub fn open(explicit_root: Option<&Path>) -> Result<Self> {
        let source =
            root_resolver::resolve(explicit_root).context("Failed to resolve repository root")?;
        let root = std::fs::canonicalize(source.path()).with_context(|| {
            format!("Invalid repository root {}", source.path().display())
        })?;
        tracing::debug!("Repository root: {} ({:?})", root.display(), source);

        let config = Config::load_from_root(&root).with_context(|| {
            format!("Failed to load configuration from {}", root.display())
        })?;

        Ok(Self {
            source,
            root,
            config,
        })
    }

    /// Returns the canonicalized repository root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the exception ledger.
    #[must_use]
    pub fn ledger_path(&self) -> PathBuf {
        self.config.ledger_path(self.root())
    }

    /// Loads the exception ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger exists but is unreadable or malformed.
    pub fn load_ledger(&self) -> Result<ExceptionLedger> {
        let path = self.ledger_path();
        let ledger = ExceptionLedger::load(&path)
            .with_context(|| format!("Failed to load exception ledger {}", path.display()))?;
        tracing::debug!("Loaded {} exception(s) from {}", ledger.len(), path.display());
        Ok(ledger)
    }

    /// Builds a linter with the configured built-in rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory does not exist.
    pub fn linter(&self, ledger: ExceptionLedger) -> Result<Linter> {
        Linter::builder()
            .root(self.root())
            .rules(configured_rules(&self.config))
            .config(self.config.clone())
            .ledger(ledger)
            .build()
            .context("Failed to build linter")
    }
}
