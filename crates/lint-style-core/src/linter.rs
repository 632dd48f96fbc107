//! The linter: runs rules over files and filters results through the ledger.

use crate::config::{Config, ConfigError};
use crate::context::FileContext;
use crate::discovery::{Discovery, DiscoveryError};
use crate::ledger::{ExceptionLedger, LedgerError};
use crate::rule::{Rule, RuleBox};
use crate::types::{LintReport, Violation};
use crate::utils::paths::{PathResolver, ResolvedPath};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that stop a lint run.
///
/// None of these are rule violations: they mean the lint could not run.
#[derive(Debug, Error)]
pub enum LintError {
    /// A named input file is missing or unreadable.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path as given by the caller.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The repository root could not be resolved.
    #[error("Invalid repository root {path}: {source}")]
    Root {
        /// Root path as configured.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Exception ledger error.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// File discovery error.
    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),
}

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    root: Option<PathBuf>,
    cwd: Option<PathBuf>,
    rules: Vec<RuleBox>,
    config: Option<Config>,
    ledger: Option<ExceptionLedger>,
}

impl LinterBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the repository root.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Sets the directory relative input paths are resolved against
    /// (default: the process working directory).
    #[must_use]
    pub fn cwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.cwd = Some(path.into());
        self
    }

    /// Adds a rule to the linter.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds several boxed rules.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the exception ledger used to suppress known violations.
    #[must_use]
    pub fn ledger(mut self, ledger: ExceptionLedger) -> Self {
        self.ledger = Some(ledger);
        self
    }

    /// Builds the linter.
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory doesn't exist or the working
    /// directory is unavailable.
    pub fn build(self) -> Result<Linter, LintError> {
        let root = self.root.unwrap_or_else(|| PathBuf::from("."));
        let root_err = |source| LintError::Root {
            path: root.clone(),
            source,
        };

        let cwd = match self.cwd {
            Some(cwd) => cwd,
            None => std::env::current_dir().map_err(root_err)?,
        };
        let paths = PathResolver::new(&root, &cwd).map_err(root_err)?;

        Ok(Linter {
            paths,
            rules: self.rules,
            config: self.config.unwrap_or_default(),
            ledger: self.ledger.unwrap_or_default(),
        })
    }
}

/// Runs style rules and applies the exception ledger.
///
/// Use [`Linter::builder()`] to construct an instance.
pub struct Linter {
    paths: PathResolver,
    rules: Vec<RuleBox>,
    config: Config,
    ledger: ExceptionLedger,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the canonicalized repository root.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.paths.root()
    }

    /// Returns the number of enabled rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.enabled_rules().count()
    }

    /// Lints the named files and filters the results through the ledger.
    ///
    /// Paths may be relative to the working directory or absolute; both
    /// forms produce the same report.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::Read`] if any file is missing or unreadable.
    pub fn lint_paths<P: AsRef<Path>>(&self, paths: &[P]) -> Result<LintReport, LintError> {
        info!(
            "Linting {} file(s) with {} rule(s)",
            paths.len(),
            self.rule_count()
        );

        let mut found = Vec::new();
        let mut files_checked = 0;
        for path in paths {
            let path = path.as_ref();
            let resolved = self.paths.resolve(path).map_err(|source| LintError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            found.extend(self.check_file(&resolved)?);
            files_checked += 1;
        }

        let (reported, suppressed) = self.ledger.partition(found);
        let mut report = LintReport {
            reported,
            suppressed,
            files_checked,
        };
        report.sort();

        info!("{}", report.summary());
        Ok(report)
    }

    /// Lints every file the discovery policy selects, without suppression.
    ///
    /// # Errors
    ///
    /// Returns an error if discovery fails or a file cannot be read.
    pub fn scan_all(&self) -> Result<LintReport, LintError> {
        let discovery = Discovery::new(self.root(), &self.config.discovery)?;
        let files = discovery.files()?;

        info!("Scanning {} file(s) under {}", files.len(), self.root().display());

        let mut report = LintReport::new();
        for file in &files {
            let resolved = self.paths.resolve(file).map_err(|source| LintError::Read {
                path: file.clone(),
                source,
            })?;
            report.reported.extend(self.check_file(&resolved)?);
            report.files_checked += 1;
        }
        report.sort();

        info!("{}", report.summary());
        Ok(report)
    }

    /// Rebuilds the exception ledger from a full scan.
    ///
    /// The result holds exactly the `(file, code)` pairs currently violating,
    /// independent of the ledger this linter was built with.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan fails.
    pub fn regenerate(&self) -> Result<ExceptionLedger, LintError> {
        let report = self.scan_all()?;
        Ok(ExceptionLedger::from_violations(&report.reported))
    }

    /// Runs every enabled rule over one resolved file.
    fn check_file(&self, file: &ResolvedPath) -> Result<Vec<Violation>, LintError> {
        debug!("Checking: {}", file.canonical);

        let content =
            std::fs::read_to_string(&file.absolute).map_err(|source| LintError::Read {
                path: file.absolute.clone(),
                source,
            })?;

        let ctx = FileContext::new(&file.absolute, &content, file.canonical.clone());
        let mut violations = Vec::new();
        for rule in self.enabled_rules() {
            violations.extend(rule.check(&ctx));
        }

        Ok(violations)
    }

    fn enabled_rules(&self) -> impl Iterator<Item = &RuleBox> {
        self.rules.iter().filter(|rule| {
            let enabled = self.config.is_rule_enabled(rule.name());
            if !enabled {
                debug!("Skipping disabled rule: {}", rule.name());
            }
            enabled
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::ExceptionEntry;
    use crate::utils::paths::CanonicalPath;
    use crate::RuleConfig;
    use std::fs;
    use tempfile::TempDir;

    /// Flags files whose first line is not `/-`.
    struct NeedsHeader;

    impl Rule for NeedsHeader {
        fn name(&self) -> &'static str {
            "needs-header"
        }
        fn code(&self) -> &'static str {
            "ERR_HDR"
        }
        fn check(&self, ctx: &FileContext) -> Vec<Violation> {
            if ctx.content.starts_with("/-") {
                Vec::new()
            } else {
                vec![ctx.violation_at(self.code(), self.name(), 1, "missing header")]
            }
        }
    }

    fn repo() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src/data")).unwrap();
        fs::create_dir_all(tmp.path().join("scripts")).unwrap();
        fs::write(tmp.path().join("src/data/good.lean"), "/-\n-/\n").unwrap();
        fs::write(tmp.path().join("src/data/bad.lean"), "example : 37 = 37\n").unwrap();
        tmp
    }

    fn linter(root: &Path, cwd: &Path, ledger: ExceptionLedger) -> Linter {
        Linter::builder()
            .root(root)
            .cwd(cwd)
            .rule(NeedsHeader)
            .ledger(ledger)
            .build()
            .expect("Failed to build linter")
    }

    #[test]
    fn test_builder_requires_existing_root() {
        let tmp = TempDir::new().unwrap();
        let result = Linter::builder()
            .root(tmp.path().join("missing"))
            .cwd(tmp.path())
            .build();
        assert!(matches!(result, Err(LintError::Root { .. })));
    }

    #[test]
    fn test_reports_violation_with_relative_path() {
        let tmp = repo();
        let linter = linter(tmp.path(), tmp.path(), ExceptionLedger::new());
        let report = linter.lint_paths(&["src/data/bad.lean"]).unwrap();

        assert_eq!(report.reported.len(), 1);
        assert_eq!(
            report.reported[0].location.file.as_str(),
            "src/data/bad.lean"
        );
        assert_eq!(report.files_checked, 1);
    }

    #[test]
    fn test_invocation_style_does_not_change_outcome() {
        let tmp = repo();
        let scripts = tmp.path().join("scripts");
        let mut ledger = ExceptionLedger::new();
        ledger.insert(
            ExceptionEntry::new(
                CanonicalPath::from_relative(Path::new("src/data/bad.lean")),
                "ERR_HDR",
            )
            .unwrap(),
        );
        let linter = linter(tmp.path(), &scripts, ledger);

        let relative = linter.lint_paths(&["../src/data/bad.lean"]).unwrap();
        let absolute = linter
            .lint_paths(&[tmp.path().join("src/data/bad.lean")])
            .unwrap();

        assert!(!relative.has_violations());
        assert!(!absolute.has_violations());
        assert_eq!(relative.suppressed, absolute.suppressed);
        assert_eq!(relative.suppressed.len(), 1);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let tmp = repo();
        let linter = linter(tmp.path(), tmp.path(), ExceptionLedger::new());
        let err = linter.lint_paths(&["src/nope.lean"]).unwrap_err();
        match err {
            LintError::Read { path, .. } => assert_eq!(path, PathBuf::from("src/nope.lean")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_disabled_rule_is_skipped() {
        let tmp = repo();
        let mut config = Config::default();
        config.rules.insert(
            "needs-header".to_string(),
            RuleConfig {
                enabled: Some(false),
                ..RuleConfig::default()
            },
        );
        let linter = Linter::builder()
            .root(tmp.path())
            .cwd(tmp.path())
            .config(config)
            .rule(NeedsHeader)
            .build()
            .unwrap();

        assert_eq!(linter.rule_count(), 0);
        let report = linter.lint_paths(&["src/data/bad.lean"]).unwrap();
        assert!(!report.has_violations());
    }

    #[test]
    fn test_regenerate_covers_whole_tree_and_ignores_ledger() {
        let tmp = repo();
        let mut stale = ExceptionLedger::new();
        stale.insert(
            ExceptionEntry::new(
                CanonicalPath::from_relative(Path::new("src/data/gone.lean")),
                "ERR_HDR",
            )
            .unwrap(),
        );
        let linter = linter(tmp.path(), tmp.path(), stale);

        let ledger = linter.regenerate().unwrap();
        assert_eq!(ledger.render(), "src/data/bad.lean : ERR_HDR\n");
        assert_eq!(linter.regenerate().unwrap(), ledger);
    }
}
