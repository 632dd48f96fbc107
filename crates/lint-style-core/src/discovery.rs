//! File discovery for full-tree scans.
//!
//! Which files a scan covers is injected through [`DiscoveryConfig`]; nothing
//! here hard-codes directory names.

use crate::config::DiscoveryConfig;
use crate::utils::paths::CanonicalPath;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while discovering files.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Exclude pattern is not a valid glob.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Error walking the directory tree.
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),
}

/// Discovers the files a full scan should lint.
#[derive(Debug, Clone)]
pub struct Discovery {
    root: PathBuf,
    include: Vec<PathBuf>,
    extensions: Vec<String>,
    exclude: Vec<glob::Pattern>,
    respect_gitignore: bool,
}

impl Discovery {
    /// Creates a discovery policy rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if an exclude pattern is not a valid glob.
    pub fn new(root: &Path, config: &DiscoveryConfig) -> Result<Self, DiscoveryError> {
        let exclude = config
            .exclude
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            root: root.to_path_buf(),
            include: config.include.clone(),
            extensions: config.extensions.clone(),
            exclude,
            respect_gitignore: config.respect_gitignore,
        })
    }

    /// Returns every matching file under the included paths, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if walking the tree fails.
    pub fn files(&self) -> Result<Vec<PathBuf>, DiscoveryError> {
        let mut files = Vec::new();

        for include in &self.include {
            let start = self.root.join(include);
            if !start.exists() {
                warn!("Skipping missing include path: {}", start.display());
                continue;
            }

            let mut builder = ignore::WalkBuilder::new(&start);
            builder
                .git_ignore(self.respect_gitignore)
                .git_exclude(self.respect_gitignore)
                .require_git(false);

            for entry in builder.build() {
                let entry = entry?;
                let path = entry.path();

                if !path.is_file() || !self.has_wanted_extension(path) {
                    continue;
                }

                if self.is_excluded(path) {
                    debug!("Excluding: {}", path.display());
                    continue;
                }

                files.push(path.to_path_buf());
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }

    fn has_wanted_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|wanted| wanted == ext))
    }

    /// Checks a path against the exclude globs, using its root-relative form.
    fn is_excluded(&self, path: &Path) -> bool {
        let relative = path
            .strip_prefix(&self.root)
            .map_or_else(|_| CanonicalPath::from_absolute(path), CanonicalPath::from_relative);

        self.exclude
            .iter()
            .any(|pattern| pattern.matches(relative.as_str()))
    }
}
