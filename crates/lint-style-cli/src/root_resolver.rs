//! Repository root resolution.
//!
//! Resolves the root using a deterministic priority order:
//!
//! 1. `--root` flag, or the `LINT_STYLE_ROOT` environment variable
//! 2. Nearest ancestor of the executable's directory holding `lint-style.toml`
//! 3. Nearest ancestor of the working directory holding `lint-style.toml`
//! 4. The working directory itself
//!
//! Step 2 lets an installed copy of the tool (e.g. `<repo>/scripts/lint-style`)
//! find its repository no matter where it is invoked from.

use lint_style_core::CONFIG_FILE_NAME;
use std::path::{Path, PathBuf};

/// Environment variable consulted when `--root` is absent.
pub const ROOT_ENV_VAR: &str = "LINT_STYLE_ROOT";

/// Where the repository root came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootSource {
    /// Given via `--root` or `LINT_STYLE_ROOT`.
    Explicit(PathBuf),
    /// Found above the running executable.
    ToolLocation(PathBuf),
    /// Found above the working directory.
    WorkingDirAncestor(PathBuf),
    /// Nothing found; the working directory is used as-is.
    Fallback(PathBuf),
}

impl RootSource {
    /// Returns the resolved root.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Explicit(p)
            | Self::ToolLocation(p)
            | Self::WorkingDirAncestor(p)
            | Self::Fallback(p) => p,
        }
    }

    /// Returns `true` if no marker file was found.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Resolves the repository root for this process.
///
/// # Errors
///
/// Returns an error if the working directory is unavailable.
pub fn resolve(explicit: Option<&Path>) -> std::io::Result<RootSource> {
    let cwd = std::env::current_dir()?;
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.canonicalize().ok())
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    let source = resolve_inner(explicit, exe_dir.as_deref(), &cwd);
    if source.is_fallback() {
        tracing::warn!(
            "No {} found, using working directory as root: {}",
            CONFIG_FILE_NAME,
            cwd.display()
        );
    }
    Ok(source)
}

/// Testable core: takes the executable's directory and working directory as
/// parameters.
fn resolve_inner(explicit: Option<&Path>, exe_dir: Option<&Path>, cwd: &Path) -> RootSource {
    if let Some(p) = explicit {
        return RootSource::Explicit(cwd.join(p));
    }

    if let Some(root) = exe_dir.and_then(find_marker_ancestor) {
        tracing::debug!("Found root above executable: {}", root.display());
        return RootSource::ToolLocation(root);
    }

    if let Some(root) = find_marker_ancestor(cwd) {
        tracing::debug!("Found root above working directory: {}", root.display());
        return RootSource::WorkingDirAncestor(root);
    }

    RootSource::Fallback(cwd.to_path_buf())
}

/// Nearest ancestor of `start` (inclusive) that holds the config file.
fn find_marker_ancestor(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE_NAME).is_file())
        .map(Path::to_path_buf)
}
