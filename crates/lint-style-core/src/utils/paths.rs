//! Path normalization shared by the linter and the exception ledger.
//!
//! Every path a caller hands in (relative to their working directory, or
//! absolute) goes through [`PathResolver::resolve`] before it is reported or
//! compared against the ledger. Files inside the repository root end up as
//! root-relative, forward-slash paths; anything outside keeps its absolute form.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// A path in canonical display form.
///
/// Root-relative paths use `/` as separator and never start with `./`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalPath(String);

impl CanonicalPath {
    /// Builds a canonical path from a root-relative path.
    ///
    /// `.` components are dropped, `..` is collapsed lexically and separators
    /// are normalized to `/`. A `..` that climbs above the root is kept, see
    /// [`CanonicalPath::escapes_root`].
    #[must_use]
    pub fn from_relative(path: &Path) -> Self {
        let mut parts: Vec<String> = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(s) => parts.push(s.to_string_lossy().into_owned()),
                Component::ParentDir => {
                    if parts.last().is_some_and(|last| last != "..") {
                        parts.pop();
                    } else {
                        parts.push("..".to_string());
                    }
                }
                Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            }
        }
        Self(parts.join("/"))
    }

    /// Wraps an absolute path lying outside the repository root.
    #[must_use]
    pub fn from_absolute(path: &Path) -> Self {
        Self(path.display().to_string())
    }

    /// Returns true if this path is absolute (or rooted).
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        is_absolute_str(&self.0)
    }

    /// Returns true if this relative path does not name anything below the
    /// root: it is empty or starts with `..`.
    #[must_use]
    pub fn escapes_root(&self) -> bool {
        !self.is_absolute() && (self.0.is_empty() || self.0 == ".." || self.0.starts_with("../"))
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns true if `s` would be interpreted as an absolute path on any platform.
#[must_use]
pub fn is_absolute_str(s: &str) -> bool {
    let path = Path::new(s);
    let windows_drive = s.len() >= 3
        && s.as_bytes()[0].is_ascii_alphabetic()
        && s.as_bytes()[1] == b':'
        && matches!(s.as_bytes()[2], b'/' | b'\\');
    path.is_absolute() || path.has_root() || s.starts_with('\\') || windows_drive
}

/// A caller-supplied path after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Absolute, symlink-free path on disk.
    pub absolute: PathBuf,
    /// Canonical display form used in reports and the ledger.
    pub canonical: CanonicalPath,
}

/// Resolves paths against a fixed repository root and working directory.
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
    cwd: PathBuf,
}

impl PathResolver {
    /// Creates a resolver. `root` may be relative to `cwd`; it must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be canonicalized.
    pub fn new(root: &Path, cwd: &Path) -> std::io::Result<Self> {
        let root = std::fs::canonicalize(join_if_relative(cwd, root))?;
        Ok(Self {
            root,
            cwd: cwd.to_path_buf(),
        })
    }

    /// Returns the canonicalized repository root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a caller path to its on-disk and canonical forms.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be canonicalized.
    pub fn resolve(&self, path: &Path) -> std::io::Result<ResolvedPath> {
        let absolute = std::fs::canonicalize(join_if_relative(&self.cwd, path))?;
        let canonical = self.canonical(&absolute);
        Ok(ResolvedPath {
            absolute,
            canonical,
        })
    }

    /// Maps an absolute, canonicalized path to its display form.
    #[must_use]
    pub fn canonical(&self, absolute: &Path) -> CanonicalPath {
        match absolute.strip_prefix(&self.root) {
            Ok(relative) => CanonicalPath::from_relative(relative),
            Err(_) => CanonicalPath::from_absolute(absolute),
        }
    }

    /// Maps a canonical path back to a location on disk.
    #[must_use]
    pub fn to_absolute(&self, canonical: &CanonicalPath) -> PathBuf {
        if canonical.is_absolute() {
            PathBuf::from(canonical.as_str())
        } else {
            self.root.join(canonical.as_str())
        }
    }
}

fn join_if_relative(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn repo() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src/data")).unwrap();
        fs::create_dir_all(tmp.path().join("scripts")).unwrap();
        fs::write(tmp.path().join("src/data/bool.lean"), "").unwrap();
        tmp
    }

    #[test]
    fn from_relative_normalizes_separators_and_dot() {
        let p = CanonicalPath::from_relative(Path::new("./src/data/bool.lean"));
        assert_eq!(p.as_str(), "src/data/bool.lean");
        assert!(!p.is_absolute());
    }

    #[test]
    fn from_relative_collapses_parent_components() {
        let p = CanonicalPath::from_relative(Path::new("src/../src/data/./bool.lean"));
        assert_eq!(p.as_str(), "src/data/bool.lean");
        assert!(!p.escapes_root());
    }

    #[test]
    fn climbing_above_the_root_is_detected() {
        for path in ["../outside.lean", "src/../../outside.lean", "..", "src/.."] {
            let p = CanonicalPath::from_relative(Path::new(path));
            assert!(p.escapes_root(), "{path} should escape the root");
        }
        assert_eq!(
            CanonicalPath::from_relative(Path::new("src/../../a.lean")).as_str(),
            "../a.lean"
        );
    }

    #[test]
    fn absolute_detection() {
        assert!(is_absolute_str("/home/user/repo/src/a.lean"));
        assert!(is_absolute_str("C:\\repo\\src\\a.lean"));
        assert!(is_absolute_str("C:/repo/src/a.lean"));
        assert!(!is_absolute_str("src/a.lean"));
        assert!(!is_absolute_str("a.lean"));
    }

    #[test]
    fn relative_and_absolute_arguments_agree() {
        let tmp = repo();
        let scripts = tmp.path().join("scripts");
        let resolver = PathResolver::new(tmp.path(), &scripts).unwrap();

        let from_relative = resolver
            .resolve(Path::new("../src/data/bool.lean"))
            .unwrap();
        let from_absolute = resolver
            .resolve(&tmp.path().join("src/data/bool.lean"))
            .unwrap();

        assert_eq!(from_relative, from_absolute);
        assert_eq!(from_relative.canonical.as_str(), "src/data/bool.lean");
    }

    #[test]
    fn relative_root_is_resolved_against_cwd() {
        let tmp = repo();
        let scripts = tmp.path().join("scripts");
        let resolver = PathResolver::new(Path::new(".."), &scripts).unwrap();
        assert_eq!(resolver.root(), fs::canonicalize(tmp.path()).unwrap());
    }

    #[test]
    fn files_outside_root_keep_absolute_path() {
        let tmp = repo();
        let outside = TempDir::new().unwrap();
        let stray = outside.path().join("stray.lean");
        fs::write(&stray, "").unwrap();

        let resolver = PathResolver::new(tmp.path(), tmp.path()).unwrap();
        let resolved = resolver.resolve(&stray).unwrap();
        assert!(resolved.canonical.is_absolute());
        assert_eq!(resolver.to_absolute(&resolved.canonical), resolved.absolute);
    }

    #[test]
    fn missing_file_is_an_error() {
        let tmp = repo();
        let resolver = PathResolver::new(tmp.path(), tmp.path()).unwrap();
        let err = resolver.resolve(Path::new("src/missing.lean")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn to_absolute_round_trips_relative_paths() {
        let tmp = repo();
        let resolver = PathResolver::new(tmp.path(), tmp.path()).unwrap();
        let canonical = CanonicalPath::from_relative(Path::new("src/data/bool.lean"));
        assert_eq!(
            resolver.to_absolute(&canonical),
            resolver.root().join("src/data/bool.lean")
        );
    }
}
