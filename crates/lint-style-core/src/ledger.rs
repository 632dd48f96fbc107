//! Exception ledger: the persisted allow-list of known violations.
//!
//! Each entry pairs a root-relative file path with a rule code. A violation
//! whose `(file, code)` pair is in the ledger is suppressed from reports; it is
//! still found by the rules, only reported differently.
//!
//! The on-disk format is one entry per line, sorted:
//!
//! ```text
//! src/data/bool.lean : ERR_COP
//! src/logic/basic.lean : ERR_LIN
//! ```
//!
//! The rule code is always the last field, so paths may themselves contain
//! ` : `. Full report lines (`path : line 3 : ERR_LIN : message`) are accepted
//! on load as well. Blank lines and comment lines (`#` alone or followed by a
//! space) are skipped.

use crate::types::{is_rule_code, Violation};
use crate::utils::paths::{is_absolute_str, CanonicalPath};
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default ledger location, relative to the repository root.
pub const DEFAULT_LEDGER_PATH: &str = "scripts/style-exceptions.txt";

const FIELD_SEPARATOR: &str = " : ";

/// Errors reading, parsing or writing the ledger.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// IO error on the ledger file.
    #[error("Failed to access exception ledger {path}: {source}")]
    Io {
        /// Ledger file path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// An entry names an absolute path.
    #[error("Exception ledger line {line} has an absolute path '{path}'; regenerate the ledger")]
    AbsolutePath {
        /// Line number (1-indexed), 0 when not read from a file.
        line: usize,
        /// The offending path.
        path: String,
    },

    /// A path that would not read back as the same entry.
    #[error("Path '{path}' cannot be recorded in the exception ledger")]
    UnrepresentablePath {
        /// The offending path.
        path: String,
    },

    /// A line could not be parsed, or names a path outside the root.
    #[error("Exception ledger line {line} is malformed: '{content}'")]
    Malformed {
        /// Line number (1-indexed).
        line: usize,
        /// The offending line.
        content: String,
    },
}

/// A single accepted `(file, rule code)` pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ExceptionEntry {
    /// Root-relative file path.
    pub file: CanonicalPath,
    /// Rule code.
    pub code: String,
}

impl ExceptionEntry {
    /// Creates an entry.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AbsolutePath`] if `file` is absolute, and
    /// [`LedgerError::UnrepresentablePath`] if it is not below the root or
    /// would be read back as a comment or a different path.
    pub fn new(file: CanonicalPath, code: impl Into<String>) -> Result<Self, LedgerError> {
        if file.is_absolute() {
            return Err(LedgerError::AbsolutePath {
                line: 0,
                path: file.to_string(),
            });
        }
        if !is_representable(&file) {
            return Err(LedgerError::UnrepresentablePath {
                path: file.to_string(),
            });
        }
        Ok(Self {
            file,
            code: code.into(),
        })
    }

    /// The entry that would suppress `violation`, if it can be recorded at all.
    ///
    /// Violations in files outside the repository root have no entry.
    #[must_use]
    pub fn for_violation(violation: &Violation) -> Option<Self> {
        Self::new(violation.location.file.clone(), violation.code.clone()).ok()
    }

    fn parse_line(line_no: usize, line: &str) -> Result<Self, LedgerError> {
        let malformed = || LedgerError::Malformed {
            line: line_no,
            content: line.to_string(),
        };

        let (path, code) = split_short_form(line)
            .or_else(|| split_report_form(line))
            .ok_or_else(malformed)?;

        if is_absolute_str(path) {
            return Err(LedgerError::AbsolutePath {
                line: line_no,
                path: path.to_string(),
            });
        }

        let file = CanonicalPath::from_relative(Path::new(path));
        if file.escapes_root() {
            return Err(malformed());
        }

        Ok(Self {
            file,
            code: code.to_string(),
        })
    }
}

/// `path : CODE`, where the path may itself contain the separator.
fn split_short_form(line: &str) -> Option<(&str, &str)> {
    let (path, code) = line.rsplit_once(FIELD_SEPARATOR)?;
    let (path, code) = (path.trim(), code.trim());
    (!path.is_empty() && is_rule_code(code)).then_some((path, code))
}

/// `path : line N : CODE : message` or `path : CODE : message`.
fn split_report_form(line: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    let mut previous: Option<(usize, &str)> = None;

    for field in line.split(FIELD_SEPARATOR) {
        let start = offset;
        offset += field.len() + FIELD_SEPARATOR.len();

        if start > 0 && is_rule_code(field.trim()) {
            let path_end = match previous {
                Some((prev_start, prev)) if prev_start > 0 && is_line_field(prev) => {
                    prev_start - FIELD_SEPARATOR.len()
                }
                _ => start - FIELD_SEPARATOR.len(),
            };
            let path = line[..path_end].trim();
            return (!path.is_empty()).then_some((path, field.trim()));
        }
        previous = Some((start, field));
    }
    None
}

fn is_line_field(field: &str) -> bool {
    field
        .trim()
        .strip_prefix("line ")
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

fn is_comment(line: &str) -> bool {
    line == "#" || line.starts_with("# ")
}

/// Whether `file : CODE` parses back to exactly `file`.
fn is_representable(file: &CanonicalPath) -> bool {
    let s = file.as_str();
    !file.escapes_root()
        && s == s.trim()
        && !s.contains(&['\n', '\r'][..])
        && !is_comment(s)
}

impl std::fmt::Display for ExceptionEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{FIELD_SEPARATOR}{}", self.file, self.code)
    }
}

/// Entries gained and lost between two ledgers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LedgerDiff {
    /// Entries only in the newer ledger.
    pub added: Vec<ExceptionEntry>,
    /// Entries only in the older ledger.
    pub removed: Vec<ExceptionEntry>,
}

impl LedgerDiff {
    /// Returns true if both ledgers hold the same entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Ordered set of accepted violations.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExceptionLedger {
    entries: BTreeSet<ExceptionEntry>,
}

impl ExceptionLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger accepting every given violation inside the repository.
    #[must_use]
    pub fn from_violations<'a, I>(violations: I) -> Self
    where
        I: IntoIterator<Item = &'a Violation>,
    {
        let mut entries = BTreeSet::new();
        for violation in violations {
            let file = &violation.location.file;
            match ExceptionEntry::new(file.clone(), violation.code.clone()) {
                Ok(entry) => {
                    entries.insert(entry);
                }
                Err(LedgerError::AbsolutePath { .. }) => {
                    tracing::debug!("Not recording {file}: outside the repository root");
                }
                Err(e) => tracing::warn!("Not recording {} for {file}: {e}", violation.code),
            }
        }
        Self { entries }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the ledger has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &ExceptionEntry> {
        self.entries.iter()
    }

    /// Adds an entry. Returns false if it was already present.
    pub fn insert(&mut self, entry: ExceptionEntry) -> bool {
        self.entries.insert(entry)
    }

    /// Removes an entry. Returns false if it was absent.
    pub fn remove(&mut self, entry: &ExceptionEntry) -> bool {
        self.entries.remove(entry)
    }

    /// Returns true if the entry is present.
    #[must_use]
    pub fn contains_entry(&self, entry: &ExceptionEntry) -> bool {
        self.entries.contains(entry)
    }

    /// Returns true if `violation` is covered by an entry.
    #[must_use]
    pub fn suppresses(&self, violation: &Violation) -> bool {
        ExceptionEntry::for_violation(violation).is_some_and(|e| self.entries.contains(&e))
    }

    /// Splits violations into `(reported, suppressed)`.
    #[must_use]
    pub fn partition(&self, violations: Vec<Violation>) -> (Vec<Violation>, Vec<Violation>) {
        let (suppressed, reported): (Vec<_>, Vec<_>) =
            violations.into_iter().partition(|v| self.suppresses(v));
        (reported, suppressed)
    }

    /// Compares against a newer ledger.
    #[must_use]
    pub fn diff(&self, newer: &Self) -> LedgerDiff {
        LedgerDiff {
            added: newer.entries.difference(&self.entries).cloned().collect(),
            removed: self.entries.difference(&newer.entries).cloned().collect(),
        }
    }

    /// Parses ledger text.
    ///
    /// # Errors
    ///
    /// Returns an error on a malformed line or an absolute path.
    pub fn parse(content: &str) -> Result<Self, LedgerError> {
        let mut entries = BTreeSet::new();
        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || is_comment(line) {
                continue;
            }
            entries.insert(ExceptionEntry::parse_line(i + 1, line)?);
        }
        Ok(Self { entries })
    }

    /// Renders the ledger in its canonical on-disk form.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.to_string());
            out.push('\n');
        }
        out
    }

    /// Returns true if the file at `path` holds exactly what [`Self::save`]
    /// would write. A missing file matches an empty ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn is_saved_at(&self, path: &Path) -> Result<bool, LedgerError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(content == self.render()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(self.is_empty()),
            Err(e) => Err(LedgerError::Io {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Loads a ledger file. A missing file is an empty ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, LedgerError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No exception ledger at {}, starting empty", path.display());
                Ok(Self::new())
            }
            Err(e) => Err(LedgerError::Io {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Writes the ledger, replacing any existing file in one rename.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), LedgerError> {
        let io_err = |source| LedgerError::Io {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(io_err)?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
        tmp.write_all(self.render().as_bytes()).map_err(io_err)?;
        tmp.persist(path).map_err(|e| io_err(e.error))?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ExceptionLedger {
    type Item = &'a ExceptionEntry;
    type IntoIter = std::collections::btree_set::Iter<'a, ExceptionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
