//! Context types for rule execution.

use crate::types::{Location, Violation};
use crate::utils::lines::{classify_lines, raw_lines, ClassifiedLine};
use crate::utils::paths::CanonicalPath;
use std::path::Path;

/// Context provided to per-file rules.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file on disk.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Canonical path used in reports and exception matching.
    pub display_path: CanonicalPath,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, display_path: CanonicalPath) -> Self {
        Self {
            path,
            content,
            display_path,
        }
    }

    /// Iterates over numbered lines, keeping any trailing `\r`.
    pub fn raw_lines(&self) -> impl Iterator<Item = (usize, &'a str)> {
        raw_lines(self.content)
    }

    /// Classifies every line of the file.
    #[must_use]
    pub fn classified_lines(&self) -> Vec<ClassifiedLine<'a>> {
        classify_lines(self.content)
    }

    /// Location of `line` in this file.
    #[must_use]
    pub fn at_line(&self, line: usize) -> Location {
        Location::new(self.display_path.clone(), line)
    }

    /// Location covering this whole file.
    #[must_use]
    pub fn whole_file(&self) -> Location {
        Location::file_level(self.display_path.clone())
    }

    /// Shorthand for building a violation at `line`.
    #[must_use]
    pub fn violation_at(
        &self,
        code: &str,
        rule: &str,
        line: usize,
        message: impl Into<String>,
    ) -> Violation {
        Violation::new(code, rule, self.at_line(line), message)
    }
}
