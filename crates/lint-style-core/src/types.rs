//! Core types for style violations and lint reports.

use crate::utils::paths::CanonicalPath;
use serde::{Deserialize, Serialize};

/// Source location of a violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Canonical path of the file (root-relative when inside the repository).
    pub file: CanonicalPath,
    /// Line number (1-indexed). `None` for file-level violations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Location {
    /// Creates a location pointing at a specific line.
    #[must_use]
    pub fn new(file: CanonicalPath, line: usize) -> Self {
        Self {
            file,
            line: Some(line),
        }
    }

    /// Creates a location covering the whole file.
    #[must_use]
    pub fn file_level(file: CanonicalPath) -> Self {
        Self { file, line: None }
    }
}

/// A style violation found in a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "`ERR_COP`").
    pub code: String,
    /// Rule name (e.g., "copyright-header").
    pub rule: String,
    /// Where the violation was found.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            location,
            message: message.into(),
        }
    }
}

/// Renders the stable report line.
///
/// ```text
/// src/data/bool.lean : line 1 : ERR_COP : Malformed or missing copyright header
/// src/data/bool.lean : ERR_MOD : Module docstring missing, or too late
/// ```
impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.location.line {
            Some(line) => write!(
                f,
                "{} : line {} : {} : {}",
                self.location.file, line, self.code, self.message
            ),
            None => write!(
                f,
                "{} : {} : {}",
                self.location.file, self.code, self.message
            ),
        }
    }
}

/// Returns true if `s` looks like a rule code (`ERR_COP`, `ERR_LIN`, ...).
///
/// Rule codes are upper-case ASCII letters, digits and underscores, starting
/// with a letter and containing at least one underscore.
#[must_use]
pub fn is_rule_code(s: &str) -> bool {
    let mut chars = s.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_uppercase());
    starts_with_letter
        && s.contains('_')
        && s
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Result of a lint run.
///
/// `reported` and `suppressed` together hold every violation the rules found;
/// the exception ledger only decides which of the two lists a violation lands in.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintReport {
    /// Violations not covered by the exception ledger.
    pub reported: Vec<Violation>,
    /// Violations matched by an exception ledger entry.
    pub suppressed: Vec<Violation>,
    /// Number of files checked.
    pub files_checked: usize,
}

impl LintReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any violation remains after suppression.
    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.reported.is_empty()
    }

    /// Iterates over every violation found, reported or suppressed.
    pub fn all_violations(&self) -> impl Iterator<Item = &Violation> {
        self.reported.iter().chain(self.suppressed.iter())
    }

    /// Sorts both lists by file, then line, then code.
    pub fn sort(&mut self) {
        self.reported.sort_by(compare_violations);
        self.suppressed.sort_by(compare_violations);
    }

    /// One-line summary for logs.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Found {} violation(s) ({} suppressed by exceptions) in {} file(s)",
            self.reported.len(),
            self.suppressed.len(),
            self.files_checked
        )
    }
}

fn compare_violations(a: &Violation, b: &Violation) -> std::cmp::Ordering {
    a.location
        .file
        .cmp(&b.location.file)
        .then(a.location.line.cmp(&b.location.line))
        .then(a.code.cmp(&b.code))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(line: Option<usize>) -> Violation {
        let file = CanonicalPath::from_relative(std::path::Path::new("src/data/bool.lean"));
        let location = match line {
            Some(n) => Location::new(file, n),
            None => Location::file_level(file),
        };
        Violation::new(
            "ERR_COP",
            "copyright-header",
            location,
            "Malformed or missing copyright header",
        )
    }

    #[test]
    fn display_with_line() {
        let v = make_violation(Some(1));
        assert_eq!(
            v.to_string(),
            "src/data/bool.lean : line 1 : ERR_COP : Malformed or missing copyright header"
        );
    }

    #[test]
    fn display_file_level() {
        let v = make_violation(None);
        assert_eq!(
            v.to_string(),
            "src/data/bool.lean : ERR_COP : Malformed or missing copyright header"
        );
    }

    #[test]
    fn display_contains_greppable_code_token() {
        assert!(make_violation(Some(3)).to_string().contains("ERR_COP :"));
        assert!(make_violation(None).to_string().contains("ERR_COP :"));
    }

    #[test]
    fn rule_code_recognition() {
        assert!(is_rule_code("ERR_COP"));
        assert!(is_rule_code("ERR_LIN2"));
        assert!(!is_rule_code("err_cop"));
        assert!(!is_rule_code("ERRCOP"));
        assert!(!is_rule_code("_ERR"));
        assert!(!is_rule_code("line 3"));
        assert!(!is_rule_code(""));
    }

    #[test]
    fn report_sorting_orders_file_level_first() {
        let mut report = LintReport::new();
        report.reported.push(make_violation(Some(4)));
        report.reported.push(make_violation(None));
        report.sort();
        assert_eq!(report.reported[0].location.line, None);
        assert_eq!(report.reported[1].location.line, Some(4));
    }

    #[test]
    fn has_violations_ignores_suppressed() {
        let mut report = LintReport::new();
        report.suppressed.push(make_violation(Some(1)));
        assert!(!report.has_violations());
        assert_eq!(report.all_violations().count(), 1);
    }
}
