//! Rule requiring a copyright header at the top of every file.
//!
//! # Rationale
//!
//! Every library file carries the same license notice. The header must come
//! before anything else in the file:
//!
//! ```text
//! /-
//! Copyright (c) 2017 Johannes Hölzl. All rights reserved.
//! Released under Apache 2.0 license as described in the file LICENSE.
//! Authors: Johannes Hölzl
//! -/
//! ```
//!
//! # Configuration
//!
//! - `license_line`: Expected third line (default: the Apache 2.0 notice)

use lint_style_core::{FileContext, Rule, Violation};

/// Rule code for copyright-header.
pub const CODE: &str = "ERR_COP";

/// Rule name for copyright-header.
pub const NAME: &str = "copyright-header";

/// License line expected on line 3 unless configured otherwise.
pub const DEFAULT_LICENSE_LINE: &str =
    "Released under Apache 2.0 license as described in the file LICENSE.";

const MISSING_MESSAGE: &str = "Malformed or missing copyright header";

/// Requires the copyright and license header block.
#[derive(Debug, Clone)]
pub struct CopyrightHeader {
    license_line: String,
}

impl Default for CopyrightHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl CopyrightHeader {
    /// Creates a new rule expecting the default license line.
    #[must_use]
    pub fn new() -> Self {
        Self {
            license_line: DEFAULT_LICENSE_LINE.to_string(),
        }
    }

    /// Sets the license line expected on line 3.
    #[must_use]
    pub fn license_line(mut self, line: impl Into<String>) -> Self {
        self.license_line = line.into();
        self
    }

    /// Returns the first header problem as `(line, message)`.
    fn first_problem(&self, lines: &[&str]) -> Option<(usize, String)> {
        if lines.first() != Some(&"/-") {
            return Some((1, MISSING_MESSAGE.to_string()));
        }

        if !lines.get(1).is_some_and(|l| is_copyright_line(l)) {
            return Some((
                2,
                format!(
                    "{MISSING_MESSAGE}: line 2 should look like \
                     'Copyright (c) 2024 Jane Doe. All rights reserved.'"
                ),
            ));
        }

        if lines.get(2) != Some(&self.license_line.as_str()) {
            return Some((
                3,
                format!("{MISSING_MESSAGE}: line 3 should be '{}'", self.license_line),
            ));
        }

        if !lines.get(3).is_some_and(|l| is_authors_line(l)) {
            return Some((
                4,
                format!("{MISSING_MESSAGE}: line 4 should start with 'Authors:'"),
            ));
        }

        // Author lists may wrap; the block ends at the first `-/` line.
        for line in lines.iter().skip(4) {
            if *line == "-/" {
                return None;
            }
            if line.trim().is_empty() || line.contains("-/") {
                break;
            }
        }

        Some((
            4,
            format!("{MISSING_MESSAGE}: header is not closed by a '-/' line"),
        ))
    }
}

/// Matches `Copyright (c) <year> <holders>. All rights reserved.`
fn is_copyright_line(line: &str) -> bool {
    let Some(rest) = line.strip_prefix("Copyright (c) ") else {
        return false;
    };
    let year_ok = rest
        .get(..4)
        .is_some_and(|year| year.chars().all(|c| c.is_ascii_digit()));
    year_ok && rest[4..].starts_with(' ') && rest.ends_with("All rights reserved.")
}

/// Matches the start of an authors line.
pub(crate) fn is_authors_line(line: &str) -> bool {
    line.starts_with("Authors:") || line.starts_with("Author:")
}

impl Rule for CopyrightHeader {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires the copyright header block at the top of the file"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let lines: Vec<&str> = ctx.raw_lines().map(|(_, l)| l.trim_end()).collect();

        self.first_problem(&lines)
            .map(|(line, message)| ctx.violation_at(CODE, NAME, line, message))
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lint_style_core::CanonicalPath;
    use std::path::Path;

    const GOOD_HEADER: &str = "/-\n\
        Copyright (c) 2017 Johannes Hölzl. All rights reserved.\n\
        Released under Apache 2.0 license as described in the file LICENSE.\n\
        Authors: Johannes Hölzl\n\
        -/\n\
        import logic.basic\n";

    fn check_with(rule: &CopyrightHeader, content: &str) -> Vec<Violation> {
        let ctx = FileContext::new(
            Path::new("test.lean"),
            content,
            CanonicalPath::from_relative(Path::new("test.lean")),
        );
        rule.check(&ctx)
    }

    fn check_code(content: &str) -> Vec<Violation> {
        check_with(&CopyrightHeader::new(), content)
    }

    #[test]
    fn test_accepts_standard_header() {
        assert!(check_code(GOOD_HEADER).is_empty());
    }

    #[test]
    fn test_detects_missing_header() {
        let violations = check_code("example : 37 = 37\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, "ERR_COP");
        assert_eq!(violations[0].location.line, Some(1));
        assert!(violations[0].to_string().contains("ERR_COP :"));
    }

    #[test]
    fn test_detects_empty_file() {
        let violations = check_code("");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location.line, Some(1));
    }

    #[test]
    fn test_detects_bad_copyright_line() {
        let content = GOOD_HEADER.replace("Copyright (c) 2017", "Copyright 2017");
        let violations = check_code(&content);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location.line, Some(2));
    }

    #[test]
    fn test_detects_wrong_license() {
        let content = GOOD_HEADER.replace("Apache 2.0", "MIT");
        let violations = check_code(&content);
        assert_eq!(violations[0].location.line, Some(3));
    }

    #[test]
    fn test_detects_missing_authors() {
        let content = GOOD_HEADER.replace("Authors: Johannes Hölzl", "By Johannes Hölzl");
        let violations = check_code(&content);
        assert_eq!(violations[0].location.line, Some(4));
    }

    #[test]
    fn test_accepts_wrapped_author_list() {
        let content = GOOD_HEADER.replace(
            "Authors: Johannes Hölzl\n",
            "Authors: Johannes Hölzl, Mario Carneiro,\n  Scott Morrison\n",
        );
        assert!(check_code(&content).is_empty());
    }

    #[test]
    fn test_detects_unclosed_header() {
        let content = GOOD_HEADER.replace("-/\n", "\n");
        let violations = check_code(&content);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("not closed"));
    }

    #[test]
    fn test_accepts_crlf_header() {
        let content = GOOD_HEADER.replace('\n', "\r\n");
        assert!(check_code(&content).is_empty());
    }

    #[test]
    fn test_custom_license_line() {
        let rule = CopyrightHeader::new().license_line("Released under MIT license.");
        let content = GOOD_HEADER.replace(DEFAULT_LICENSE_LINE, "Released under MIT license.");
        assert!(check_with(&rule, &content).is_empty());
        assert_eq!(check_with(&rule, GOOD_HEADER).len(), 1);
    }
}
