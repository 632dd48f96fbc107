//! Rule forbidding trailing whitespace.

use lint_style_core::{FileContext, Rule, Violation};

/// Rule code for trailing-whitespace.
pub const CODE: &str = "ERR_TWS";

/// Rule name for trailing-whitespace.
pub const NAME: &str = "trailing-whitespace";

/// Forbids spaces and tabs at the end of a line.
#[derive(Debug, Clone, Default)]
pub struct TrailingWhitespace;

impl TrailingWhitespace {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for TrailingWhitespace {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids trailing spaces and tabs"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        ctx.raw_lines()
            .map(|(n, line)| (n, line.strip_suffix('\r').unwrap_or(line)))
            .filter(|(_, line)| line.ends_with(&[' ', '\t'][..]))
            .map(|(n, _)| ctx.violation_at(CODE, NAME, n, "Trailing whitespace detected on line"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lint_style_core::CanonicalPath;
    use std::path::Path;

    fn check_code(content: &str) -> Vec<Violation> {
        let ctx = FileContext::new(
            Path::new("test.lean"),
            content,
            CanonicalPath::from_relative(Path::new("test.lean")),
        );
        TrailingWhitespace::new().check(&ctx)
    }

    #[test]
    fn test_detects_trailing_space_and_tab() {
        let violations = check_code("ok\nspace \ntab\t\n");
        let lines: Vec<_> = violations.iter().map(|v| v.location.line).collect();
        assert_eq!(lines, vec![Some(2), Some(3)]);
    }

    #[test]
    fn test_crlf_alone_is_not_whitespace() {
        assert!(check_code("ok\r\n").is_empty());
    }
}
