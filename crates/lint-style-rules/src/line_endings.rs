//! Rule forbidding Windows line endings.

use lint_style_core::{FileContext, Rule, Violation};

/// Rule code for windows-line-ending.
pub const CODE: &str = "ERR_WIN";

/// Rule name for windows-line-ending.
pub const NAME: &str = "windows-line-ending";

/// Forbids `\r\n` line endings. Reported once per file, at the first offending line.
#[derive(Debug, Clone, Default)]
pub struct WindowsLineEnding;

impl WindowsLineEnding {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for WindowsLineEnding {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids Windows (CRLF) line endings"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let mut offending = ctx.raw_lines().filter(|(_, line)| line.ends_with('\r'));
        let Some((first, _)) = offending.next() else {
            return Vec::new();
        };
        let count = 1 + offending.count();

        vec![ctx.violation_at(
            CODE,
            NAME,
            first,
            format!("Windows line endings (\\r\\n) detected on {count} line(s)"),
        )]
    }
}
