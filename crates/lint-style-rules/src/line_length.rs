//! Rule limiting line length.
//!
//! # Configuration
//!
//! - `max_length`: Maximum characters per line (default: 100)
//!
//! Lines containing a URL are exempt, since links cannot be wrapped.

use lint_style_core::{FileContext, Rule, Violation};

/// Rule code for line-length.
pub const CODE: &str = "ERR_LIN";

/// Rule name for line-length.
pub const NAME: &str = "line-length";

/// Default maximum line length in characters.
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// Limits the number of characters per line.
#[derive(Debug, Clone)]
pub struct LineLength {
    max_length: usize,
}

impl Default for LineLength {
    fn default() -> Self {
        Self::new()
    }
}

impl LineLength {
    /// Creates a new rule with the default limit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    /// Sets the maximum line length.
    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = max;
        self
    }
}

impl Rule for LineLength {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Limits lines to a maximum number of characters"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        ctx.raw_lines()
            .map(|(n, line)| (n, line.strip_suffix('\r').unwrap_or(line)))
            .filter(|(_, line)| line.chars().count() > self.max_length)
            .filter(|(_, line)| !line.contains("http://") && !line.contains("https://"))
            .map(|(n, _)| {
                ctx.violation_at(
                    CODE,
                    NAME,
                    n,
                    format!("Line has more than {} characters", self.max_length),
                )
            })
            .collect()
    }
}
