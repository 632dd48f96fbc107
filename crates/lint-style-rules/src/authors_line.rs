//! Rule checking the format of the `Authors:` header line.
//!
//! Author names are separated by commas, with no trailing period:
//!
//! ```text
//! Authors: Jean Dupont, Иван Иванович Иванов
//! ```
//!
//! Only the authors line inside the leading header block is checked. A file
//! without a header is reported by `copyright-header` instead.

use crate::copyright_header::is_authors_line;
use lint_style_core::{FileContext, Rule, Violation};

/// Rule code for authors-line.
pub const CODE: &str = "ERR_AUT";

/// Rule name for authors-line.
pub const NAME: &str = "authors-line";

const MESSAGE: &str =
    "Authors line should look like: 'Authors: Jean Dupont, Иван Иванович Иванов'";

/// Checks the authors line of the copyright header.
#[derive(Debug, Clone, Default)]
pub struct AuthorsLine;

impl AuthorsLine {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for AuthorsLine {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires comma-separated author names without a trailing period"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let mut lines = ctx.raw_lines().map(|(n, l)| (n, l.trim_end()));
        if lines.next().map(|(_, l)| l) != Some("/-") {
            return Vec::new();
        }

        let Some((number, line)) = lines
            .take_while(|(_, l)| *l != "-/")
            .find(|(_, l)| is_authors_line(l))
        else {
            return Vec::new();
        };

        if line.contains(" and ") || line.ends_with('.') {
            vec![ctx.violation_at(CODE, NAME, number, MESSAGE)]
        } else {
            Vec::new()
        }
    }
}
