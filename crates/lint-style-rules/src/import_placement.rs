//! Rule requiring all imports at the start of the file.
//!
//! `import` statements may only be preceded by comments (the copyright header)
//! and blank lines. Once code or the module docstring appears, any further
//! import is reported.

use lint_style_core::utils::LineKind;
use lint_style_core::{FileContext, Rule, Violation};

/// Rule code for import-placement.
pub const CODE: &str = "ERR_IMP";

/// Rule name for import-placement.
pub const NAME: &str = "import-placement";

/// Requires imports before any other content.
#[derive(Debug, Clone, Default)]
pub struct ImportPlacement;

impl ImportPlacement {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ImportPlacement {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires import statements before any other content"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let mut first_content: Option<usize> = None;
        let mut violations = Vec::new();

        for line in ctx.classified_lines() {
            if line.is_import() {
                if let Some(content_line) = first_content {
                    violations.push(ctx.violation_at(
                        CODE,
                        NAME,
                        line.number,
                        format!("Import statement after other content (line {content_line})"),
                    ));
                }
                continue;
            }

            let is_content = matches!(line.kind, LineKind::Code | LineKind::ModuleDoc);
            if is_content && first_content.is_none() {
                first_content = Some(line.number);
            }
        }

        violations
    }
}
