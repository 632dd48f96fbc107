//! Rule requiring a module docstring before the first declaration.
//!
//! # Rationale
//!
//! Each file documents what it contains in a `/-! ... -/` block. The block
//! may follow imports and scoping commands (`open`, `namespace`, `universe`,
//! ...), but not any declaration.

use lint_style_core::utils::lines::starts_with_keyword;
use lint_style_core::utils::LineKind;
use lint_style_core::{FileContext, Rule, Violation};

/// Rule code for module-docstring.
pub const CODE: &str = "ERR_MOD";

/// Rule name for module-docstring.
pub const NAME: &str = "module-docstring";

/// Commands allowed before the module docstring.
const PREAMBLE_KEYWORDS: &[&str] = &[
    "import",
    "prelude",
    "open",
    "namespace",
    "section",
    "universe",
    "universes",
    "variable",
    "variables",
    "set_option",
];

/// Requires a module docstring ahead of any declaration.
#[derive(Debug, Clone, Default)]
pub struct ModuleDocstring;

impl ModuleDocstring {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn is_preamble(line: &str) -> bool {
    let line = line.trim_start();
    line.starts_with("noncomputable theory")
        || PREAMBLE_KEYWORDS
            .iter()
            .any(|keyword| starts_with_keyword(line, keyword))
}

impl Rule for ModuleDocstring {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires a module docstring before the first declaration"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let mut first_declaration: Option<usize> = None;

        for line in ctx.classified_lines() {
            match line.kind {
                LineKind::ModuleDoc => {
                    let Some(decl) = first_declaration else {
                        return Vec::new();
                    };
                    let message =
                        format!("Module docstring appears after the first declaration (line {decl})");
                    return vec![ctx.violation_at(CODE, NAME, line.number, message)];
                }
                LineKind::Code if first_declaration.is_none() && !is_preamble(line.text) => {
                    first_declaration = Some(line.number);
                }
                _ => {}
            }
        }

        vec![Violation::new(
            CODE,
            NAME,
            ctx.whole_file(),
            "Module docstring missing, or too late",
        )]
    }
}
