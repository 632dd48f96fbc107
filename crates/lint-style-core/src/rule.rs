//! Rule trait for defining style rules.

use crate::context::FileContext;
use crate::types::Violation;

/// A per-file style rule.
///
/// Rules see the raw file content and report zero or more violations. They
/// never modify the file.
///
/// # Example
///
/// ```ignore
/// use lint_style_core::{FileContext, Rule, Violation};
///
/// pub struct NoTabs;
///
/// impl Rule for NoTabs {
///     fn name(&self) -> &'static str { "no-tabs" }
///     fn code(&self) -> &'static str { "ERR_TAB" }
///
///     fn check(&self, ctx: &FileContext) -> Vec<Violation> {
///         ctx.raw_lines()
///             .filter(|(_, line)| line.contains('\t'))
///             .map(|(n, _)| ctx.violation_at(self.code(), self.name(), n, "Tab character"))
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "copyright-header").
    fn name(&self) -> &'static str;

    /// Returns the stable rule code (e.g., "`ERR_COP`").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Checks a single file and returns any violations found.
    fn check(&self, ctx: &FileContext) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::paths::CanonicalPath;
    use std::path::Path;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "ERR_TST"
        }

        fn check(&self, ctx: &FileContext) -> Vec<Violation> {
            vec![ctx.violation_at(self.code(), self.name(), 1, "Test violation")]
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "ERR_TST");
        assert_eq!(rule.description(), "");

        let ctx = FileContext::new(
            Path::new("a.lean"),
            "",
            CanonicalPath::from_relative(Path::new("a.lean")),
        );
        assert_eq!(rule.check(&ctx).len(), 1);
    }
}
