//! The built-in rule set and its configuration.

use crate::{
    AuthorsLine, CopyrightHeader, ImportPlacement, LineLength, ModuleDocstring,
    TrailingWhitespace, WindowsLineEnding,
};
use lint_style_core::{Config, RuleBox};

/// Returns every built-in rule with default settings.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(CopyrightHeader::new()),
        Box::new(AuthorsLine::new()),
        Box::new(ImportPlacement::new()),
        Box::new(ModuleDocstring::new()),
        Box::new(LineLength::new()),
        Box::new(WindowsLineEnding::new()),
        Box::new(TrailingWhitespace::new()),
    ]
}

/// Returns every built-in rule with options taken from `config`.
///
/// Enabling and disabling is left to the linter, which consults
/// [`Config::is_rule_enabled`] per rule.
#[must_use]
pub fn configured_rules(config: &Config) -> Vec<RuleBox> {
    let mut copyright = CopyrightHeader::new();
    if let Some(rule_config) = config.rule(crate::copyright_header::NAME) {
        copyright = copyright.license_line(
            rule_config.get_str("license_line", crate::copyright_header::DEFAULT_LICENSE_LINE),
        );
    }

    let mut line_length = LineLength::new();
    if let Some(rule_config) = config.rule(crate::line_length::NAME) {
        let default = i64::try_from(crate::line_length::DEFAULT_MAX_LENGTH).unwrap_or(i64::MAX);
        match usize::try_from(rule_config.get_int("max_length", default)) {
            Ok(max) => line_length = line_length.max_length(max),
            Err(_) => tracing::warn!(
                "Ignoring negative max_length for {}",
                crate::line_length::NAME
            ),
        }
    }

    vec![
        Box::new(copyright),
        Box::new(AuthorsLine::new()),
        Box::new(ImportPlacement::new()),
        Box::new(ModuleDocstring::new()),
        Box::new(line_length),
        Box::new(WindowsLineEnding::new()),
        Box::new(TrailingWhitespace::new()),
    ]
}
