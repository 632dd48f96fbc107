//! `--list-rules` implementation.

use lint_style_rules::all_rules;

/// Prints the built-in rules.
pub fn run() {
    println!("{:<10} {:<22} Description", "Code", "Name");
    println!("{}", "-".repeat(78));

    for rule in all_rules() {
        println!(
            "{:<10} {:<22} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nDisable a rule in lint-style.toml, e.g.:");
    println!("  [rules.line-length]");
    println!("  enabled = false");
}
