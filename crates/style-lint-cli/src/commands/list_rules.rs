//! List rules command implementation.

use style_lint_rules::catalog;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<6} {:<26} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in catalog() {
        println!("{:<6} {:<26} {}", rule.code, rule.name, rule.description);
    }
}
