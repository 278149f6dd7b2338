//! Shared output formatting for scan results.

use anyhow::Result;
use style_lint_core::ViolationStore;

use crate::OutputFormat;

/// Print the store's violations in the specified format.
pub fn print(store: &ViolationStore, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(store),
        OutputFormat::Json => return print_json(store),
    }
    Ok(())
}

fn print_text(store: &ViolationStore) {
    for entry in store.entries() {
        println!("{entry}");
    }
}

fn print_json(store: &ViolationStore) -> Result<()> {
    let json = serde_json::to_string_pretty(&store.entries())?;
    println!("{json}");
    Ok(())
}
