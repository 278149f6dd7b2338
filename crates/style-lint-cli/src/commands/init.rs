//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# style-lint configuration

[analyzer]
# Glob patterns matched against the full path; matching files are skipped
exclude = [
    "**/venv/**",
    "**/.venv/**",
    "**/__pycache__/**",
]

# Glob patterns matched against the file name (empty: every .py file)
# include = ["test_*.py"]

# File extensions to scan
extensions = ["py"]

# Respect .gitignore files
respect_gitignore = true

# Stop at the first file that cannot be read or parsed
fail_fast = false
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("style-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created style-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit style-lint.toml to choose which files are checked");
    println!("  2. Run: style-lint check");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use style_lint_core::Config;

    #[test]
    fn default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.analyzer.exclude.len(), 3);
        assert!(config.analyzer.include.is_empty());
        assert!(!config.analyzer.fail_fast);
    }
}
