//! Configuration types for style-lint.
//!
//! The rule set is fixed; configuration only shapes which files a run
//! picks up and how it reacts to failing files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration for style-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or a glob pattern is malformed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.analyzer.validate()?;
        Ok(config)
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Glob patterns matched against the full path; matches are skipped.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Glob patterns matched against the file name (if empty, every file
    /// with a configured extension).
    #[serde(default)]
    pub include: Vec<String>,

    /// File extensions to scan, without the dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    /// Stop at the first file that cannot be read or parsed.
    #[serde(default)]
    pub fail_fast: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            exclude: default_exclude(),
            include: Vec::new(),
            extensions: default_extensions(),
            respect_gitignore: true,
            fail_fast: false,
        }
    }
}

impl AnalyzerConfig {
    /// Checks that every glob pattern compiles.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] naming the first malformed pattern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for pattern in self.exclude.iter().chain(&self.include) {
            glob::Pattern::new(pattern).map_err(|e| ConfigError::Parse {
                message: format!("invalid glob pattern '{pattern}': {e}"),
            })?;
        }
        Ok(())
    }

    /// Checks whether `path` should be picked up by a directory scan.
    #[must_use]
    pub fn accepts(&self, path: &Path) -> bool {
        self.has_extension(path) && self.is_included(path) && !self.is_excluded(path)
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn is_included(&self, path: &Path) -> bool {
        if self.include.is_empty() {
            return true;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.include
            .iter()
            .filter_map(|p| glob::Pattern::new(p).ok())
            .any(|p| p.matches(name))
    }

    /// Checks whether `path` matches an exclude pattern.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.exclude
            .iter()
            .filter_map(|p| glob::Pattern::new(p).ok())
            .any(|p| p.matches(&path_str))
    }
}

fn default_exclude() -> Vec<String> {
    vec![
        "**/venv/**".to_string(),
        "**/.venv/**".to_string(),
        "**/__pycache__/**".to_string(),
    ]
}

fn default_extensions() -> Vec<String> {
    vec!["py".to_string()]
}

fn default_true() -> bool {
    true
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.analyzer.respect_gitignore);
        assert!(!config.analyzer.fail_fast);
        assert_eq!(config.analyzer.extensions, vec!["py"]);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[analyzer]
exclude = ["**/generated/**"]
include = ["test_*.py"]
fail_fast = true
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.exclude, vec!["**/generated/**"]);
        assert!(config.analyzer.fail_fast);
        assert_eq!(config.analyzer.extensions, vec!["py"]);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").expect("Failed to parse");
        assert_eq!(config.analyzer.exclude.len(), 3);
    }

    #[test]
    fn test_invalid_glob_rejected() {
        let err = Config::parse("[analyzer]\nexclude = [\"a[\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style-lint.toml");
        std::fs::write(&path, "[analyzer]\nextensions = [\"py\", \"pyi\"]\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.analyzer.extensions, vec!["py", "pyi"]);

        let missing = Config::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
    }

    #[test]
    fn test_accepts() {
        let config = Config::parse("[analyzer]\ninclude = [\"test_*.py\"]\n").unwrap();
        let analyzer = &config.analyzer;

        assert!(analyzer.accepts(Path::new("/proj/test_1.py")));
        assert!(!analyzer.accepts(Path::new("/proj/main.py")));
        assert!(!analyzer.accepts(Path::new("/proj/test_1.txt")));
        assert!(!analyzer.accepts(Path::new("/proj/venv/lib/test_1.py")));
    }
}
