//! Check command implementation.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use style_lint_core::{Analyzer, AnalyzerConfig, Config};
use style_lint_rules::{line_rules, structural_rules};
use style_lint_ts::PythonParser;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
///
/// Exits with code 1 if any violation was found or any file failed to scan.
pub fn run(
    path: &Path,
    format: OutputFormat,
    exclude: &[String],
    source: &ConfigSource,
) -> Result<ExitCode> {
    let mut config = load_config(source)?;
    config.analyzer.exclude.extend(exclude.iter().cloned());
    config
        .analyzer
        .validate()
        .context("Invalid --exclude pattern")?;

    let files = discover_files(path, &config.analyzer)?;

    let analyzer = Analyzer::builder(PythonParser::new())
        .line_rules(line_rules())
        .structural_rules(structural_rules())
        .config(&config.analyzer)
        .build();

    tracing::info!(
        "Checking {} file(s) under {} with {} rules",
        files.len(),
        path.display(),
        analyzer.rule_count()
    );

    let run = analyzer.scan_paths(&files);

    super::output::print(&run.store, format)?;

    for failure in &run.failures {
        eprintln!("error: {failure}");
    }

    if run.has_violations() || run.has_failures() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    match source {
        ConfigSource::Default => Ok(Config::default()),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p).with_context(|| format!("Failed to load config: {}", p.display()))
        }
    }
}

/// Collects the files to scan, sorted by path.
///
/// A file argument is scanned as given; a directory is walked and filtered
/// through the configured extensions, include and exclude patterns.
fn discover_files(root: &Path, config: &AnalyzerConfig) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.is_dir() {
        anyhow::bail!("No such file or directory: {}", root.display());
    }

    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .hidden(false)
        .git_ignore(config.respect_gitignore)
        .git_exclude(config.respect_gitignore);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || !config.accepts(path) {
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    tracing::debug!("Discovered {} file(s) in {}", files.len(), root.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn file_argument_is_taken_as_is() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("script.txt");
        fs::write(&file, "x = 1\n").unwrap();

        let files = discover_files(&file, &AnalyzerConfig::default()).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn directory_walk_filters_and_sorts() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("pkg")).unwrap();
        fs::create_dir_all(tmp.path().join("venv/lib")).unwrap();
        fs::write(tmp.path().join("b.py"), "").unwrap();
        fs::write(tmp.path().join("a.py"), "").unwrap();
        fs::write(tmp.path().join("notes.txt"), "").unwrap();
        fs::write(tmp.path().join("pkg/c.py"), "").unwrap();
        fs::write(tmp.path().join("venv/lib/d.py"), "").unwrap();

        let files = discover_files(tmp.path(), &AnalyzerConfig::default()).unwrap();
        let names: Vec<PathBuf> = files
            .iter()
            .map(|f| f.strip_prefix(tmp.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("a.py"),
                PathBuf::from("b.py"),
                PathBuf::from("pkg/c.py"),
            ]
        );
    }

    #[test]
    fn missing_path_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let result = discover_files(&tmp.path().join("nope"), &AnalyzerConfig::default());
        assert!(result.is_err());
    }
}
