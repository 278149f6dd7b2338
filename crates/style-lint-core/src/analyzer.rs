//! Scan orchestration.
//!
//! Each file goes through two passes: every line rule on every line, then
//! every structural rule once over the parsed file. A file's violations are
//! staged in a private [`FileReport`] and only committed to the
//! [`ViolationStore`] once both passes succeed, so a file that fails to read
//! or parse contributes nothing.

use crate::config::AnalyzerConfig;
use crate::context::{BlankRunState, LineContext};
use crate::rule::{LineRule, LineRuleBox, StructuralRule, StructuralRuleBox};
use crate::store::{FileReport, ViolationStore};
use crate::types::Finding;
use crate::view::SourceParser;

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort the scan of a single file.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The file's text is not valid syntax.
    #[error("Malformed input in {path} at line {line}: {message}")]
    MalformedInput {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Line of the first syntax error (1-indexed).
        line: usize,
        /// Parse error message.
        message: String,
    },

    /// The file could not be opened or read.
    #[error("Failed to read {path}: {source}")]
    UnreadableFile {
        /// Path to the file that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

impl AnalyzerError {
    /// Path of the file this error belongs to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::MalformedInput { path, .. } | Self::UnreadableFile { path, .. } => path,
        }
    }
}

/// Outcome of scanning a sequence of files.
#[derive(Debug, Default)]
pub struct ScanRun {
    /// Violations from every file that scanned successfully.
    pub store: ViolationStore,
    /// One entry per file whose scan was aborted.
    pub failures: Vec<AnalyzerError>,
    /// Number of files scanned to completion.
    pub files_checked: usize,
}

impl ScanRun {
    /// Returns true if any violation was recorded.
    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.store.is_empty()
    }

    /// Returns true if any file failed to scan.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Builder for configuring an [`Analyzer`].
pub struct AnalyzerBuilder {
    parser: Box<dyn SourceParser>,
    line_rules: Vec<LineRuleBox>,
    structural_rules: Vec<StructuralRuleBox>,
    fail_fast: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder around the parser for the analyzed language.
    #[must_use]
    pub fn new<P: SourceParser + 'static>(parser: P) -> Self {
        Self {
            parser: Box::new(parser),
            line_rules: Vec::new(),
            structural_rules: Vec::new(),
            fail_fast: false,
        }
    }

    /// Adds a line rule. Rules run in the order they are added.
    #[must_use]
    pub fn line_rule<R: LineRule + 'static>(mut self, rule: R) -> Self {
        self.line_rules.push(Box::new(rule));
        self
    }

    /// Adds several boxed line rules, keeping their order.
    #[must_use]
    pub fn line_rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = LineRuleBox>,
    {
        self.line_rules.extend(rules);
        self
    }

    /// Adds a structural rule.
    ///
    /// Findings are recorded in walk order; findings for the same walk step
    /// keep the order in which their rules were added.
    #[must_use]
    pub fn structural_rule<R: StructuralRule + 'static>(mut self, rule: R) -> Self {
        self.structural_rules.push(Box::new(rule));
        self
    }

    /// Adds several boxed structural rules, keeping their order.
    #[must_use]
    pub fn structural_rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = StructuralRuleBox>,
    {
        self.structural_rules.extend(rules);
        self
    }

    /// Sets whether a multi-file scan stops at the first failing file
    /// (default: false).
    #[must_use]
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Applies analyzer settings from configuration.
    #[must_use]
    pub fn config(self, config: &AnalyzerConfig) -> Self {
        self.fail_fast(config.fail_fast)
    }

    /// Builds the analyzer.
    #[must_use]
    pub fn build(self) -> Analyzer {
        Analyzer {
            parser: self.parser,
            line_rules: self.line_rules,
            structural_rules: self.structural_rules,
            fail_fast: self.fail_fast,
        }
    }
}

/// Drives files through the line and structural rule sets.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    parser: Box<dyn SourceParser>,
    line_rules: Vec<LineRuleBox>,
    structural_rules: Vec<StructuralRuleBox>,
    fail_fast: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder<P: SourceParser + 'static>(parser: P) -> AnalyzerBuilder {
        AnalyzerBuilder::new(parser)
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.line_rules.len() + self.structural_rules.len()
    }

    /// Returns the parser used for the structural pass.
    #[must_use]
    pub fn parser(&self) -> &dyn SourceParser {
        self.parser.as_ref()
    }

    /// Runs only the line pass over `source`.
    ///
    /// Blank-run state starts at zero for every call.
    #[must_use]
    pub fn scan_lines(&self, path: &Path, source: &str) -> FileReport {
        let mut report = FileReport::new();
        let mut blank_run = BlankRunState::new();

        for (index, text) in source.split_inclusive('\n').enumerate() {
            let ctx = LineContext::new(path, index + 1, text);
            for rule in &self.line_rules {
                if let Some(violation) = rule.check(&ctx, &mut blank_run) {
                    report.record(ctx.number, violation);
                }
            }
        }

        report
    }

    /// Runs both passes over `source` and returns the file's report.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::MalformedInput`] if the structural parse fails.
    pub fn check_source(&self, path: &Path, source: &str) -> Result<FileReport, AnalyzerError> {
        debug!("Analyzing: {}", path.display());

        let mut report = self.scan_lines(path, source);

        let view = self
            .parser
            .parse(source)
            .map_err(|e| AnalyzerError::MalformedInput {
                path: path.to_path_buf(),
                line: e.line,
                message: e.message,
            })?;

        debug!(
            "Parsed {}: {} function(s), {} binding(s)",
            path.display(),
            view.functions.len(),
            view.bindings.len()
        );

        let mut findings: Vec<Finding> = self
            .structural_rules
            .iter()
            .flat_map(|rule| rule.check(&view))
            .collect();
        // stable: ties keep rule registration order
        findings.sort_by_key(|f| f.step);
        for finding in findings {
            report.record(finding.line, finding.violation);
        }

        Ok(report)
    }

    /// Scans one in-memory file into `store`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::MalformedInput`] if the structural parse
    /// fails; the store is left untouched in that case.
    pub fn scan_source(
        &self,
        path: &Path,
        source: &str,
        store: &mut ViolationStore,
    ) -> Result<(), AnalyzerError> {
        let report = self.check_source(path, source)?;
        store.commit(path, report);
        Ok(())
    }

    /// Reads and scans one file into `store`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::UnreadableFile`] if the file cannot be read,
    /// or [`AnalyzerError::MalformedInput`] if it does not parse.
    pub fn scan_file(&self, path: &Path, store: &mut ViolationStore) -> Result<(), AnalyzerError> {
        let source =
            std::fs::read_to_string(path).map_err(|e| AnalyzerError::UnreadableFile {
                path: path.to_path_buf(),
                source: e,
            })?;
        self.scan_source(path, &source, store)
    }

    /// Scans an ordered sequence of `(path, text)` pairs.
    ///
    /// A failing file is recorded in [`ScanRun::failures`] and the scan moves
    /// on to the next one, unless fail-fast is set.
    pub fn scan_sources<I, P, S>(&self, sources: I) -> ScanRun
    where
        I: IntoIterator<Item = (P, S)>,
        P: AsRef<Path>,
        S: AsRef<str>,
    {
        let mut run = ScanRun::default();
        for (path, source) in sources {
            let outcome = self.scan_source(path.as_ref(), source.as_ref(), &mut run.store);
            if !self.settle(&mut run, outcome) {
                break;
            }
        }
        Self::log_summary(&run);
        run
    }

    /// Reads and scans an ordered sequence of files.
    ///
    /// Failure handling is the same as [`Analyzer::scan_sources`].
    pub fn scan_paths<I, P>(&self, paths: I) -> ScanRun
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut run = ScanRun::default();
        for path in paths {
            let outcome = self.scan_file(path.as_ref(), &mut run.store);
            if !self.settle(&mut run, outcome) {
                break;
            }
        }
        Self::log_summary(&run);
        run
    }

    /// Books one file's outcome; returns false when the run should stop.
    fn settle(&self, run: &mut ScanRun, outcome: Result<(), AnalyzerError>) -> bool {
        match outcome {
            Ok(()) => {
                run.files_checked += 1;
                true
            }
            Err(e) => {
                warn!("{e}");
                run.failures.push(e);
                !self.fail_fast
            }
        }
    }

    fn log_summary(run: &ScanRun) {
        info!(
            "Analysis complete: {} violation(s) in {} file(s), {} failed",
            run.store.len(),
            run.files_checked,
            run.failures.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Finding, Violation};
    use crate::view::{Binding, ParseError, StructuralView};

    /// Parser stub: `!` anywhere is a syntax error, `let NAME` lines bind NAME.
    struct StubParser;

    impl SourceParser for StubParser {
        fn language_id(&self) -> &'static str {
            "stub"
        }

        fn extensions(&self) -> &'static [&'static str] {
            &["stub"]
        }

        fn parse(&self, source: &str) -> Result<StructuralView, ParseError> {
            let mut view = StructuralView::default();
            for (i, line) in source.lines().enumerate() {
                if line.contains('!') {
                    return Err(ParseError::new(i + 1, "unexpected '!'"));
                }
                if let Some(name) = line.strip_prefix("let ") {
                    view.bindings.push(Binding {
                        step: i,
                        line: i + 1,
                        name: name.trim().to_string(),
                    });
                }
            }
            Ok(view)
        }
    }

    struct LongLine;

    impl LineRule for LongLine {
        fn name(&self) -> &'static str {
            "long-line"
        }
        fn code(&self) -> &'static str {
            "T001"
        }
        fn check(&self, ctx: &LineContext<'_>, _state: &mut BlankRunState) -> Option<Violation> {
            (ctx.visible().len() > 10).then(|| Violation::new("T001", "long-line", "long"))
        }
    }

    struct EveryBinding;

    impl StructuralRule for EveryBinding {
        fn name(&self) -> &'static str {
            "every-binding"
        }
        fn code(&self) -> &'static str {
            "T002"
        }
        fn check(&self, view: &StructuralView) -> Vec<Finding> {
            view.bindings()
                .map(|b| {
                    Finding::new(b.line, Violation::new("T002", "every-binding", &b.name))
                        .with_step(b.step)
                })
                .collect()
        }
    }

    /// Flags bindings whose name starts with `prefix`.
    struct Prefixed {
        code: &'static str,
        prefix: &'static str,
    }

    impl StructuralRule for Prefixed {
        fn name(&self) -> &'static str {
            "prefixed"
        }
        fn code(&self) -> &'static str {
            self.code
        }
        fn check(&self, view: &StructuralView) -> Vec<Finding> {
            view.bindings()
                .filter(|b| b.name.starts_with(self.prefix))
                .map(|b| {
                    Finding::new(b.line, Violation::new(self.code, "prefixed", &b.name))
                        .with_step(b.step)
                })
                .collect()
        }
    }

    fn analyzer() -> Analyzer {
        Analyzer::builder(StubParser)
            .line_rule(LongLine)
            .structural_rule(EveryBinding)
            .build()
    }

    #[test]
    fn test_builder() {
        let analyzer = analyzer();
        assert_eq!(analyzer.rule_count(), 2);
        assert_eq!(analyzer.parser().language_id(), "stub");
    }

    #[test]
    fn structural_findings_follow_line_findings() {
        let source = "let a\nlet bbbbbbbbbbbb\n";
        let mut store = ViolationStore::new();
        analyzer()
            .scan_source(Path::new("f.stub"), source, &mut store)
            .unwrap();

        let got: Vec<(usize, &str)> = store
            .all_violations()
            .map(|(_, line, v)| (line, v.code.as_str()))
            .collect();
        assert_eq!(got, vec![(2, "T001"), (2, "T002"), (1, "T002")]);
    }

    #[test]
    fn structural_findings_merge_in_walk_order() {
        let analyzer = Analyzer::builder(StubParser)
            .structural_rule(Prefixed {
                code: "T010",
                prefix: "x",
            })
            .structural_rule(Prefixed {
                code: "T011",
                prefix: "y",
            })
            .structural_rule(EveryBinding)
            .build();

        let report = analyzer
            .check_source(Path::new("f.stub"), "let y1\nlet x2\n")
            .unwrap();
        let got: Vec<(usize, Vec<&str>)> = report
            .lines()
            .map(|r| (r.line, r.violations.iter().map(|v| v.code.as_str()).collect()))
            .collect();
        assert_eq!(
            got,
            vec![(1, vec!["T011", "T002"]), (2, vec!["T010", "T002"])]
        );
    }

    #[test]
    fn parse_failure_leaves_store_untouched() {
        let source = "a very long line indeed\n!\n";
        let mut store = ViolationStore::new();
        let err = analyzer()
            .scan_source(Path::new("bad.stub"), source, &mut store)
            .unwrap_err();

        assert!(matches!(err, AnalyzerError::MalformedInput { line: 2, .. }));
        assert_eq!(err.path(), Path::new("bad.stub"));
        assert!(store.is_empty());
    }

    #[test]
    fn failing_file_does_not_stop_run() {
        let run = analyzer().scan_sources([
            ("a.stub", "!\n"),
            ("b.stub", "let x\n"),
        ]);

        assert_eq!(run.files_checked, 1);
        assert_eq!(run.failures.len(), 1);
        assert!(run.has_violations());
        assert!(run.store.file(Path::new("b.stub")).is_some());
    }

    #[test]
    fn fail_fast_stops_run() {
        let analyzer = Analyzer::builder(StubParser)
            .structural_rule(EveryBinding)
            .fail_fast(true)
            .build();
        let run = analyzer.scan_sources([("a.stub", "!\n"), ("b.stub", "let x\n")]);

        assert_eq!(run.files_checked, 0);
        assert!(run.has_failures());
        assert!(!run.has_violations());
    }

    #[test]
    fn line_pass_is_repeatable() {
        let analyzer = analyzer();
        let source = "short\nthis line is long\n\nalso too long here\n";
        let first = analyzer.scan_lines(Path::new("f.stub"), source);
        let second = analyzer.scan_lines(Path::new("f.stub"), source);
        assert_eq!(first, second);
        assert_eq!(first.line_numbers().collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn scans_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mod.stub");
        std::fs::write(&path, "let total\n").unwrap();

        let mut store = ViolationStore::new();
        analyzer().scan_file(&path, &mut store).unwrap();

        let report = store.file(&path).unwrap();
        assert_eq!(report.get(1).unwrap().violations[0].message, "total");
    }

    #[test]
    fn missing_file_is_unreadable() {
        let run = analyzer().scan_paths(["/definitely/not/here.stub"]);
        assert!(matches!(
            run.failures.as_slice(),
            [AnalyzerError::UnreadableFile { .. }]
        ));
    }
}
