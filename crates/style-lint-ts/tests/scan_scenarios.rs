//! Integration test: Python sources end-to-end through the full rule set.
//!
//! Drives the [`Analyzer`] with the real Tree-sitter parser and the built-in
//! rules, then checks what lands in the violation store.

use std::fs;
use std::path::Path;
use style_lint_core::{Analyzer, AnalyzerError, ViolationStore};
use style_lint_rules::{line_rules, structural_rules};
use style_lint_ts::PythonParser;
use tempfile::TempDir;

fn analyzer() -> Analyzer {
    Analyzer::builder(PythonParser::new())
        .line_rules(line_rules())
        .structural_rules(structural_rules())
        .build()
}

fn scan(source: &str) -> ViolationStore {
    let mut store = ViolationStore::new();
    analyzer()
        .scan_source(Path::new("demo.py"), source, &mut store)
        .expect("source should scan");
    store
}

fn rendered(store: &ViolationStore) -> String {
    store
        .entries()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn codes_at(store: &ViolationStore, line: usize) -> Vec<&str> {
    store
        .all_violations()
        .filter(|(_, l, _)| *l == line)
        .map(|(_, _, v)| v.code.as_str())
        .collect()
}

// ── Single-rule scenarios ──

#[test]
fn long_line_reported_once() {
    let store = scan(&format!("{}\n", "a".repeat(80)));
    insta::assert_snapshot!(rendered(&store), @"demo.py: Line 1: S001 Too long");
}

#[test]
fn three_blank_lines_reported_on_following_line() {
    let store = scan("\n\n\nx = 1\n");
    insta::assert_snapshot!(
        rendered(&store),
        @"demo.py: Line 4: S006 More than two blank lines used before this line"
    );
}

#[test]
fn mutable_default_with_valid_names() {
    let store = scan("def f(data=[]):\n    pass\n");
    assert_eq!(codes_at(&store, 1), vec!["S012"]);
    assert_eq!(store.len(), 1);
}

#[test]
fn lowercase_class_name() {
    let store = scan("class myClass:\n    pass\n");
    let (_, line, violation) = store.all_violations().next().expect("one violation");
    assert_eq!(line, 1);
    assert_eq!(violation.code, "S008");
    assert!(violation.message.contains("myClass"));
    assert_eq!(store.len(), 1);
}

#[test]
fn unparseable_file_contributes_nothing() {
    let mut store = ViolationStore::new();
    // line 1 would trip S001 if the file were kept
    let source = format!("{}\nprint((x)\n", "b".repeat(90));

    let err = analyzer()
        .scan_source(Path::new("broken.py"), &source, &mut store)
        .unwrap_err();

    assert!(matches!(err, AnalyzerError::MalformedInput { .. }));
    assert_eq!(err.path(), Path::new("broken.py"));
    assert!(store.is_empty());
    assert!(store.file(Path::new("broken.py")).is_none());
}

// ── Ordering ──

#[test]
fn structural_violations_follow_line_violations() {
    let source = "\
x = 1;
def Build(Items=[]):
    return Items
";
    let store = scan(source);
    insta::assert_snapshot!(rendered(&store), @r"
    demo.py: Line 1: S003 Unnecessary semicolon
    demo.py: Line 2: S009 Function name 'Build' should use snake_case
    demo.py: Line 2: S012 The default argument value is mutable
    demo.py: Line 2: S010 Argument name 'Items' should be written in snake_case
    ");
}

#[test]
fn structural_only_line_lands_after_existing_lines() {
    let store = scan("userName = 1\nx = 2;\n");
    let lines: Vec<usize> = store.all_violations().map(|(_, l, _)| l).collect();
    assert_eq!(lines, vec![2, 1]);
    assert_eq!(codes_at(&store, 1), vec!["S011"]);
}

#[test]
fn every_rebinding_reported() {
    let source = "\
Total = 0
for Item in range(3):
    Total += Item
";
    let store = scan(source);
    let lines: Vec<(usize, &str)> = store
        .all_violations()
        .map(|(_, l, v)| (l, v.code.as_str()))
        .collect();
    assert_eq!(lines, vec![(1, "S011"), (2, "S011"), (3, "S011")]);
}

fn codes_in_order(store: &ViolationStore) -> Vec<(usize, &str)> {
    store
        .all_violations()
        .map(|(_, l, v)| (l, v.code.as_str()))
        .collect()
}

#[test]
fn functions_reported_in_definition_order_across_rules() {
    let source = "\
def g(Bad):
    pass
def f(x=[]):
    pass
";
    let store = scan(source);
    assert_eq!(codes_in_order(&store), vec![(1, "S010"), (3, "S012")]);
}

#[test]
fn module_level_binding_reported_before_function_body_binding() {
    let source = "\
def f():
    myVar = 1
otherVar = 2
";
    let store = scan(source);
    assert_eq!(codes_in_order(&store), vec![(3, "S011"), (2, "S011")]);
}

#[test]
fn python2_print_statement_is_malformed() {
    let mut store = ViolationStore::new();
    let err = analyzer()
        .scan_source(Path::new("legacy.py"), "print \"hello\"\n", &mut store)
        .unwrap_err();

    assert!(matches!(err, AnalyzerError::MalformedInput { .. }));
    assert!(store.is_empty());
}

#[test]
fn required_argument_after_default_is_malformed() {
    let mut store = ViolationStore::new();
    let err = analyzer()
        .scan_source(Path::new("args.py"), "def f(a=[], b):\n    pass\n", &mut store)
        .unwrap_err();

    assert!(matches!(err, AnalyzerError::MalformedInput { .. }));
    assert!(store.is_empty());
}

// ── Runs over several files ──

#[test]
fn rescanning_gives_identical_output() {
    let source = "import os\n\n\n\ndef Run(Mode={}):  # TODO tidy\n    value = os.sep;\n";
    let first = rendered(&scan(source));
    let second = rendered(&scan(source));
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn failing_file_skipped_and_run_continues() {
    let run = analyzer().scan_sources([
        ("a.py", "x = 1;\n"),
        ("b.py", "def f(:\n"),
        ("c.py", "class lower:\n    pass\n"),
    ]);

    assert_eq!(run.files_checked, 2);
    assert_eq!(run.failures.len(), 1);
    assert_eq!(run.failures[0].path(), Path::new("b.py"));

    let paths: Vec<&Path> = run.store.paths().collect();
    assert_eq!(paths, vec![Path::new("a.py"), Path::new("c.py")]);
}

#[test]
fn fail_fast_stops_at_first_failure() {
    let analyzer = Analyzer::builder(PythonParser::new())
        .line_rules(line_rules())
        .structural_rules(structural_rules())
        .fail_fast(true)
        .build();

    let run = analyzer.scan_sources([("a.py", "print((\n"), ("b.py", "x = 1;\n")]);
    assert_eq!(run.failures.len(), 1);
    assert_eq!(run.files_checked, 0);
    assert!(run.store.is_empty());
}

#[test]
fn scans_files_on_disk() {
    let tmp = TempDir::new().unwrap();
    let clean = tmp.path().join("clean.py");
    let dirty = tmp.path().join("dirty.py");
    let missing = tmp.path().join("missing.py");
    fs::write(&clean, "def add(a, b):\n    return a + b\n").unwrap();
    fs::write(&dirty, "def add(a, b):\n   return a + b\n").unwrap();

    let run = analyzer().scan_paths([&clean, &dirty, &missing]);

    assert_eq!(run.files_checked, 2);
    assert!(matches!(
        run.failures.as_slice(),
        [AnalyzerError::UnreadableFile { .. }]
    ));

    let entries = run.store.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path, dirty);
    assert_eq!(entries[0].line, 2);
    assert_eq!(entries[0].code, "S002");
}
