//! The fixed rule set, in evaluation order.

use crate::{
    ArgumentNaming, BlankLines, ClassNaming, DeclarationSpacing, FunctionNaming, Indentation,
    InlineCommentSpacing, LineLength, MutableDefaultArgument, TodoComment, TrailingSemicolon,
    VariableNaming,
};
use style_lint_core::{LineRuleBox, StructuralRuleBox};

/// Returns the line rules in the order they run on each line.
#[must_use]
pub fn line_rules() -> Vec<LineRuleBox> {
    vec![
        Box::new(LineLength::new()),
        Box::new(Indentation::new()),
        Box::new(TrailingSemicolon::new()),
        Box::new(InlineCommentSpacing::new()),
        Box::new(TodoComment::new()),
        Box::new(BlankLines::new()),
        Box::new(DeclarationSpacing::new()),
        Box::new(ClassNaming::new()),
        Box::new(FunctionNaming::new()),
    ]
}

/// Returns the structural rules.
///
/// Their findings are merged in walk order; within one function definition
/// the mutable-default findings come before the argument-naming ones.
#[must_use]
pub fn structural_rules() -> Vec<StructuralRuleBox> {
    vec![
        Box::new(MutableDefaultArgument::new()),
        Box::new(ArgumentNaming::new()),
        Box::new(VariableNaming::new()),
    ]
}

/// Descriptive metadata for one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleInfo {
    /// Rule code.
    pub code: &'static str,
    /// Rule name.
    pub name: &'static str,
    /// What the rule checks.
    pub description: &'static str,
}

/// Lists every rule, ordered by code.
#[must_use]
pub fn catalog() -> Vec<RuleInfo> {
    let lines = line_rules().into_iter().map(|r| RuleInfo {
        code: r.code(),
        name: r.name(),
        description: r.description(),
    });
    let structural = structural_rules().into_iter().map(|r| RuleInfo {
        code: r.code(),
        name: r.name(),
        description: r.description(),
    });
    let mut all: Vec<RuleInfo> = lines.chain(structural).collect();
    all.sort_by_key(|info| info.code);
    all
}
