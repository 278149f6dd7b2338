//! Rule traits for defining style rules.

use crate::context::{BlankRunState, LineContext};
use crate::types::{Finding, Violation};
use crate::view::StructuralView;

/// A rule evaluated against one physical line at a time.
///
/// Line rules are run in registration order on every line of a file. A rule
/// fires at most once per line.
///
/// # Example
///
/// ```ignore
/// use style_lint_core::{BlankRunState, LineContext, LineRule, Violation};
///
/// pub struct NoTabs;
///
/// impl LineRule for NoTabs {
///     fn name(&self) -> &'static str { "no-tabs" }
///     fn code(&self) -> &'static str { "S100" }
///
///     fn check(&self, ctx: &LineContext<'_>, _state: &mut BlankRunState) -> Option<Violation> {
///         ctx.text
///             .contains('\t')
///             .then(|| Violation::new(self.code(), self.name(), "Tab found"))
///     }
/// }
/// ```
pub trait LineRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "line-length").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "S001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Checks a single line.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The line being checked
    /// * `state` - Per-file blank-run state; every line rule sees every line,
    ///   so a rule that tracks it stays consistent
    fn check(&self, ctx: &LineContext<'_>, state: &mut BlankRunState) -> Option<Violation>;
}

/// Type alias for boxed `LineRule` trait objects.
pub type LineRuleBox = Box<dyn LineRule>;

/// A rule evaluated once per file against its parsed structure.
pub trait StructuralRule: Send + Sync {
    /// Returns the kebab-case name of this rule.
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "S012").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Checks the file and returns findings in the order they should be
    /// recorded.
    fn check(&self, view: &StructuralView) -> Vec<Finding>;
}

/// Type alias for boxed `StructuralRule` trait objects.
pub type StructuralRuleBox = Box<dyn StructuralRule>;
