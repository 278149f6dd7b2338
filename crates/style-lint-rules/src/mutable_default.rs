//! Rule to forbid mutable literals as default argument values.
//!
//! # Rationale
//!
//! A default value is evaluated once, when the function is defined. A list,
//! dict or set literal used as a default is therefore shared by every call
//! that relies on it.

use style_lint_core::{Finding, StructuralRule, StructuralView, Violation};

/// Rule code for mutable-default-argument.
pub const CODE: &str = "S012";

/// Rule name for mutable-default-argument.
pub const NAME: &str = "mutable-default-argument";

/// Flags each list, dict or set literal used as a default value.
#[derive(Debug, Clone, Copy, Default)]
pub struct MutableDefaultArgument;

impl MutableDefaultArgument {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl StructuralRule for MutableDefaultArgument {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "List, dict or set literal as a default argument value"
    }

    fn check(&self, view: &StructuralView) -> Vec<Finding> {
        view.functions()
            .flat_map(|func| {
                func.parameters
                    .iter()
                    .filter(|p| p.default.is_some_and(|d| d.is_mutable()))
                    .map(|_| {
                        Finding::new(
                            func.line,
                            Violation::new(CODE, NAME, "The default argument value is mutable"),
                        )
                        .with_step(func.step)
                    })
            })
            .collect()
    }
}
