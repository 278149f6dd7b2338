//! Rule to require `snake_case` variable names.
//!
//! Every binding occurrence is checked, at any nesting depth, so a name
//! assigned three times is reported three times.

use style_lint_core::utils::is_snake_case;
use style_lint_core::{Finding, StructuralRule, StructuralView, Violation};

/// Rule code for variable-naming.
pub const CODE: &str = "S011";

/// Rule name for variable-naming.
pub const NAME: &str = "variable-naming";

/// Flags each bound name that is not `snake_case`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariableNaming;

impl VariableNaming {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl StructuralRule for VariableNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Variable names not in snake_case"
    }

    fn check(&self, view: &StructuralView) -> Vec<Finding> {
        view.bindings()
            .filter(|b| !is_snake_case(&b.name))
            .map(|b| {
                Finding::new(
                    b.line,
                    Violation::new(
                        CODE,
                        NAME,
                        format!("Variable '{}' should be written in snake_case", b.name),
                    ),
                )
                .with_step(b.step)
            })
            .collect()
    }
}
