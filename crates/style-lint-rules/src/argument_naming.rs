//! Rule to require `snake_case` argument names.

use style_lint_core::utils::is_snake_case;
use style_lint_core::{Finding, StructuralRule, StructuralView, Violation};

/// Rule code for argument-naming.
pub const CODE: &str = "S010";

/// Rule name for argument-naming.
pub const NAME: &str = "argument-naming";

/// Flags each parameter whose name is not `snake_case`, on the line of the
/// function's `def`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentNaming;

impl ArgumentNaming {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl StructuralRule for ArgumentNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Argument names not in snake_case"
    }

    fn check(&self, view: &StructuralView) -> Vec<Finding> {
        view.functions()
            .flat_map(|func| {
                func.parameters
                    .iter()
                    .filter(|p| !is_snake_case(&p.name))
                    .map(|p| {
                        Finding::new(
                            func.line,
                            Violation::new(
                                CODE,
                                NAME,
                                format!("Argument name '{}' should be written in snake_case", p.name),
                            ),
                        )
                        .with_step(func.step)
                    })
            })
            .collect()
    }
}
