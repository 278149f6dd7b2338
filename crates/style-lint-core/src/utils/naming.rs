//! Naming convention predicates.

/// Whether `name` is lower `snake_case`: no uppercase letters.
///
/// Leading/trailing underscores, dunder names and digits are accepted.
#[must_use]
pub fn is_snake_case(name: &str) -> bool {
    !name.chars().any(char::is_uppercase)
}

/// Whether `name` is `UpperCamelCase`: starts uppercase, no underscores.
#[must_use]
pub fn is_camel_case(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase) && !name.contains('_')
}
