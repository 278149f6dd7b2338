//! Comment detection on raw line text.
//!
//! Detection is purely textual: a `#` inside a string literal is treated as
//! a comment marker too.

/// Byte offset of the first comment marker, if any.
///
/// A `#` directly preceded by a backslash is escaped and skipped.
#[must_use]
pub fn comment_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    bytes
        .iter()
        .enumerate()
        .find(|&(i, &b)| b == b'#' && (i == 0 || bytes[i - 1] != b'\\'))
        .map(|(i, _)| i)
}

/// Splits a line into its code part and its comment text (after the marker).
#[must_use]
pub fn split_comment(line: &str) -> (&str, Option<&str>) {
    match comment_start(line) {
        Some(i) => (&line[..i], Some(&line[i + 1..])),
        None => (line, None),
    }
}
