//! Text helpers shared by rule implementations.

pub mod comments;
pub mod naming;

// Re-export commonly used utilities for rule implementations
#[doc(inline)]
pub use comments::{comment_start, split_comment};
#[doc(inline)]
pub use naming::{is_camel_case, is_snake_case};
