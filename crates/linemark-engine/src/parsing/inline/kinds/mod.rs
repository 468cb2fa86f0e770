//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Link`**: `LABEL_OPEN = '['`, `MIDDLE = "]("`, `URL_CLOSE = ')'`
//! - **`Emphasis`**: `Bold` (`**`) and `Italic` (`*`) with their HTML tags
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod emphasis;
pub mod link;

pub use emphasis::Emphasis;
pub use link::Link;
