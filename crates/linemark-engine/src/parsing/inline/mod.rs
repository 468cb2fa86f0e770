//! # Inline Substitution
//!
//! Three passes rewrite inline markup on every line, after block rewriting:
//! link, then bold, then italic.
//!
//! ## Architecture
//!
//! Each pass tokenizes its input line into [`Segment`]s (source spans and
//! tag markers) and reduces them back to a string. Passes are pure
//! `&str -> String` functions and always run in [`PASSES`] order.
//!
//! ## Modules
//!
//! - **`types`**: `Segment` and `Tag`
//! - **`kinds`**: Inline types with owned delimiters (Link, Emphasis)
//! - **`cursor`**: `Cursor` for marker scanning with position tracking
//! - **`parser`**: `parse_link()` and `parse_emphasis()` tokenizers
//! - **`render`**: `render()` reduces segments to text
//!
//! ## Pass Order
//!
//! Italic runs after bold: `**` pairs are consumed first, so only leftover
//! single `*` reach the italic pass. Reordering changes output.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod render;
pub mod types;

pub use kinds::Emphasis;
pub use parser::{parse_emphasis, parse_link};
pub use render::render;
pub use types::{Segment, Tag};

/// A single inline rewrite pass.
pub type InlinePass = fn(&str) -> String;

/// Inline passes in the order they are applied.
pub const PASSES: [InlinePass; 3] = [transform_link, transform_bold, transform_italic];

/// Rewrites the first `[label](url)` into an anchor.
pub fn transform_link(line: &str) -> String {
    render(line, &parse_link(line))
}

pub fn transform_bold(line: &str) -> String {
    render(line, &parse_emphasis(line, Emphasis::Bold))
}

pub fn transform_italic(line: &str) -> String {
    render(line, &parse_emphasis(line, Emphasis::Italic))
}

/// Runs every inline pass over `line`.
pub fn apply_inline(line: &str) -> String {
    PASSES
        .iter()
        .fold(line.to_string(), |acc, pass| pass(&acc))
}
