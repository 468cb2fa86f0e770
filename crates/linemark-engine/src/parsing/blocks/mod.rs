//! # Block Rewriting
//!
//! Line-at-a-time block rewriting with a small state record carried between
//! lines.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): a line and the current
//!    [`BlockState`] map to a [`LineKind`]
//!
//! 2. **Rewrite** (`rewrite`): the line's block markup is replaced according
//!    to its kind and the next state is returned
//!
//! ## Modules
//!
//! - **`types`**: `BlockState`, `LineKind`
//! - **`kinds`**: Block types with owned delimiters (Heading, Rule, ListItem, BlockQuote, Paragraph)
//! - **`classify`**: `LineClassifier` picks the kind of each line
//! - **`rewrite`**: `rewrite_block` pure state transition
//!
//! ## Key Invariants
//!
//! - Classification is first-match-wins and never looks at neighbouring lines
//! - Containers left open at end of input are never closed automatically

pub mod classify;
pub mod kinds;
pub mod rewrite;
pub mod types;

pub use classify::LineClassifier;
pub use rewrite::{BlockRewrite, rewrite_block};
pub use types::{BlockState, LineKind};
