pub mod blocks;
pub mod inline;
pub mod span;

use blocks::{BlockRewrite, BlockState, rewrite_block};

/// Rewrites one line: block markup first, then the inline passes.
///
/// Returns the output line and the state for the next line.
pub fn transform_line(line: &str, state: BlockState) -> (String, BlockState) {
    let BlockRewrite { text, state, .. } = rewrite_block(line, state);
    (inline::apply_inline(&text), state)
}
