pub mod document;
pub mod io;
pub mod parsing;
pub mod transducer;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use document::{Fragment, assemble, render_document};
pub use io::*;
pub use parsing::blocks::{BlockState, LineKind};
pub use parsing::inline::apply_inline;
pub use transducer::LineTransducer;
