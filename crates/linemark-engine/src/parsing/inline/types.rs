use crate::parsing::span::Span;

use super::kinds::Emphasis;

/// One piece of a tokenized line: either untouched source text or a tag to
/// emit in its place.
///
/// Text variants store spans into the line being rewritten rather than
/// copied text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Source bytes copied through unchanged.
    Text(Span),
    /// Markup replacing a consumed delimiter.
    Tag(Tag),
}

/// Markup emitted by an inline pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// `<A HREF="...">`, the href taken from the source line.
    AnchorOpen {
        href: Span,
    },
    AnchorClose,
    /// `<B>` or `<I>`.
    Open(Emphasis),
    /// `</B>` or `</I>`.
    Close(Emphasis),
}
