/// Cross-line block state carried from one input line to the next.
///
/// The record is never mutated in place by the classifier: each line takes a
/// state in and hands a new one back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockState {
    /// A heading section `<DIV>` has been opened at least once.
    pub heading_open: bool,
    /// A `<UL>` wrapper was emitted in the current heading section.
    pub list_open: bool,
    /// A quote paragraph is accepting continuation lines.
    pub in_quote: bool,
    /// A quote `<P>` tag is waiting for a blank line to close it.
    pub paragraph_open: bool,
}

/// The kind of a single input line, decided by [`LineClassifier`](super::LineClassifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `# ` prefix.
    Heading,
    /// Exactly `___`.
    Rule,
    /// `- ` prefix.
    ListItem,
    /// `>> ` prefix.
    Quote,
    /// Non-blank free text outside a quote.
    Paragraph,
    /// Blank line that closes an open quote paragraph.
    QuoteEnd,
    /// Quote continuation or blank line with nothing to close.
    Passthrough,
}
