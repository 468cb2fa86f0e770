use super::{
    classify::LineClassifier,
    kinds::{BlockQuote, Heading, ListItem, Paragraph, Rule},
    types::{BlockState, LineKind},
};

/// Result of rewriting one line's block markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRewrite {
    pub kind: LineKind,
    pub text: String,
    /// State to feed into the next line.
    pub state: BlockState,
}

/// Rewrites the block-level markup of `line` and returns the next state.
///
/// This is a pure function: the caller threads `state` from one line to the
/// next.
pub fn rewrite_block(line: &str, state: BlockState) -> BlockRewrite {
    let kind = LineClassifier.classify(line, &state);
    let mut next = state;

    let text = match kind {
        LineKind::Heading => {
            let first = !state.heading_open;
            if !first {
                next.list_open = false;
            }
            next.heading_open = true;
            Heading::rewrite(line, first)
        }
        LineKind::Rule => Rule::TAG.to_string(),
        LineKind::ListItem => {
            let opens = !state.list_open;
            next.list_open = true;
            ListItem::rewrite(line, opens)
        }
        LineKind::Quote => {
            next.paragraph_open = true;
            next.in_quote = true;
            BlockQuote::rewrite(line)
        }
        LineKind::Paragraph => Paragraph::rewrite(line),
        LineKind::QuoteEnd => {
            next.paragraph_open = false;
            next.in_quote = false;
            BlockQuote::CLOSE.to_string()
        }
        LineKind::Passthrough => line.to_string(),
    };

    BlockRewrite {
        kind,
        text,
        state: next,
    }
}
