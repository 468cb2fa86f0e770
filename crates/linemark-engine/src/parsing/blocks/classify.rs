use super::{
    kinds::{BlockQuote, Heading, ListItem, Rule},
    types::{BlockState, LineKind},
};

/// Classifies individual lines for the block rewriting phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a raw line against the current state.
    ///
    /// Patterns are mutually exclusive and tried in order, first match wins:
    /// heading, rule, list item, quote, paragraph, quote end.
    pub fn classify(&self, line: &str, state: &BlockState) -> LineKind {
        if Heading::matches(line) {
            LineKind::Heading
        } else if Rule::matches(line) {
            LineKind::Rule
        } else if ListItem::matches(line) {
            LineKind::ListItem
        } else if BlockQuote::matches(line) {
            LineKind::Quote
        } else if !line.is_empty() && !state.in_quote {
            LineKind::Paragraph
        } else if line.is_empty() && state.paragraph_open {
            LineKind::QuoteEnd
        } else {
            LineKind::Passthrough
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn in_quote() -> BlockState {
        BlockState {
            in_quote: true,
            paragraph_open: true,
            ..BlockState::default()
        }
    }

    #[rstest]
    #[case("# Title", LineKind::Heading)]
    #[case("___", LineKind::Rule)]
    #[case("____", LineKind::Paragraph)]
    #[case("- item", LineKind::ListItem)]
    #[case(">> quote", LineKind::Quote)]
    #[case("plain text", LineKind::Paragraph)]
    #[case("", LineKind::Passthrough)]
    #[case("#Title", LineKind::Paragraph)]
    #[case(" ", LineKind::Paragraph)]
    fn classify_outside_quote(#[case] line: &str, #[case] expected: LineKind) {
        assert_eq!(
            LineClassifier.classify(line, &BlockState::default()),
            expected
        );
    }

    #[rstest]
    #[case("continued", LineKind::Passthrough)]
    #[case("", LineKind::QuoteEnd)]
    #[case("# Title", LineKind::Heading)]
    #[case("- item", LineKind::ListItem)]
    #[case(">> again", LineKind::Quote)]
    fn classify_inside_quote(#[case] line: &str, #[case] expected: LineKind) {
        assert_eq!(LineClassifier.classify(line, &in_quote()), expected);
    }

    #[test]
    fn heading_wins_over_later_patterns() {
        // `# - x` is a heading even though it contains a list prefix.
        assert_eq!(
            LineClassifier.classify("# - x", &BlockState::default()),
            LineKind::Heading
        );
    }
}
