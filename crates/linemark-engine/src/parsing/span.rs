/// A byte range `[start, end)` into a single input line.
///
/// Inline passes store spans rather than copied text; slicing the line with a
/// span reproduces the exact source bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Slices `s` with this span.
    pub fn slice(self, s: &str) -> &str {
        &s[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_span_slices_to_empty() {
        assert_eq!(Span::new(4, 4).slice("abcdef"), "");
    }

    #[test]
    fn slice_reproduces_source() {
        let line = "[text](http://x)";
        assert_eq!(Span::new(1, 5).slice(line), "text");
        assert_eq!(Span::new(7, 15).slice(line), "http://x");
    }
}
