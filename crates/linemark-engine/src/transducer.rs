use crate::parsing::{blocks::BlockState, transform_line};

/// Converts input lines to HTML one at a time, carrying block state between
/// them.
///
/// A transducer covers exactly one document; start a new one for each run.
#[derive(Debug, Default)]
pub struct LineTransducer {
    state: BlockState,
    lines_seen: usize,
}

impl LineTransducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block state that the next line will be classified against.
    pub fn state(&self) -> BlockState {
        self.state
    }

    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }

    /// Transforms one input line. The result may contain embedded newlines
    /// (list and section openers) but never a trailing one.
    pub fn transform(&mut self, line: &str) -> String {
        let (out, next) = transform_line(line, self.state);
        self.state = next;
        self.lines_seen += 1;
        out
    }

    pub fn transform_all<'a, I>(&mut self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines.into_iter().map(|line| self.transform(line)).collect()
    }
}
