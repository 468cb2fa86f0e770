/// A cursor for scanning a line for inline markers.
///
/// The index always sits on a char boundary as long as callers only advance
/// past ASCII bytes, which is true of every marker the inline passes use.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Peeks `n` bytes ahead of the current position.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// Returns the byte just before the current position.
    pub fn prev(&self) -> Option<u8> {
        self.i
            .checked_sub(1)
            .and_then(|j| self.s.as_bytes().get(j).copied())
    }

    /// Moves to the next occurrence of `pat` at or after the current
    /// position. Returns its index, or `None` (leaving the cursor in place)
    /// when there is none.
    pub fn seek(&mut self, pat: &str) -> Option<usize> {
        let at = self.i + self.s.get(self.i..)?.find(pat)?;
        self.i = at;
        Some(at)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
