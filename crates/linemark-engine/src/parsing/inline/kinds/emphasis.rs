/// Emphasis styles and their delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    /// `**` rendered as `<B>`.
    Bold,
    /// `*` rendered as `<I>`.
    Italic,
}

impl Emphasis {
    pub fn marker(self) -> &'static str {
        match self {
            Emphasis::Bold => "**",
            Emphasis::Italic => "*",
        }
    }

    pub fn open_tag(self) -> &'static str {
        match self {
            Emphasis::Bold => "<B>",
            Emphasis::Italic => "<I>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            Emphasis::Bold => "</B>",
            Emphasis::Italic => "</I>",
        }
    }
}
