/// Blockquote block type with owned delimiter constants.
///
/// A quote line opens a `<P class="quote">` paragraph preceded by an
/// oversized decorative quotation mark. The paragraph stays open until a
/// blank line closes it.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: &'static str = ">> ";
    /// Decorative glyph plus the opening paragraph tag.
    pub const OPEN: &'static str = concat!(
        "<SPAN class=\"quote\" ",
        "style=\"font-size:150px; line-height:0.6em; opacity:0.2;\">",
        "«</SPAN><P class=\"quote\">"
    );
    pub const LINE_BREAK: &'static str = "<BR>";
    pub const CLOSE: &'static str = "</P>";

    pub fn matches(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Replaces every occurrence of the prefix and appends a line break.
    pub fn rewrite(line: &str) -> String {
        let mut out = line.replace(Self::PREFIX, Self::OPEN);
        out.push_str(Self::LINE_BREAK);
        out
    }
}
