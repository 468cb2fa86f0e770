/// Paragraph block type.
///
/// Free text outside a quote is rendered as an implicit list item: a dash
/// prefix and a trailing line break.
pub struct Paragraph;

impl Paragraph {
    pub const PREFIX: &'static str = "- ";
    pub const SUFFIX: &'static str = "<BR>";

    pub fn rewrite(line: &str) -> String {
        let mut out = String::with_capacity(line.len() + Self::PREFIX.len() + Self::SUFFIX.len());
        out.push_str(Self::PREFIX);
        out.push_str(line);
        out.push_str(Self::SUFFIX);
        out
    }
}
