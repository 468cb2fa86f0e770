/// Horizontal rule. Only an exact `___` line matches.
pub struct Rule;

impl Rule {
    pub const MARKER: &'static str = "___";
    pub const TAG: &'static str = "<HR>";

    pub fn matches(line: &str) -> bool {
        line == Self::MARKER
    }
}
