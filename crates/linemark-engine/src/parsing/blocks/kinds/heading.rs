/// Heading block type with owned delimiter constants.
///
/// Every heading opens a `<DIV>` section; from the second heading on, the
/// previous section is closed on the same output line.
pub struct Heading;

impl Heading {
    /// Line prefix that marks a heading.
    pub const PREFIX: &'static str = "# ";
    /// Replacement for the first heading of a document.
    pub const OPEN: &'static str = "<DIV><H1>";
    /// Replacement for later headings: closes the previous section first.
    pub const REOPEN: &'static str = "</DIV>\n\n<DIV><H1>";
    /// Suffix appended to every heading line.
    pub const CLOSE: &'static str = "</H1>";

    pub fn matches(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Rewrites a heading line. Every occurrence of the prefix is replaced,
    /// not only the leading one.
    pub fn rewrite(line: &str, first: bool) -> String {
        let open = if first { Self::OPEN } else { Self::REOPEN };
        let mut out = line.replace(Self::PREFIX, open);
        out.push_str(Self::CLOSE);
        out
    }
}
