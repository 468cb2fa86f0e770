use crate::transducer::LineTransducer;

/// A static block of markup copied verbatim around the converted body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    lines: Vec<String>,
}

impl Fragment {
    /// Splits `text` into lines the same way the file reader does: on `\n`,
    /// dropping a trailing `\r`.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Assembles a whole document: header lines, transformed body lines, footer
/// lines. Containers still open after the last body line stay open.
pub fn assemble<'a, I>(header: &Fragment, body: I, footer: &Fragment) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut transducer = LineTransducer::new();
    let mut out = header.lines.clone();
    out.extend(body.into_iter().map(|line| transducer.transform(line)));
    out.extend(footer.lines.iter().cloned());
    out
}

/// Like [`assemble`], joined into one string with a `\n` after every line.
pub fn render_document(header: &Fragment, body: &str, footer: &Fragment) -> String {
    let mut out = String::new();
    for line in assemble(header, body.lines(), footer) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn header() -> Fragment {
        Fragment::from_text("<HTML>\n<BODY>\n")
    }

    fn footer() -> Fragment {
        Fragment::from_text("</BODY>\n</HTML>\n")
    }

    #[test]
    fn fragment_lines_strip_terminators() {
        let f = Fragment::from_text("a\r\nb\n");
        assert_eq!(f.lines(), ["a", "b"]);
        assert_eq!(Fragment::from_text(""), Fragment::default());
    }

    #[test]
    fn header_and_footer_wrap_body_verbatim() {
        let out = assemble(&header(), ["x"], &footer());
        assert_eq!(out, vec!["<HTML>", "<BODY>", "- x<BR>", "</BODY>", "</HTML>"]);
    }

    #[test]
    fn fragments_are_not_transformed() {
        let header = Fragment::from_lines(["# not a heading", "**raw**"]);
        let out = assemble(&header, std::iter::empty(), &Fragment::default());
        assert_eq!(out, vec!["# not a heading", "**raw**"]);
    }

    #[test]
    fn mixed_document_end_to_end() {
        let body = "# Title\n- one\n- two\n\nplain text";
        let expected = "<HTML>\n<BODY>\n\
                        <DIV><H1>Title</H1>\n\
                        <UL>\n<LI>one\n\
                        <LI>two\n\
                        \n\
                        - plain text<BR>\n\
                        </BODY>\n</HTML>\n";
        assert_eq!(render_document(&header(), body, &footer()), expected);
    }

    #[test]
    fn empty_body_keeps_fragments() {
        assert_eq!(
            render_document(&header(), "", &footer()),
            "<HTML>\n<BODY>\n</BODY>\n</HTML>\n"
        );
    }

    #[test]
    fn open_quote_is_not_closed_at_end() {
        let out = render_document(&Fragment::default(), ">> q", &Fragment::default());
        assert!(out.ends_with("q<BR>\n"));
        assert!(!out.contains("</P>"));
    }
}
