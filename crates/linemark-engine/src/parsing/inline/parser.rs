use crate::parsing::span::Span;

use super::{
    cursor::Cursor,
    kinds::{Emphasis, Link},
    types::{Segment, Tag},
};

/// Pushes `[start, end)` as a text segment unless it is empty.
fn flush_text(out: &mut Vec<Segment>, start: usize, end: usize) {
    if end > start {
        out.push(Segment::Text(Span { start, end }));
    }
}

/// Tokenizes the first `[label](url)` of a line.
///
/// The pass is anchored on the first `](`; the label starts at the nearest
/// `[` before it and the url ends at the nearest `)` after it. When either
/// bracket is missing the whole line comes back as a single text segment.
pub fn parse_link(s: &str) -> Vec<Segment> {
    let mut out = vec![];

    let Some(middle) = s.find(Link::MIDDLE) else {
        flush_text(&mut out, 0, s.len());
        return out;
    };
    let url_start = middle + Link::MIDDLE.len();
    let (Some(label_open), Some(url_close)) = (
        s[..middle].rfind(Link::LABEL_OPEN),
        s[url_start..]
            .find(Link::URL_CLOSE)
            .map(|off| url_start + off),
    ) else {
        flush_text(&mut out, 0, s.len());
        return out;
    };

    flush_text(&mut out, 0, label_open);
    out.push(Segment::Tag(Tag::AnchorOpen {
        href: Span {
            start: url_start,
            end: url_close,
        },
    }));
    flush_text(&mut out, label_open + 1, middle);
    out.push(Segment::Tag(Tag::AnchorClose));
    flush_text(&mut out, url_close + 1, s.len());
    out
}

/// Tokenizes emphasis markers of one style.
///
/// For each marker, in order:
/// - not followed by a space: opening tag
/// - else not preceded by a space: closing tag
/// - else left in the text, and the scan moves on by one byte
///
/// A marker at the very end of the line counts as followed by a space. The
/// scan stops as soon as the next marker sits at index 0, so a line that
/// begins with a marker is left alone entirely. Tags are not balanced: an
/// odd marker count or a closing marker glued to the next word yields
/// unpaired tags.
pub fn parse_emphasis(s: &str, emphasis: Emphasis) -> Vec<Segment> {
    let marker = emphasis.marker();
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    while let Some(at) = cur.seek(marker) {
        if at == 0 {
            break;
        }

        let followed_by_text = cur.peek_at(marker.len()).is_some_and(|b| b != b' ');
        let preceded_by_text = cur.prev().is_some_and(|b| b != b' ');

        let tag = if followed_by_text {
            Tag::Open(emphasis)
        } else if preceded_by_text {
            Tag::Close(emphasis)
        } else {
            cur.bump();
            continue;
        };

        flush_text(&mut out, text_start, at);
        out.push(Segment::Tag(tag));
        cur.bump_n(marker.len());
        text_start = cur.i;
    }

    flush_text(&mut out, text_start, s.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(start: usize, end: usize) -> Segment {
        Segment::Text(Span { start, end })
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_link("hello world"), vec![text(0, 11)]);
        assert_eq!(parse_emphasis("hello world", Emphasis::Bold), vec![text(0, 11)]);
    }

    #[test]
    fn parse_empty_line() {
        assert!(parse_link("").is_empty());
        assert!(parse_emphasis("", Emphasis::Italic).is_empty());
    }

    #[test]
    fn parse_link_segments() {
        let segs = parse_link("go [text](http://x) now");
        assert_eq!(
            segs,
            vec![
                text(0, 3),
                Segment::Tag(Tag::AnchorOpen {
                    href: Span { start: 10, end: 18 }
                }),
                text(4, 8),
                Segment::Tag(Tag::AnchorClose),
                text(19, 23),
            ]
        );
    }

    #[test]
    fn parse_link_without_surrounding_text() {
        let segs = parse_link("[text](http://x)");
        assert_eq!(
            segs,
            vec![
                Segment::Tag(Tag::AnchorOpen {
                    href: Span { start: 7, end: 15 }
                }),
                text(1, 5),
                Segment::Tag(Tag::AnchorClose),
            ]
        );
    }

    #[test]
    fn parse_link_missing_label_open() {
        assert_eq!(parse_link("a](b)"), vec![text(0, 5)]);
    }

    #[test]
    fn parse_link_missing_url_close() {
        assert_eq!(parse_link("[a](b"), vec![text(0, 5)]);
    }

    #[test]
    fn parse_bold_pair() {
        let segs = parse_emphasis("x **b** y", Emphasis::Bold);
        assert_eq!(
            segs,
            vec![
                text(0, 2),
                Segment::Tag(Tag::Open(Emphasis::Bold)),
                text(4, 5),
                Segment::Tag(Tag::Close(Emphasis::Bold)),
                text(7, 9),
            ]
        );
    }

    #[test]
    fn marker_at_line_start_stops_scan() {
        assert_eq!(
            parse_emphasis("**a** b **c** d", Emphasis::Bold),
            vec![text(0, 15)]
        );
    }

    #[test]
    fn spaced_marker_is_skipped() {
        assert_eq!(parse_emphasis("a ** b", Emphasis::Bold), vec![text(0, 6)]);
    }

    #[test]
    fn skipped_marker_does_not_end_scan() {
        let segs = parse_emphasis("x * y *z", Emphasis::Italic);
        assert_eq!(
            segs,
            vec![
                text(0, 6),
                Segment::Tag(Tag::Open(Emphasis::Italic)),
                text(7, 8),
            ]
        );
    }

    #[test]
    fn marker_at_end_of_line_closes() {
        let segs = parse_emphasis("x *y*", Emphasis::Italic);
        assert_eq!(
            segs,
            vec![
                text(0, 2),
                Segment::Tag(Tag::Open(Emphasis::Italic)),
                text(3, 4),
                Segment::Tag(Tag::Close(Emphasis::Italic)),
            ]
        );
    }

    #[test]
    fn lone_marker_at_end_after_space_is_kept() {
        assert_eq!(parse_emphasis("x *", Emphasis::Italic), vec![text(0, 3)]);
    }
}
