use super::{
    kinds::Link,
    types::{Segment, Tag},
};

/// Reduces a segment list back to a string, reading text spans from `s`.
pub fn render(s: &str, segments: &[Segment]) -> String {
    let mut out = String::with_capacity(s.len() + 8 * segments.len());
    for seg in segments {
        match *seg {
            Segment::Text(span) => out.push_str(span.slice(s)),
            Segment::Tag(Tag::AnchorOpen { href }) => {
                out.push_str(Link::ANCHOR_PREFIX);
                out.push_str(href.slice(s));
                out.push_str(Link::ANCHOR_SUFFIX);
            }
            Segment::Tag(Tag::AnchorClose) => out.push_str(Link::ANCHOR_CLOSE),
            Segment::Tag(Tag::Open(emphasis)) => out.push_str(emphasis.open_tag()),
            Segment::Tag(Tag::Close(emphasis)) => out.push_str(emphasis.close_tag()),
        }
    }
    out
}
