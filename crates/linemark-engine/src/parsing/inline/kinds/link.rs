/// Inline link type with owned delimiter constants.
///
/// Matches `[label](url)` only; brackets are not escaped or nested.
pub struct Link;

impl Link {
    pub const LABEL_OPEN: char = '[';
    /// Separates the label from the url; the pass is anchored on this.
    pub const MIDDLE: &'static str = "](";
    pub const URL_CLOSE: char = ')';

    pub const ANCHOR_PREFIX: &'static str = "<A HREF=\"";
    pub const ANCHOR_SUFFIX: &'static str = "\">";
    pub const ANCHOR_CLOSE: &'static str = "</A>";
}
