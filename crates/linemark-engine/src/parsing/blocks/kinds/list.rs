/// List item block type with owned delimiter constants.
pub struct ListItem;

impl ListItem {
    pub const PREFIX: &'static str = "- ";
    /// Replacement for the first item of a list; opens the `<UL>` wrapper.
    pub const OPEN: &'static str = "<UL>\n<LI>";
    pub const ITEM: &'static str = "<LI>";

    pub fn matches(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Rewrites a list line. The opening item only replaces the first
    /// occurrence of the prefix; later items replace every occurrence.
    pub fn rewrite(line: &str, opens_list: bool) -> String {
        if opens_list {
            line.replacen(Self::PREFIX, Self::OPEN, 1)
        } else {
            line.replace(Self::PREFIX, Self::ITEM)
        }
    }
}
