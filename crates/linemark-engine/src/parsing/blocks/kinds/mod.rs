pub mod block_quote;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod rule;

pub use block_quote::BlockQuote;
pub use heading::Heading;
pub use list::ListItem;
pub use paragraph::Paragraph;
pub use rule::Rule;
