pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeBody, CodeFence};
pub use heading::Heading;
pub use list::{ITEM_TAG, OrderedList, UnorderedList};
pub use paragraph::Paragraph;
