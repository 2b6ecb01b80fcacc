use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies a block string. First match wins:
///
/// 1. Heading
/// 2. Code fence
/// 3. Quote (every line)
/// 4. Unordered list (every line)
/// 5. Ordered list (sequential from 1)
/// 6. Paragraph
///
/// Never fails: a block whose quote or list markers are inconsistent
/// degrades to [`BlockType::Paragraph`].
pub fn classify(block: &str) -> BlockType {
    if block.is_empty() {
        return BlockType::Paragraph;
    }
    if Heading::level(block).is_some() {
        return BlockType::Heading;
    }
    if CodeFence::is_fenced(block) {
        return BlockType::Code;
    }
    if block.lines().all(BlockQuote::is_quote_line) {
        return BlockType::Quote;
    }
    if block.lines().all(UnorderedList::is_item) {
        return BlockType::UnorderedList;
    }
    if OrderedList::is_sequential(block) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}
