/// The classification of a single block.
///
/// Computed per block by [`classify`](super::classify); never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// Default when no other classification matches.
    Paragraph,
    /// `#` to `######` followed by a space.
    Heading,
    /// Fenced with triple backticks at both ends.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, … in sequence.
    OrderedList,
}
