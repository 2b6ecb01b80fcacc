/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// classification matches. Inline parsing is applied to paragraph content.
pub struct Paragraph;

impl Paragraph {
    pub const TAG: &'static str = "p";

    /// Joins the block's lines with single spaces for inline parsing.
    pub fn content(block: &str) -> String {
        block.lines().collect::<Vec<_>>().join(" ")
    }
}
