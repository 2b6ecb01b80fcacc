/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';
    pub const TAG: &'static str = "blockquote";

    pub fn is_quote_line(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips one `>` marker and the whitespace around the remaining text.
    pub fn strip_line(line: &str) -> &str {
        line.strip_prefix(Self::PREFIX).unwrap_or(line).trim()
    }

    /// Joins the stripped lines of a quote block with single spaces.
    ///
    /// Lines left empty after stripping (a bare `>`) are skipped.
    pub fn content(block: &str) -> String {
        block
            .lines()
            .map(Self::strip_line)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
