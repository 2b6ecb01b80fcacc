/// ATX heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    /// The heading marker character, repeated once per level.
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level if `block` opens with 1-6 `#` and a space.
    pub fn level(block: &str) -> Option<usize> {
        let level = block.chars().take_while(|&c| c == Self::MARKER).count();
        if (1..=Self::MAX_LEVEL).contains(&level) && block[level..].starts_with(' ') {
            Some(level)
        } else {
            None
        }
    }

    /// Splits a heading block into its level and the text after the markers,
    /// with leading whitespace removed.
    pub fn strip(block: &str) -> Option<(usize, &str)> {
        let level = Self::level(block)?;
        Some((level, block[level..].trim_start()))
    }

    /// The `h1`..`h6` tag for a level.
    pub fn tag(level: usize) -> String {
        format!("h{level}")
    }
}
