/// The element wrapping each list item.
pub const ITEM_TAG: &str = "li";

/// Unordered list block type: every line starts with `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";
    pub const TAG: &'static str = "ul";

    pub fn is_item(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    /// Item text with the marker removed.
    pub fn items(block: &str) -> impl Iterator<Item = &str> {
        block
            .lines()
            .map(|line| line.strip_prefix(Self::MARKER).unwrap_or(line))
    }
}

/// Ordered list block type: lines numbered `1. `, `2. `, … in sequence.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";
    pub const TAG: &'static str = "ol";

    /// The marker expected on item `number` (1-based).
    pub fn marker(number: usize) -> String {
        format!("{number}{}", Self::SEPARATOR)
    }

    /// True if every line carries the next marker in sequence, starting at 1.
    pub fn is_sequential(block: &str) -> bool {
        block
            .lines()
            .enumerate()
            .all(|(i, line)| line.starts_with(&Self::marker(i + 1)))
    }

    /// Item text with the marker removed.
    pub fn items(block: &str) -> impl Iterator<Item = &str> {
        block.lines().map(|line| {
            let digits = line.bytes().take_while(u8::is_ascii_digit).count();
            line[digits..]
                .strip_prefix(Self::SEPARATOR)
                .unwrap_or(line)
        })
    }
}
