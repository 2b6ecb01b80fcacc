/// Strong emphasis, `**bold**`.
pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";
    pub const TAG: &'static str = "b";
}

/// Emphasis, `_italic_`.
pub struct Italic;

impl Italic {
    pub const DELIMITER: &'static str = "_";
    pub const TAG: &'static str = "i";
}
